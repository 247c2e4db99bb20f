//! Interactive password form.

mod form;
mod input;
mod text;

use std::io;

use copypasta::ClipboardContext;
use crossterm::event::{Event, KeyEventKind, read};
use log::{debug, warn};
use passmint::{PasswordConfig, PasswordGenerator};

use crate::cli::{CliError, store_secret};
use crate::terminal::{RawModeGuard, clear, reset_terminal};

pub use form::Form;
pub use input::{Action, action_for};
pub use text::{print_form, print_help};

/// Run the form until the user quits. One generator (and so one session
/// history) lives for the whole run.
pub fn run(initial: PasswordConfig) -> io::Result<()> {
    let mut generator = PasswordGenerator::new();
    let mut form = Form::new(initial);
    let mut clipboard: Option<ClipboardContext> = None;
    let mut notice: Option<String> = None;
    let mut help = false;

    let mut guard = RawModeGuard::new()?;

    loop {
        if help {
            print_help();
        } else {
            print_form(&form, notice.as_deref());
        }

        let Event::Key(key) = read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        let action = action_for(key);

        if help {
            help = false;
            if action != Some(Action::Quit) {
                continue;
            }
        }
        let Some(action) = action else {
            continue;
        };
        notice = None;

        match action {
            Action::Quit => break,
            Action::Help => help = true,
            Action::LengthUp => form.step_length(true),
            Action::LengthDown => form.step_length(false),
            Action::Digit(d) => form.push_digit(d),
            Action::Backspace => form.backspace(),
            Action::ClearLength => form.set_length_input(String::new()),
            Action::Toggle(class) => {
                if !form.toggle(class) {
                    notice = Some(format!(
                        "At least one character class must stay enabled ({class})"
                    ));
                }
            }
            Action::ToggleShow => form.toggle_show(),
            Action::Generate => match form.generate(&mut generator) {
                Ok(true) => debug!("{} password(s) this session", generator.history_len()),
                Ok(false) => {}
                Err(e) => notice = Some(e.to_string()),
            },
            Action::Copy => {
                if let Some(err) = copy(&mut clipboard, &mut form) {
                    warn!("clipboard copy failed: {err}");
                    notice = Some(format!("Clipboard error: {err}"));
                }
            }
        }
    }

    guard.release();
    clear();
    reset_terminal();
    Ok(())
}

/// Copy the current password. Returns an error message on failure.
fn copy(clipboard: &mut Option<ClipboardContext>, form: &mut Form) -> Option<String> {
    form.password()?;

    if clipboard.is_none() {
        match ClipboardContext::new() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => return Some(e.to_string()),
        }
    }
    let ctx = clipboard.as_mut()?;
    let password = form.password()?.to_string();

    match store_secret(ctx, password) {
        Ok(()) => {
            form.mark_copied();
            None
        }
        Err(CliError::Clipboard(reason)) => Some(reason),
        Err(e) => Some(e.to_string()),
    }
}
