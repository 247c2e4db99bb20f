//! One-shot command line mode.

mod args;
pub mod prompts;
pub mod quiet;

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, info, warn};
use passmint::{GenError, PasswordConfig, PasswordGenerator};
use rand::Rng;
use thiserror::Error;
use zeroize::Zeroize;

use crate::terminal::mask;

pub use args::Args;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] GenError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Aborted")]
    Aborted,
}

/// Generate `args.number` passwords and print or copy them.
pub fn run(args: &Args) -> Result<(), CliError> {
    quiet::set(args.quiet);
    let config = args.config();
    config.validate()?;
    debug!("cli config: {config:?}, count {}", args.number);

    let passwords = match args.seed {
        Some(seed) => {
            info!("seeded run ({seed})");
            generate(PasswordGenerator::seeded(seed), &config, args.number)?
        }
        None => generate(PasswordGenerator::new(), &config, args.number)?,
    };

    let result = output(args, &passwords);
    for mut password in passwords {
        password.zeroize();
    }
    result
}

fn generate<R: Rng>(
    mut generator: PasswordGenerator<R>,
    config: &PasswordConfig,
    count: usize,
) -> Result<Vec<String>, CliError> {
    Ok(generator.generate_batch(config, count)?)
}

fn output(args: &Args, passwords: &[String]) -> Result<(), CliError> {
    if args.clipboard {
        match copy_to_clipboard(passwords) {
            Ok(()) => {
                prompts::clipboard_copied(passwords.len());
                if args.mask {
                    print_passwords(passwords, true)?;
                }
                return Ok(());
            }
            Err(CliError::Clipboard(reason)) => {
                warn!("clipboard unavailable: {reason}");
                if !prompts::clipboard_fallback_prompt(&reason) {
                    return Err(CliError::Aborted);
                }
            }
            Err(e) => return Err(e),
        }
    }
    print_passwords(passwords, args.mask)
}

fn print_passwords(passwords: &[String], masked: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for password in passwords {
        if masked {
            writeln!(out, "{}", mask(password))?;
        } else {
            writeln!(out, "{password}")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn copy_to_clipboard(passwords: &[String]) -> Result<(), CliError> {
    let mut ctx = ClipboardContext::new().map_err(|e| CliError::Clipboard(e.to_string()))?;
    store_secret(&mut ctx, passwords.join("\n"))
}

/// Put `secret` on the clipboard, wiping our copy and the one read back.
pub(crate) fn store_secret<C: ClipboardProvider>(
    ctx: &mut C,
    mut secret: String,
) -> Result<(), CliError> {
    let stored = ctx.set_contents(secret.clone());
    secret.zeroize();
    stored.map_err(|e| CliError::Clipboard(e.to_string()))?;
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Option<String>,
        reads: usize,
        broken: bool,
    }

    impl ClipboardProvider for FakeClipboard {
        fn get_contents(&mut self) -> Result<String, Box<dyn Error + Send + Sync>> {
            self.reads += 1;
            self.contents.clone().ok_or_else(|| "empty".into())
        }

        fn set_contents(&mut self, contents: String) -> Result<(), Box<dyn Error + Send + Sync>> {
            if self.broken {
                return Err("no display".into());
            }
            self.contents = Some(contents);
            Ok(())
        }
    }

    #[test]
    fn stored_secret_is_read_back() {
        let mut ctx = FakeClipboard::default();
        store_secret(&mut ctx, "Aa0!".to_string()).unwrap();
        assert_eq!(ctx.contents.as_deref(), Some("Aa0!"));
        assert_eq!(ctx.reads, 1);
    }

    #[test]
    fn failed_store_skips_read_back() {
        let mut ctx = FakeClipboard {
            broken: true,
            ..Default::default()
        };
        let err = store_secret(&mut ctx, "Aa0!".to_string()).unwrap_err();
        assert!(matches!(err, CliError::Clipboard(reason) if reason == "no display"));
        assert_eq!(ctx.reads, 0);
    }
}
