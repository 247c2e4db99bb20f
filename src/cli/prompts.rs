//! Warning, error, and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow warning on stderr, suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            println!("*** -COPIED TO CLIPBOARD- ***");
        } else {
            println!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
        }
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive and quiet runs fall back silently.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    warn(&format!("Clipboard unavailable: {reason}"));
    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}
