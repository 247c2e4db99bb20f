//! Terminal utilities with proper state management
//!
//! Handles ANSI codes, box drawing, and consistent output. Every line ends in
//! `\r\n` so the same helpers render correctly in raw mode.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const STRIKE: &str = "\x1b[9m\x1b[90m";

/// Glyph shown in place of each hidden password character.
pub const MASK_CHAR: char = '✱';

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues)
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red
pub fn print_error(msg: &str) {
    print!("{RED}{msg}{RESET}\r\n");
}

/// Print a horizontal rule (box style)
pub fn print_rule() {
    print!("├{}┤\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Replace every character with the mask glyph, keeping the character count.
pub fn mask(password: &str) -> String {
    password.chars().map(|_| MASK_CHAR).collect()
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        print!("┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH.saturating_sub(2 + title_part.chars().count());
        print!("┌{}{}┐\r\n", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    print!("│ {}{} │\r\n", content, " ".repeat(padding));
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    print!(
        "│ {}{}{} │\r\n",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    );
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    print!("└{}┘\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Print a key binding with its description.
pub fn box_opt(key: &str, desc: &str) {
    let key_col = 16;
    let padded = format!("{key:<key_col$}");
    box_line(&format!("{padded}{desc}"));
}

/// Display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_counts_characters_not_bytes() {
        assert_eq!(mask("Ñañ!"), "✱✱✱✱");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn console_width_skips_escapes() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("Ññ"), 2);
    }

    #[test]
    fn entropy_for_default_config() {
        let bits = calculate_entropy(6, 82);
        assert!((bits - 6.0 * 82f64.log2()).abs() < 1e-9);
        assert_eq!(entropy_strength(bits), "Fair");
        assert_eq!(entropy_strength(calculate_entropy(4, 0)), "Weak");
        assert_eq!(entropy_strength(calculate_entropy(30, 82)), "Very Strong");
    }
}
