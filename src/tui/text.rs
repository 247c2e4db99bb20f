use passmint::CharacterClass;
use passmint::pass::charset;

use super::Form;
use crate::terminal::{
    GREEN, RED, RESET, STRIKE, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top,
    calculate_entropy, clear, entropy_strength, flush, print_error, print_rule,
};

fn class_chip(form: &Form, class: CharacterClass) -> String {
    if form.config().enabled(class) {
        format!("[{}]", class.label())
    } else {
        format!("{STRIKE}[{}]{RESET}", class.label())
    }
}

pub fn print_form(form: &Form, notice: Option<&str>) {
    clear();
    box_top("passmint");
    box_line_center("Create your secure password");
    box_line("");

    box_line(&format!("{UNDERLINE}Length{RESET}:"));
    box_line(&format!("  \u{25B2}/\u{25BC}  {}", form.length_input()));
    if let Some(err) = form.error() {
        box_line(&format!("  {RED}{err}{RESET}"));
    } else {
        box_line("");
    }

    box_line(&format!("{UNDERLINE}Characters{RESET}:"));
    let chips: Vec<String> = CharacterClass::ALL
        .iter()
        .map(|class| class_chip(form, *class))
        .collect();
    box_line(&format!("  {}", chips.join("  ")));

    let size = charset::size(form.config());
    let bits = calculate_entropy(form.config().length, size);
    box_line(&format!(
        "  {} chars \u{2022} {:.1} bits ({})",
        size,
        bits,
        entropy_strength(bits)
    ));
    box_line("");

    print_rule();
    match form.display_password() {
        Some(shown) => {
            let copied = if form.is_copied() {
                format!("  {GREEN}copied{RESET}")
            } else {
                String::new()
            };
            box_line_center(&format!("{shown}{copied}"));
        }
        None => box_line_center("Press Enter to create a password"),
    }
    print_rule();
    let view = if form.is_shown() { "v: hide" } else { "v: show" };
    box_line_center(&format!("Enter: create | {view} | c: copy | h: help | q: quit"));
    box_bottom();

    if let Some(notice) = notice {
        print_error(notice);
    }
    flush();
}

pub fn print_help() {
    clear();
    box_top("passmint help");
    box_line("");
    box_opt("  Up / +", "Length +1");
    box_opt("  Down / -", "Length -1 (not below 4)");
    box_opt("  0-9, Bksp", "Edit the length");
    box_opt("  Ctrl+U", "Clear the length");
    box_opt("  u l n s", "Toggle ABC / abc / 123 / #@!");
    box_opt("  Enter", "Create a password");
    box_opt("  v", "Show or hide the password");
    box_opt("  c", "Copy the password to the clipboard");
    box_opt("  q / Esc", "Quit");
    box_line("");
    box_line("At least one character class stays enabled. Each password");
    box_line("contains every enabled class and is never repeated while");
    box_line("the program keeps running.");
    box_line("");
    box_line_center("Press any key to return");
    box_bottom();
    flush();
}
