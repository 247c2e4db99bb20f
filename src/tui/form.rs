//! Interactive form state.
//!
//! Holds what the user is editing and applies the same rules the form has
//! always had: the length field must be a number of at least 4, the down
//! stepper stops at 4, and the last enabled class cannot be switched off.

use passmint::{CharacterClass, GenError, MIN_LENGTH, PasswordConfig, PasswordGenerator};
use rand::Rng;
use zeroize::Zeroize;

use crate::terminal::mask;

pub const NOT_A_NUMBER: &str = "You must enter a valid number";
pub const TOO_SHORT: &str = "Your password must have at least 4 characters";

const MAX_INPUT_DIGITS: usize = 6;

#[derive(Debug)]
pub struct Form {
    config: PasswordConfig,
    length_input: String,
    error: Option<&'static str>,
    show: bool,
    copied: bool,
    password: Option<String>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new(PasswordConfig::default())
    }
}

impl Form {
    pub fn new(config: PasswordConfig) -> Self {
        let mut form = Self {
            config,
            length_input: config.length.to_string(),
            error: None,
            show: false,
            copied: false,
            password: None,
        };
        form.validate_input();
        form
    }

    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_shown(&self) -> bool {
        self.show
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The password as it should be drawn: plain when shown, masked otherwise.
    pub fn display_password(&self) -> Option<String> {
        self.password.as_deref().map(|p| {
            if self.show {
                p.to_string()
            } else {
                mask(p)
            }
        })
    }

    /// Generation is only offered for a numeric length of at least 4.
    pub fn can_generate(&self) -> bool {
        self.error.is_none()
    }

    /// Arrow buttons. Decrementing at or below the minimum is ignored.
    pub fn step_length(&mut self, up: bool) {
        self.error = None;
        let current = self.length_input.parse::<usize>().unwrap_or(self.config.length);
        if !up && current <= MIN_LENGTH {
            return;
        }
        let next = if up { current.saturating_add(1) } else { current - 1 };
        self.set_length_input(next.to_string());
    }

    pub fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() || self.length_input.len() >= MAX_INPUT_DIGITS {
            return;
        }
        let mut input = self.length_input.clone();
        input.push(digit);
        self.set_length_input(input);
    }

    pub fn backspace(&mut self) {
        let mut input = self.length_input.clone();
        input.pop();
        self.set_length_input(input);
    }

    pub fn set_length_input(&mut self, input: String) {
        self.length_input = input;
        self.validate_input();
    }

    fn validate_input(&mut self) {
        self.error = match self.length_input.trim().parse::<usize>() {
            Ok(n) if n >= MIN_LENGTH => {
                self.config = self.config.with_length(n);
                None
            }
            Ok(_) => Some(TOO_SHORT),
            // An empty field reads as zero.
            Err(_) if self.length_input.trim().is_empty() => Some(TOO_SHORT),
            Err(_) => Some(NOT_A_NUMBER),
        };
    }

    /// Returns false when the toggle was refused because `class` is the last
    /// enabled one.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        match self.config.toggled(class) {
            Some(next) => {
                self.config = next;
                true
            }
            None => false,
        }
    }

    pub fn toggle_show(&mut self) {
        self.show = !self.show;
    }

    pub fn mark_copied(&mut self) {
        if self.password.is_some() {
            self.copied = true;
        }
    }

    /// Generate with the current settings. Returns `Ok(false)` without
    /// touching the generator while the length field is invalid.
    pub fn generate<R: Rng>(
        &mut self,
        generator: &mut PasswordGenerator<R>,
    ) -> Result<bool, GenError> {
        if !self.can_generate() {
            return Ok(false);
        }
        let password = generator.generate(&self.config)?;
        if let Some(mut old) = self.password.replace(password) {
            old.zeroize();
        }
        self.copied = false;
        Ok(true)
    }
}

impl Drop for Form {
    fn drop(&mut self) {
        if let Some(password) = self.password.as_mut() {
            password.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_valid_with_defaults() {
        let form = Form::default();
        assert_eq!(form.length_input(), "6");
        assert!(form.can_generate());
        assert!(!form.is_shown());
        assert!(form.password().is_none());
    }

    #[test]
    fn stepper_stops_at_minimum() {
        let mut form = Form::new(PasswordConfig::new(5));
        form.step_length(false);
        assert_eq!(form.length_input(), "4");
        form.step_length(false);
        assert_eq!(form.length_input(), "4");
        form.step_length(true);
        assert_eq!(form.config().length, 5);
    }

    #[test]
    fn typed_length_is_validated() {
        let mut form = Form::default();
        form.backspace();
        assert_eq!(form.error(), Some(TOO_SHORT));
        form.push_digit('3');
        assert_eq!(form.error(), Some(TOO_SHORT));
        assert!(!form.can_generate());
        form.push_digit('2');
        assert_eq!(form.error(), None);
        assert_eq!(form.config().length, 32);

        form.set_length_input("abc".into());
        assert_eq!(form.error(), Some(NOT_A_NUMBER));
        assert_eq!(form.config().length, 32);
    }

    #[test]
    fn stepping_clears_error_and_recovers() {
        let mut form = Form::default();
        form.set_length_input("x".into());
        form.step_length(true);
        assert_eq!(form.error(), None);
        assert_eq!(form.length_input(), "7");
    }

    #[test]
    fn last_class_cannot_be_disabled() {
        let mut form = Form::default();
        assert!(form.toggle(CharacterClass::Capital));
        assert!(form.toggle(CharacterClass::Number));
        assert!(form.toggle(CharacterClass::Special));
        assert!(!form.toggle(CharacterClass::Lowercase));
        assert!(form.config().has_lowercase);
        assert_eq!(form.config().enabled_count(), 1);
    }

    #[test]
    fn invalid_length_withholds_generation() {
        let mut form = Form::default();
        let mut generator = PasswordGenerator::seeded(5);
        form.set_length_input("2".into());
        assert_eq!(form.generate(&mut generator), Ok(false));
        assert_eq!(generator.history_len(), 0);
        assert!(form.password().is_none());
    }

    #[test]
    fn generation_resets_copied_and_masks() {
        let mut form = Form::default();
        let mut generator = PasswordGenerator::seeded(5);
        form.mark_copied();
        assert!(!form.is_copied());

        assert_eq!(form.generate(&mut generator), Ok(true));
        form.mark_copied();
        assert!(form.is_copied());

        let first = form.password().unwrap().to_string();
        assert_eq!(form.display_password().unwrap(), "✱".repeat(first.chars().count()));
        form.toggle_show();
        assert_eq!(form.display_password().unwrap(), first);

        assert_eq!(form.generate(&mut generator), Ok(true));
        assert!(!form.is_copied());
        assert_ne!(form.password().unwrap(), first);
    }
}
