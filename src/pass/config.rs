//! Password configuration value.

use super::charset::CharacterClass;
use crate::error::{GenError, Result};

/// Shortest length the repair pass can place every class marker into.
pub const MIN_LENGTH: usize = 4;

/// What the caller wants: a length and the set of enabled character classes.
///
/// Values are immutable from the generator's point of view. Editing helpers
/// return a new config instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordConfig {
    pub length: usize,
    pub has_capital: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special: bool,
}

impl PasswordConfig {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    pub fn enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Capital => self.has_capital,
            CharacterClass::Lowercase => self.has_lowercase,
            CharacterClass::Number => self.has_number,
            CharacterClass::Special => self.has_special,
        }
    }

    /// Enabled classes in universe order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.enabled(*class))
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled_classes().count()
    }

    pub fn with_length(self, length: usize) -> Self {
        Self { length, ..self }
    }

    pub fn with_class(self, class: CharacterClass, on: bool) -> Self {
        let mut next = self;
        match class {
            CharacterClass::Capital => next.has_capital = on,
            CharacterClass::Lowercase => next.has_lowercase = on,
            CharacterClass::Number => next.has_number = on,
            CharacterClass::Special => next.has_special = on,
        }
        next
    }

    /// Flip one class. Returns `None` when that would leave no class enabled.
    pub fn toggled(self, class: CharacterClass) -> Option<Self> {
        let next = self.with_class(class, !self.enabled(class));
        (next.enabled_count() > 0).then_some(next)
    }

    pub fn validate(&self) -> Result<()> {
        if self.enabled_count() == 0 {
            return Err(GenError::InvalidConfiguration(
                "at least one character class must be enabled".into(),
            ));
        }
        if self.length < MIN_LENGTH {
            return Err(GenError::InvalidConfiguration(format!(
                "length must be at least {MIN_LENGTH}, got {}",
                self.length
            )));
        }
        Ok(())
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 6,
            has_capital: true,
            has_lowercase: true,
            has_number: true,
            has_special: true,
        }
    }
}
