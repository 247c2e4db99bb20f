//! Passwords already handed out by one generator.

use std::collections::{HashMap, HashSet};

use zeroize::Zeroize;

use super::config::PasswordConfig;

/// Grows with every accepted password and never shrinks. Contents are
/// zeroized when the history is dropped.
#[derive(Debug, Default)]
pub struct SessionHistory {
    seen: HashSet<String>,
    issued: HashMap<PasswordConfig, usize>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, password: &str) -> bool {
        self.seen.contains(password)
    }

    /// Record a password issued for `config`. Returns false if it was already
    /// present.
    pub fn record(&mut self, password: String, config: &PasswordConfig) -> bool {
        let inserted = self.seen.insert(password);
        if inserted {
            *self.issued.entry(*config).or_default() += 1;
        }
        inserted
    }

    /// How many passwords were issued for exactly this config.
    pub fn issued_for(&self, config: &PasswordConfig) -> usize {
        self.issued.get(config).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl Drop for SessionHistory {
    fn drop(&mut self) {
        for mut password in self.seen.drain() {
            password.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_once() {
        let config = PasswordConfig::new(4);
        let mut history = SessionHistory::new();
        assert!(history.is_empty());
        assert!(history.record("abcd".into(), &config));
        assert!(!history.record("abcd".into(), &config));
        assert!(history.contains("abcd"));
        assert!(!history.contains("abce"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.issued_for(&config), 1);
    }

    #[test]
    fn issued_counts_are_per_config() {
        let short = PasswordConfig::new(4);
        let long = PasswordConfig::new(8);
        let mut history = SessionHistory::new();
        history.record("Aa0!".into(), &short);
        history.record("Aa0!Bb1@".into(), &long);
        history.record("Cc2#Dd3$".into(), &long);
        assert_eq!(history.issued_for(&short), 1);
        assert_eq!(history.issued_for(&long), 2);
        assert_eq!(history.issued_for(&PasswordConfig::new(5)), 0);
    }
}
