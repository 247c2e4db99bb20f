//! Password generation.

pub mod charset;
mod config;
mod generate;
mod history;

pub use charset::{CharacterClass, Pools};
pub use config::{MIN_LENGTH, PasswordConfig};
pub use generate::{DEFAULT_MAX_ATTEMPTS, PasswordGenerator, satisfies};
pub use history::SessionHistory;
