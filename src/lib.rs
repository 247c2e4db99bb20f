//! Character-class aware password generation with per-session uniqueness.

pub mod error;
pub mod pass;

pub use error::GenError;
pub use pass::{CharacterClass, MIN_LENGTH, PasswordConfig, PasswordGenerator, Pools};
