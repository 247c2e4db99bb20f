use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("No unused password found after {attempts} attempt(s)")]
    ExhaustedUniqueSpace { attempts: usize },
}

pub type Result<T> = std::result::Result<T, GenError>;
