use thiserror::Error;

/// A raw value that failed its field's format check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid name '{0}': a name must contain only letters and be 1-20 symbols long")]
    InvalidName(String),

    #[error("Invalid phone '{0}': use 10-13 digits, or '+' followed by 12-13 digits")]
    InvalidPhone(String),

    #[error("Invalid birthday '{0}': a birthday must be written as year/month/day")]
    InvalidBirthday(String),

    #[error("Invalid page size '{0}': use a whole number greater than zero")]
    InvalidPageSize(String),

    #[error("Duplicate contact '{0}': names must be unique")]
    DuplicateName(String),
}

#[derive(Error, Debug)]
pub enum AbookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Command '{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, AbookError>;
