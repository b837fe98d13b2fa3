use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Mail dispatch failed: {0}")]
    MailDispatch(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Submission problems the person filling in the form can fix.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl ValidationError {
    pub fn details(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Please fill in all the required fields",
            ValidationError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
