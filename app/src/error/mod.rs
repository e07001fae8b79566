use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug)]
pub struct CustomError {
    pub code: StatusCode,
    pub message: String,
}

impl std::fmt::Display for CustomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl std::error::Error for CustomError {}

impl CustomError {
    pub fn new(code: StatusCode, message: String) -> Self {
        Self { code, message }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found")]
    NotFound,
    #[error("A profile already exists for this account or email")]
    AlreadyExists,
    #[error("Account is disabled")]
    Disabled,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Match not found")]
    NotFound,
    #[error("Invalid participants: {0}")]
    InvalidParticipants(String),
    #[error("Only the match creator or an administrator can do this")]
    NotOwner,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Administrator role required")]
    Forbidden,
    #[error("Account is disabled")]
    Disabled,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("Invalid month `{0}`, expected YYYY-MM")]
    InvalidMonth(String),
}
