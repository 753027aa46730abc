/// User input validation

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty input not allowed")]
    EmptyInput,
}

/// Trim a submitted message, rejecting blank input.
pub fn normalize_message(input: &str) -> Result<&str, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(trimmed)
}
