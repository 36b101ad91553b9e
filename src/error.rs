use crate::form::Field;
use thiserror::Error;

/// Raised when the text of a numeric input cannot be parsed as a number.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("Please enter a valid number for {field}.")]
pub struct ValidationError {
    pub field: Field,
}

impl ValidationError {
    pub fn new(field: Field) -> Self {
        Self { field }
    }
}
