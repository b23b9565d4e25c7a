// src/error/types.rs
use crate::domain::{RemoveError, UpdateError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Unified error surfaced by the service layer. Transparent wrapping keeps
/// the domain Display text intact, so `to_string()` at the UI boundary
/// yields the exact user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Update(#[from] UpdateError),

    #[error(transparent)]
    Remove(#[from] RemoveError),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
