// src/error/mod.rs
//
// Application Error Types

pub mod types;

pub use types::{AppError, AppResult};
