// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the domain and services
// - It provides the boundary between the presentation front-end and the
//   catalog
// - It translates between DTOs and domain entities

pub mod commands;
pub mod dto;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use state::AppState;
