// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the presentation layer and Services
// - Commands accept DTOs, return DTOs
// - Commands convert errors to user-facing strings
// - Commands NEVER contain business logic

pub mod book_commands;

pub use book_commands::*;
