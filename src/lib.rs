// src/lib.rs
// BookDesk - Single-user in-memory book catalog
//
// Architecture:
// - Domain-centric: validation and catalog semantics live in `domain`
// - Explicit: no implicit behavior, no process-wide globals
// - Synchronous: one interaction thread, direct calls, no suspension points
// - Application Layer: the boundary the presentation front-end talks to

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_new_book,
    validate_required_fields,
    // Book
    Book,
    // Catalog
    Catalog,
    Genre,
    // Error taxonomy
    RemoveError,
    UpdateError,
    ValidationError,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{AddBookRequest, CatalogService, UpdateBookRequest};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;
