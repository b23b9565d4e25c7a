// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;

#[cfg(test)]
mod catalog_service_tests;

// Re-export all services and their types
pub use catalog_service::{AddBookRequest, CatalogService, UpdateBookRequest};
