// src/application/state.rs

use crate::services::CatalogService;

/// Application state handed to the command layer.
/// Owned directly: there is exactly one interaction thread, so no shared
/// ownership or interior mutability is carried. Commands that mutate take
/// `&mut AppState`.
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog_service: CatalogService,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
