//! Shared application state.

use cafe_db::Database;

/// State injected into every handler via axum's `State` extractor.
///
/// Constructed once at startup and shared behind an `Arc`; the database
/// handle itself is cheap to clone (pooled).
pub struct AppState {
    pub db: Database,
}
