//! # HTTP Routes
//!
//! Route table and router assembly for the Café Counter API.
//!
//! ## Route Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           /api                                          │
//! │                                                                         │
//! │  GET    /health                    liveness + clock                     │
//! │  GET    /menus?includeStock=bool   catalog (stock gated by flag)        │
//! │  PATCH  /menus/{id}/stock          staff stock adjustment               │
//! │  POST   /orders                    customer checkout                    │
//! │  GET    /orders?status&limit&cursor staff dashboard listing             │
//! │  GET    /orders/{id}               single order with items              │
//! │  PATCH  /orders/{id}/status        staff lifecycle transition           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers are thin: parse and validate input, call one repository method,
//! map errors. All business rules live in cafe-core / cafe-db.

use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod health;
pub mod menu;
pub mod order;

/// Builds the full application router.
///
/// CORS is permissive: the SPA and the staff dashboard are served from
/// other origins during development, and the API carries no credentials.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(health::health))
        .route("/menus", get(menu::list_menus))
        .route("/menus/{id}/stock", patch(menu::adjust_stock))
        .route("/orders", post(order::place_order).get(order::list_orders))
        .route("/orders/{id}", get(order::get_order))
        .route("/orders/{id}/status", patch(order::update_status));

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
