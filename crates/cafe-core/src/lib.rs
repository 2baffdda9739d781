//! # cafe-core: Pure Business Logic for Café Counter
//!
//! This crate is the **heart** of the café ordering backend. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Café Counter Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React SPA)                         │   │
//! │  │    Menu Browser ──► Cart ──► Checkout ──► Staff Dashboard       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST/JSON                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     apps/api (axum)                             │   │
//! │  │    list_menus, place_order, update_status, adjust_stock         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ cafe-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │  pricing  │  │  status   │  │ validation│   │   │
//! │  │   │ MenuItem  │  │ unit price│  │ PLACED →  │  │   rules   │   │   │
//! │  │   │   Order   │  │ line total│  │ ... DONE  │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    cafe-db (Database Layer)                     │   │
//! │  │         SQLite queries, migrations, the order transaction       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Order, OrderItem, etc.)
//! - [`pricing`] - Unit price / line total math and stock clamping
//! - [`status`] - Order status state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in the smallest currency unit (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pricing;
pub mod status;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cafe_core::MenuItem` instead of
// `use cafe_core::types::MenuItem`

pub use error::{CoreError, CoreResult, ValidationError};
pub use status::OrderStatus;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum stock quantity a menu item can hold.
///
/// ## Business Reason
/// Stock adjustments clamp to `0..=MAX_STOCK_QTY`. The cap prevents a fat
/// fingered restock (e.g. +10000) from producing an absurd inventory figure.
pub const MAX_STOCK_QTY: i64 = 999;

/// Default page size for order listings.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size for order listings.
///
/// ## Business Reason
/// Keeps a single staff-dashboard request from dragging the whole order
/// history across the wire.
pub const MAX_PAGE_SIZE: i64 = 100;
