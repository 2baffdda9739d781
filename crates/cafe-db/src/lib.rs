//! # cafe-db: Database Layer for Café Counter
//!
//! This crate provides database access for the café ordering backend.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Café Counter Data Flow                            │
//! │                                                                         │
//! │  HTTP handler (place_order)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      cafe-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │   Database    │    │ Repositories  │    │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │    │  (menu.rs)    │    │  (embedded)  │   │   │
//! │  │   │               │    │  (order.rs)   │    │              │   │   │
//! │  │   │ SqlitePool    │◄───│ MenuRepo      │    │ 001_init.sql │   │   │
//! │  │   │ Connection    │    │ OrderRepo     │    │              │   │   │
//! │  │   │ Management    │    │               │    │              │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │                        SQLite Database                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (menu, order)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cafe_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let db = Database::new(DbConfig::new("path/to/cafe.db")).await?;
//!
//! // Use repositories
//! let menus = db.menus().list_with_options().await?;
//! let order = db.orders().place_order(&lines).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, OrderError};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::menu::{MenuRepository, MenuWithOptions, NewMenuItem};
pub use repository::order::{
    OrderDetail, OrderItemDetail, OrderItemOptionDetail, OrderPage, OrderRepository,
};
