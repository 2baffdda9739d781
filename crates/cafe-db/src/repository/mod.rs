//! # Repository Module
//!
//! Database repository implementations for Café Counter.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.   │
//! │                                                                         │
//! │  HTTP handler                                                           │
//! │       │                                                                 │
//! │       │  db.orders().place_order(&lines)                                │
//! │       ▼                                                                 │
//! │  OrderRepository                                                        │
//! │  ├── place_order(&self, lines)        ← the order transaction engine    │
//! │  ├── transition_status(&self, id, to) ← the status state machine        │
//! │  ├── get_detail(&self, id)                                              │
//! │  └── list(&self, status, limit, offset)                                 │
//! │       │                                                                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                         │
//! │  • Handlers stay thin: parse, call, map errors                          │
//! │  • Transactions never leak past a repository method                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`menu::MenuRepository`] - Catalog reads, stock adjustment, setup
//! - [`order::OrderRepository`] - Order placement, lifecycle, queries

pub mod menu;
pub mod order;
