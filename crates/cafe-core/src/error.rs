//! # Error Types
//!
//! Domain-specific error types for cafe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cafe-core errors (this file)                                           │
//! │  ├── CoreError        - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  cafe-db errors (separate crate)                                        │
//! │  └── DbError          - Database operation failures                     │
//! │                                                                         │
//! │  API errors (in app)                                                    │
//! │  └── ApiError         - What HTTP clients see (code + message)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → client        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (menu name, order id, statuses)
//! 3. Errors are enum variants, never String
//! 4. Conflict-class errors (stock, transitions) stay distinguishable from
//!    internal failures all the way to the HTTP boundary

use thiserror::Error;

use crate::status::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations. They map to the conflict /
/// not-found classes at the API boundary, never to generic internal errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A requested menu item does not exist.
    ///
    /// ## When This Occurs
    /// - An order references a menu id that was never created
    /// - The cart is stale relative to the catalog
    #[error("Menu not found: {0}")]
    MenuNotFound(i64),

    /// Stock is lower than the requested quantity.
    ///
    /// Carries the menu name for the customer-facing message, plus the
    /// counts for operators.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    /// The requested status change is not in the transition table.
    ///
    /// ## When This Occurs
    /// - Skipping a state (PLACED → IN_PROGRESS)
    /// - Reverting (ACCEPTED → PLACED is not even a parseable target)
    /// - Any transition out of DONE
    #[error("Order {order_id} cannot move from {from} to {to}")]
    InvalidTransition {
        order_id: i64,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any storage mutation is attempted.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The order contains no items.
    #[error("order must contain at least one item")]
    EmptyOrder,

    /// Value must be a positive integer.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in the allowed set (e.g. an unknown status label).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Caffe Latte".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Caffe Latte: available 3, requested 5"
        );

        let err = CoreError::InvalidTransition {
            order_id: 9,
            from: OrderStatus::Placed,
            to: OrderStatus::Done,
        };
        assert_eq!(err.to_string(), "Order 9 cannot move from PLACED to DONE");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::EmptyOrder.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
