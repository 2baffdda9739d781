//! # Validation Module
//!
//! Input validation for incoming order requests and listing parameters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extraction (axum/serde)                                  │
//! │  └── Type validation (deserialization)                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                        │
//! │  └── Runs BEFORE any transaction is opened                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                             │
//! │  └── CHECK / NOT NULL / foreign key constraints                         │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::OrderLine;
use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MAX_STOCK_QTY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an incoming order request.
///
/// ## Rules
/// - The request must contain at least one line
/// - Every quantity must be a positive integer
/// - No quantity may exceed the stock cap (a single line can never be
///   satisfiable beyond it)
///
/// Runs before the order transaction is opened, so a malformed request
/// never touches storage.
pub fn validate_order_lines(lines: &[OrderLine]) -> ValidationResult<()> {
    if lines.is_empty() {
        return Err(ValidationError::EmptyOrder);
    }

    for line in lines {
        if line.quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }

        if line.quantity > MAX_STOCK_QTY {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: MAX_STOCK_QTY,
            });
        }
    }

    Ok(())
}

/// Normalizes a pagination limit: defaults when absent, rejects non-positive
/// values, caps at [`MAX_PAGE_SIZE`].
pub fn validate_limit(limit: Option<i64>) -> ValidationResult<i64> {
    match limit {
        None => Ok(DEFAULT_PAGE_SIZE),
        Some(n) if n <= 0 => Err(ValidationError::MustBePositive {
            field: "limit".to_string(),
        }),
        Some(n) => Ok(n.min(MAX_PAGE_SIZE)),
    }
}

/// Normalizes a pagination cursor (row offset). Absent means start from the
/// top; negative offsets are rejected.
pub fn validate_cursor(cursor: Option<i64>) -> ValidationResult<i64> {
    match cursor {
        None => Ok(0),
        Some(n) if n < 0 => Err(ValidationError::OutOfRange {
            field: "cursor".to_string(),
            min: 0,
            max: i64::MAX,
        }),
        Some(n) => Ok(n),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
