//! # Order Status State Machine
//!
//! The order lifecycle as a strict forward-only state machine.
//!
//! ## Transition Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Lifecycle                                    │
//! │                                                                         │
//! │   PLACED ───► ACCEPTED ───► IN_PROGRESS ───► DONE                       │
//! │                                                                         │
//! │   • No transition ever reverts to a previous state                      │
//! │   • No state has a self-loop                                            │
//! │   • DONE is terminal                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cancellation is deliberately not in the table. The customer UI has a
//! cancel affordance, but the backend never accepted a CANCELLED target;
//! supporting it means extending this table, not widening the parser.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// The lifecycle status of an order.
///
/// Stored and serialized as the uppercase labels the wire contract uses:
/// `PLACED`, `ACCEPTED`, `IN_PROGRESS`, `DONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum OrderStatus {
    /// Customer checkout committed; waiting for staff to accept.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "PLACED"))]
    Placed,
    /// Staff accepted the order.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "ACCEPTED"))]
    Accepted,
    /// Order is being prepared.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "IN_PROGRESS"))]
    InProgress,
    /// Order is ready / handed over. Terminal.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "DONE"))]
    Done,
}

impl OrderStatus {
    /// Returns the single legal successor state, if any.
    pub const fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Accepted),
            OrderStatus::Accepted => Some(OrderStatus::InProgress),
            OrderStatus::InProgress => Some(OrderStatus::Done),
            OrderStatus::Done => None,
        }
    }

    /// Checks whether `target` is a legal transition from this state.
    ///
    /// The table is strictly forward-only: skipping a state, reverting, or
    /// repeating the current state are all illegal.
    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        self.next() == Some(target)
    }

    /// Parses a requested *target* label.
    ///
    /// Only `ACCEPTED`, `IN_PROGRESS` and `DONE` are valid targets. `PLACED`
    /// is a real state but never a valid target (orders are born PLACED), so
    /// it is rejected here along with any unknown label.
    pub fn parse_target(label: &str) -> Option<OrderStatus> {
        match label {
            "ACCEPTED" => Some(OrderStatus::Accepted),
            "IN_PROGRESS" => Some(OrderStatus::InProgress),
            "DONE" => Some(OrderStatus::Done),
            _ => None,
        }
    }

    /// The wire label for this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Done => "DONE",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses any of the four state labels. Unlike [`OrderStatus::parse_target`]
/// this accepts `PLACED` too - listing filters may name any state.
impl std::str::FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "PLACED" => Ok(OrderStatus::Placed),
            "ACCEPTED" => Ok(OrderStatus::Accepted),
            "IN_PROGRESS" => Ok(OrderStatus::InProgress),
            "DONE" => Ok(OrderStatus::Done),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: ["PLACED", "ACCEPTED", "IN_PROGRESS", "DONE"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
