//! # Domain Types
//!
//! Core domain types used throughout Café Counter.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │     Order       │   │   OrderItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │       │
//! │  │  name           │   │  total_amount   │   │  menu_id (snap) │       │
//! │  │  price          │   │  status         │   │  unit_price     │       │
//! │  │  stock_qty      │   │  created_at     │   │  line_total     │       │
//! │  └────────┬────────┘   └─────────────────┘   └────────┬────────┘       │
//! │           │ 1..n                                      │ 0..n           │
//! │  ┌────────▼────────┐                         ┌────────▼────────┐       │
//! │  │   MenuOption    │                         │ OrderItemOption │       │
//! │  │  price_delta    │                         │ price_delta     │       │
//! │  └─────────────────┘                         │ (snapshot)      │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `OrderItem` and `OrderItemOption` freeze prices at order time. Later edits
//! to the catalog never retroactively change a committed order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::status::OrderStatus;

// =============================================================================
// Menu Item
// =============================================================================

/// A menu item available for ordering.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    /// Unique identifier (database-assigned integer).
    pub id: i64,

    /// Display name shown to customers and on the staff dashboard.
    pub name: String,

    /// Optional description for the menu card.
    pub description: Option<String>,

    /// Price in the smallest currency unit.
    pub price: i64,

    /// Image reference for the menu card.
    pub image_url: Option<String>,

    /// Remaining purchasable quantity. Never negative, capped at
    /// [`MAX_STOCK_QTY`](crate::MAX_STOCK_QTY).
    pub stock_qty: i64,

    /// When the item was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the item was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Menu Option
// =============================================================================

/// An option attached to a menu item (extra shot, syrup, ...).
///
/// Immutable after catalog setup; many options per menu item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuOption {
    pub id: i64,

    /// Owning menu item.
    pub menu_id: i64,

    pub name: String,

    /// Additive price adjustment in the smallest currency unit.
    /// Zero or positive.
    pub price_delta: i64,
}

// =============================================================================
// Order
// =============================================================================

/// A committed customer order.
///
/// Created exactly once per successful checkout. `total_amount` is immutable
/// after creation; `status` is the only field that changes post-creation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub id: i64,

    /// Sum of the line totals of all order items.
    pub total_amount: i64,

    pub status: OrderStatus,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item in an order.
/// Uses the snapshot pattern to freeze pricing at order time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderItem {
    pub id: i64,

    pub order_id: i64,

    /// Referenced menu item id. A reference, not a live join: later catalog
    /// edits do not alter this line.
    pub menu_id: i64,

    /// Quantity ordered (>= 1).
    pub quantity: i64,

    /// Unit price at order time: menu price + sum of selected option deltas.
    pub unit_price: i64,

    /// unit_price × quantity.
    pub line_total: i64,
}

// =============================================================================
// Order Item Option
// =============================================================================

/// A selected option snapshot attached to an order item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderItemOption {
    pub id: i64,

    pub order_item_id: i64,

    /// Referenced option id.
    pub option_id: i64,

    /// Price delta captured at order time, independent of later option edits.
    pub price_delta: i64,
}

// =============================================================================
// Order Request
// =============================================================================

/// One requested cart line in an incoming order.
///
/// Wire shape: `{ "menuId": 1, "quantity": 2, "optionIds": [3, 4] }`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    pub menu_id: i64,

    pub quantity: i64,

    /// Selected option ids. Ids that do not belong to the menu item are
    /// silently ignored (they contribute nothing to the price).
    #[serde(default)]
    pub option_ids: Vec<i64>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_line_deserializes_camel_case() {
        let line: OrderLine =
            serde_json::from_str(r#"{"menuId": 1, "quantity": 2, "optionIds": [3]}"#).unwrap();
        assert_eq!(line.menu_id, 1);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.option_ids, vec![3]);
    }

    #[test]
    fn test_order_line_option_ids_default_empty() {
        let line: OrderLine = serde_json::from_str(r#"{"menuId": 1, "quantity": 1}"#).unwrap();
        assert!(line.option_ids.is_empty());
    }

    #[test]
    fn test_order_serializes_status_label() {
        let order = Order {
            id: 7,
            total_amount: 4500,
            status: OrderStatus::Placed,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "PLACED");
        assert_eq!(json["totalAmount"], 4500);
    }
}
