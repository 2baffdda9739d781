//! # Pricing Calculator
//!
//! Pure price math for order placement, plus the stock clamp rule.
//!
//! ## Price Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     How a Line Is Priced                                │
//! │                                                                         │
//! │  Menu: Caffe Latte, price 5000                                          │
//! │  Options on this menu: [Extra shot +500 (id 5), Syrup +0 (id 6)]        │
//! │                                                                         │
//! │  Request: quantity 2, optionIds [5, 999]                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  resolve_options ── id 5 matches, id 999 matches nothing (ignored)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  unit_price  = 5000 + 500        = 5500                                 │
//! │  line_total  = 5500 × 2          = 11000                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown option ids are NOT an error. Resolution is a lookup-then-sum over
//! whatever options actually match, so a stale id in a client cart simply
//! contributes nothing.

use crate::types::MenuOption;
use crate::MAX_STOCK_QTY;

/// Resolves selected option ids against the options belonging to one menu
/// item.
///
/// Matches by explicit option id. Ids that match nothing are dropped
/// silently. The returned slice keeps the catalog's option order, and a
/// duplicated id in `selected` still matches its option only once.
pub fn resolve_options<'a>(options: &'a [MenuOption], selected: &[i64]) -> Vec<&'a MenuOption> {
    options
        .iter()
        .filter(|opt| selected.contains(&opt.id))
        .collect()
}

/// Computes the unit price for one line: menu price plus the deltas of the
/// selected options that actually belong to the menu item.
pub fn unit_price(menu_price: i64, options: &[MenuOption], selected: &[i64]) -> i64 {
    let option_total: i64 = resolve_options(options, selected)
        .iter()
        .map(|opt| opt.price_delta)
        .sum();
    menu_price + option_total
}

/// Computes a line total: unit price × quantity.
pub fn line_total(unit_price: i64, quantity: i64) -> i64 {
    unit_price * quantity
}

/// Applies a stock delta with clamping: `clamp(current + delta, 0, 999)`.
///
/// Used by manual stock adjustment. A large negative delta floors at zero
/// rather than going negative; a large positive delta caps at
/// [`MAX_STOCK_QTY`].
pub fn clamp_stock(current: i64, delta: i64) -> i64 {
    (current + delta).clamp(0, MAX_STOCK_QTY)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: i64, price_delta: i64) -> MenuOption {
        MenuOption {
            id,
            menu_id: 1,
            name: format!("option-{id}"),
            price_delta,
        }
    }

    #[test]
    fn test_unit_price_sums_selected_deltas() {
        let options = vec![option(1, 500), option(2, 0), option(3, 300)];
        assert_eq!(unit_price(4000, &options, &[1, 3]), 4800);
        assert_eq!(unit_price(4000, &options, &[2]), 4000);
        assert_eq!(unit_price(4000, &options, &[]), 4000);
    }

    #[test]
    fn test_unknown_option_ids_are_ignored() {
        let options = vec![option(1, 500)];
        // A nonexistent id must not fail pricing, it just adds nothing
        assert_eq!(unit_price(4000, &options, &[1, 999]), 4500);
        assert_eq!(unit_price(4000, &options, &[999]), 4000);
        assert!(resolve_options(&options, &[999]).is_empty());
    }

    #[test]
    fn test_duplicate_selection_counts_once() {
        let options = vec![option(1, 500)];
        assert_eq!(unit_price(4000, &options, &[1, 1, 1]), 4500);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(4500, 3), 13500);
        assert_eq!(line_total(4500, 1), 4500);
    }

    #[test]
    fn test_clamp_stock_floors_at_zero() {
        assert_eq!(clamp_stock(10, -15), 0);
        assert_eq!(clamp_stock(10, -10), 0);
        assert_eq!(clamp_stock(10, -3), 7);
    }

    #[test]
    fn test_clamp_stock_caps_at_max() {
        assert_eq!(clamp_stock(10, 10_000), MAX_STOCK_QTY);
        assert_eq!(clamp_stock(998, 1), 999);
        assert_eq!(clamp_stock(999, 1), 999);
    }
}
