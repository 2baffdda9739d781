//! Catalog endpoints: menu listing and staff stock adjustment.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use cafe_core::MenuOption;
use cafe_db::MenuWithOptions;

use crate::error::{ApiError, ErrorCode};
use crate::state::AppState;

/// Query parameters for the menu listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMenusQuery {
    /// When absent or false the stock field is omitted from the response
    /// entirely (customers never see inventory).
    pub include_stock: Option<bool>,
}

/// The menu listing response shape.
///
/// `stock_qty` is `Option` purely for serialization control: `None` means
/// the field is absent from the JSON, never `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuView {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_qty: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub options: Vec<MenuOption>,
}

impl MenuView {
    /// Renders a stored menu row, gating the stock field on `include_stock`.
    pub fn render(menu: MenuWithOptions, include_stock: bool) -> Self {
        let MenuWithOptions { item, options } = menu;
        MenuView {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            image_url: item.image_url,
            stock_qty: include_stock.then_some(item.stock_qty),
            created_at: item.created_at,
            updated_at: item.updated_at,
            options,
        }
    }
}

/// GET /api/menus?includeStock=bool
pub async fn list_menus(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListMenusQuery>,
) -> Result<Json<Vec<MenuView>>, ApiError> {
    let include_stock = query.include_stock.unwrap_or(false);

    let menus = state.db.menus().list_with_options().await?;
    let views = menus
        .into_iter()
        .map(|menu| MenuView::render(menu, include_stock))
        .collect();

    Ok(Json(views))
}

/// Body of the stock adjustment request.
///
/// `delta` is kept as a raw JSON value so a missing field, a string, or a
/// fractional number all surface as `INVALID_DELTA` instead of a generic
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct AdjustStockBody {
    pub delta: Option<Value>,
}

/// PATCH /api/menus/{id}/stock
///
/// Applies a delta to the stock counter, clamped to the valid range by the
/// repository. Responds with the post-clamp value.
pub async fn adjust_stock(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<AdjustStockBody>,
) -> Result<Json<Value>, ApiError> {
    let delta = body
        .delta
        .as_ref()
        .and_then(Value::as_i64)
        .ok_or(ApiError::bare(ErrorCode::InvalidDelta))?;

    let stock_qty = state.db.menus().adjust_stock(id, delta).await?;

    Ok(Json(json!({ "menuId": id, "stockQty": stock_qty })))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::MenuItem;

    fn menu_row() -> MenuWithOptions {
        MenuWithOptions {
            item: MenuItem {
                id: 1,
                name: "Americano (Iced)".to_string(),
                description: None,
                price: 4000,
                image_url: None,
                stock_qty: 10,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            options: vec![MenuOption {
                id: 1,
                menu_id: 1,
                name: "Extra shot".to_string(),
                price_delta: 500,
            }],
        }
    }

    #[test]
    fn test_stock_field_absent_by_default() {
        let view = MenuView::render(menu_row(), false);
        let json = serde_json::to_value(&view).unwrap();

        // Absent, not null
        assert!(json.get("stockQty").is_none());
        assert_eq!(json["price"], 4000);
        assert_eq!(json["options"][0]["priceDelta"], 500);
    }

    #[test]
    fn test_stock_field_present_when_requested() {
        let view = MenuView::render(menu_row(), true);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["stockQty"], 10);
    }

    #[test]
    fn test_delta_must_be_a_well_formed_integer() {
        let well_formed: AdjustStockBody = serde_json::from_str(r#"{"delta": -5}"#).unwrap();
        assert_eq!(well_formed.delta.as_ref().and_then(Value::as_i64), Some(-5));

        let fractional: AdjustStockBody = serde_json::from_str(r#"{"delta": 1.5}"#).unwrap();
        assert_eq!(fractional.delta.as_ref().and_then(Value::as_i64), None);

        let string: AdjustStockBody = serde_json::from_str(r#"{"delta": "5"}"#).unwrap();
        assert_eq!(string.delta.as_ref().and_then(Value::as_i64), None);

        let missing: AdjustStockBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(missing.delta.is_none());
    }
}
