//! # Menu Repository
//!
//! Catalog reads, stock adjustment, and catalog setup.
//!
//! ## Stock Update Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stock Update Strategy                                │
//! │                                                                         │
//! │  ❌ WRONG: read-modify-write (lost updates between requests)            │
//! │     let stock = SELECT stock_qty ...;                                   │
//! │     UPDATE menu_items SET stock_qty = <stock + delta> ...               │
//! │                                                                         │
//! │  ✅ CORRECT: delta-based compare-and-write in ONE statement             │
//! │     UPDATE menu_items                                                   │
//! │     SET stock_qty = MAX(0, MIN(999, stock_qty + ?delta))                │
//! │     WHERE id = ? RETURNING stock_qty                                    │
//! │                                                                         │
//! │  Manual adjustment and order placement both mutate stock; both go       │
//! │  through a guarded single-statement update so concurrent changes        │
//! │  never observe a read-modify-write gap.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::debug;

use crate::error::{DbError, DbResult};
use cafe_core::{MenuItem, MenuOption, MAX_STOCK_QTY};

/// A menu item with its nested options, as the catalog listing returns it.
#[derive(Debug, Clone, Serialize)]
pub struct MenuWithOptions {
    #[serde(flatten)]
    pub item: MenuItem,
    pub options: Vec<MenuOption>,
}

/// Input for catalog setup (seed binary and tests).
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image_url: Option<String>,
    pub stock_qty: i64,
}

/// Repository for menu/catalog database operations.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    /// Creates a new MenuRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Lists all menu items with their nested options.
    ///
    /// Two queries (items, options) grouped in memory - no N+1.
    /// Whether the stock field reaches the client is decided at the API
    /// layer; storage always returns it.
    pub async fn list_with_options(&self) -> DbResult<Vec<MenuWithOptions>> {
        let items: Vec<MenuItem> = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, name, description, price, image_url, stock_qty,
                   created_at, updated_at
            FROM menu_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let options: Vec<MenuOption> = sqlx::query_as::<_, MenuOption>(
            r#"
            SELECT id, menu_id, name, price_delta
            FROM menu_options
            ORDER BY menu_id, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_menu: HashMap<i64, Vec<MenuOption>> = HashMap::new();
        for option in options {
            by_menu.entry(option.menu_id).or_default().push(option);
        }

        let menus = items
            .into_iter()
            .map(|item| {
                let options = by_menu.remove(&item.id).unwrap_or_default();
                MenuWithOptions { item, options }
            })
            .collect();

        Ok(menus)
    }

    /// Gets a menu item by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(MenuItem))` - Menu item found
    /// * `Ok(None)` - Menu item not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<MenuItem>> {
        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, name, description, price, image_url, stock_qty,
                   created_at, updated_at
            FROM menu_items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Gets the options belonging to one menu item.
    pub async fn options_for(&self, menu_id: i64) -> DbResult<Vec<MenuOption>> {
        let options = sqlx::query_as::<_, MenuOption>(
            r#"
            SELECT id, menu_id, name, price_delta
            FROM menu_options
            WHERE menu_id = ?1
            ORDER BY id
            "#,
        )
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(options)
    }

    /// Adjusts stock by a delta, clamped to `0..=MAX_STOCK_QTY`.
    ///
    /// One atomic statement: the clamp and the write happen inside the
    /// UPDATE itself, so concurrent adjustments and order decrements never
    /// lose an update.
    ///
    /// ## Arguments
    /// * `id` - Menu item ID
    /// * `delta` - Change in stock (negative to remove, positive to restock)
    ///
    /// ## Returns
    /// The new stock value after clamping.
    pub async fn adjust_stock(&self, id: i64, delta: i64) -> DbResult<i64> {
        debug!(id = %id, delta = %delta, "Adjusting stock");

        let now = Utc::now();

        let new_stock: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE menu_items
            SET stock_qty = MAX(0, MIN(?2, stock_qty + ?3)),
                updated_at = ?4
            WHERE id = ?1
            RETURNING stock_qty
            "#,
        )
        .bind(id)
        .bind(MAX_STOCK_QTY)
        .bind(delta)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        new_stock.ok_or_else(|| DbError::not_found("Menu", id))
    }

    /// Inserts a new menu item (catalog setup).
    pub async fn insert(&self, new: &NewMenuItem) -> DbResult<MenuItem> {
        debug!(name = %new.name, "Inserting menu item");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO menu_items (name, description, price, image_url,
                                    stock_qty, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(&new.image_url)
        .bind(new.stock_qty)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(MenuItem {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            description: new.description.clone(),
            price: new.price,
            image_url: new.image_url.clone(),
            stock_qty: new.stock_qty,
            created_at: now,
            updated_at: now,
        })
    }

    /// Adds an option to a menu item (catalog setup).
    ///
    /// Options are immutable after creation; there is no update path.
    pub async fn add_option(
        &self,
        menu_id: i64,
        name: &str,
        price_delta: i64,
    ) -> DbResult<MenuOption> {
        let result = sqlx::query(
            r#"
            INSERT INTO menu_options (menu_id, name, price_delta)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(menu_id)
        .bind(name)
        .bind(price_delta)
        .execute(&self.pool)
        .await?;

        Ok(MenuOption {
            id: result.last_insert_rowid(),
            menu_id,
            name: name.to_string(),
            price_delta,
        })
    }

    /// Counts menu items (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seed_menu(db: &Database, stock_qty: i64) -> MenuItem {
        db.menus()
            .insert(&NewMenuItem {
                name: "Americano (Iced)".to_string(),
                description: Some("Crisp and refreshing".to_string()),
                price: 4000,
                image_url: None,
                stock_qty,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_groups_options_under_their_menu() {
        let db = test_db().await;
        let menus = db.menus();

        let a = seed_menu(&db, 10).await;
        let b = menus
            .insert(&NewMenuItem {
                name: "Caffe Latte".to_string(),
                description: None,
                price: 5000,
                image_url: None,
                stock_qty: 10,
            })
            .await
            .unwrap();

        menus.add_option(a.id, "Extra shot", 500).await.unwrap();
        menus.add_option(a.id, "Syrup", 0).await.unwrap();
        menus.add_option(b.id, "Extra shot", 500).await.unwrap();

        let listed = menus.list_with_options().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].options.len(), 2);
        assert_eq!(listed[1].options.len(), 1);
        assert!(listed[0].options.iter().all(|o| o.menu_id == a.id));
    }

    #[tokio::test]
    async fn test_adjust_stock_applies_delta() {
        let db = test_db().await;
        let item = seed_menu(&db, 10).await;

        let stock = db.menus().adjust_stock(item.id, -3).await.unwrap();
        assert_eq!(stock, 7);

        let reread = db.menus().get_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(reread.stock_qty, 7);
    }

    #[tokio::test]
    async fn test_adjust_stock_clamps_at_zero() {
        let db = test_db().await;
        let item = seed_menu(&db, 10).await;

        // 10 - 15 floors at 0, not -5
        let stock = db.menus().adjust_stock(item.id, -15).await.unwrap();
        assert_eq!(stock, 0);
    }

    #[tokio::test]
    async fn test_adjust_stock_caps_at_max() {
        let db = test_db().await;
        let item = seed_menu(&db, 10).await;

        let stock = db.menus().adjust_stock(item.id, 10_000).await.unwrap();
        assert_eq!(stock, MAX_STOCK_QTY);
    }

    #[tokio::test]
    async fn test_adjust_stock_unknown_menu() {
        let db = test_db().await;

        let err = db.menus().adjust_stock(404, 1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
