//! # Order Repository
//!
//! The order placement transaction engine, the status state machine's
//! storage side, and the order read paths.
//!
//! ## Placement Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Placement (one transaction)                    │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    for each line, in input order:                                       │
//! │      1. look up menu ──────────── missing? ──► MenuNotFound, ROLLBACK   │
//! │      2. stock < quantity? ─────────────────► InsufficientStock, ROLLBACK│
//! │      3. UPDATE stock_qty = stock_qty - q                                │
//! │           WHERE id = ? AND stock_qty >= q   (guarded decrement)         │
//! │      4. resolve option ids scoped to this menu, sum deltas              │
//! │      5. unit price / line total → running order total                   │
//! │    INSERT orders (status PLACED, total)                                 │
//! │    INSERT order_items + order_item_options (price snapshots)            │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Any error drops the transaction handle → full rollback. Because the    │
//! │  decrement happens per line INSIDE the transaction, a duplicate menu    │
//! │  id later in the same request sees the earlier line's decrement and     │
//! │  the stock requirements compound.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult, OrderResult};
use cafe_core::{
    pricing, validation, CoreError, MenuItem, MenuOption, Order, OrderItem, OrderItemOption,
    OrderLine, OrderStatus,
};

/// A full order read model: the order plus its items, each with the
/// referenced menu record and the option snapshots taken at order time.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItemDetail>,
}

/// One order line with its menu reference and option snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemDetail {
    #[serde(flatten)]
    pub item: OrderItem,
    /// The referenced menu record. A reference for display purposes only -
    /// the priced fields on `item` are the order-time snapshot.
    pub menu: MenuItem,
    pub options: Vec<OrderItemOptionDetail>,
}

/// An option snapshot joined with the referenced option's display name,
/// so clients can render "Extra shot +500" without a catalog lookup.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderItemOptionDetail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub option: OrderItemOption,
    pub name: String,
}

/// One page of the order listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
    pub items: Vec<OrderDetail>,
    /// Id of the last row when the page is full (more data may exist);
    /// absent on a short page. The cursor itself is a row offset tracked by
    /// the caller.
    pub next_cursor: Option<i64>,
}

/// A priced line held between the validation/decrement pass and the insert
/// pass of the placement transaction.
struct PricedLine {
    menu_id: i64,
    quantity: i64,
    unit_price: i64,
    line_total: i64,
    options: Vec<MenuOption>,
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Places an order: validates the cart against stock, decrements stock,
    /// computes totals, and persists the order with its snapshots - all or
    /// nothing.
    ///
    /// ## Failure Modes
    /// * `CoreError::Validation` - empty cart or non-positive quantity;
    ///   returned before the transaction is opened
    /// * `CoreError::MenuNotFound` - a line references an unknown menu id
    /// * `CoreError::InsufficientStock` - stock below the requested quantity
    ///   (including quantity accumulated by earlier lines of this request)
    /// * `DbError` - storage failure
    ///
    /// All failures after `begin` roll back every stock decrement and every
    /// insert of this request.
    pub async fn place_order(&self, lines: &[OrderLine]) -> OrderResult<Order> {
        validation::validate_order_lines(lines).map_err(CoreError::from)?;

        debug!(lines = lines.len(), "Placing order");

        let mut tx = self.pool.begin().await?;

        let mut total_amount: i64 = 0;
        let mut priced: Vec<PricedLine> = Vec::with_capacity(lines.len());

        // Strictly sequential in input order: a duplicate menu id later in
        // the request must observe the decrement of the earlier line.
        for line in lines {
            let menu: MenuItem = sqlx::query_as::<_, MenuItem>(
                r#"
                SELECT id, name, description, price, image_url, stock_qty,
                       created_at, updated_at
                FROM menu_items
                WHERE id = ?1
                "#,
            )
            .bind(line.menu_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::MenuNotFound(line.menu_id))?;

            if menu.stock_qty < line.quantity {
                warn!(
                    menu_id = menu.id,
                    available = menu.stock_qty,
                    requested = line.quantity,
                    "Order aborted: insufficient stock"
                );
                return Err(CoreError::InsufficientStock {
                    name: menu.name,
                    available: menu.stock_qty,
                    requested: line.quantity,
                }
                .into());
            }

            // Guarded decrement. The WHERE clause re-checks stock so a
            // concurrent order serialized between our read and this write
            // cannot drive stock negative.
            let updated = sqlx::query(
                r#"
                UPDATE menu_items
                SET stock_qty = stock_qty - ?2, updated_at = ?3
                WHERE id = ?1 AND stock_qty >= ?2
                "#,
            )
            .bind(line.menu_id)
            .bind(line.quantity)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;

            if updated.rows_affected() == 0 {
                warn!(menu_id = menu.id, "Order aborted: lost stock race");
                return Err(CoreError::InsufficientStock {
                    name: menu.name,
                    available: menu.stock_qty,
                    requested: line.quantity,
                }
                .into());
            }

            // Resolve selected options scoped to this menu item. Unknown ids
            // match nothing and are silently ignored.
            let options: Vec<MenuOption> = sqlx::query_as::<_, MenuOption>(
                r#"
                SELECT id, menu_id, name, price_delta
                FROM menu_options
                WHERE menu_id = ?1
                ORDER BY id
                "#,
            )
            .bind(line.menu_id)
            .fetch_all(&mut *tx)
            .await?;

            let selected: Vec<MenuOption> = pricing::resolve_options(&options, &line.option_ids)
                .into_iter()
                .cloned()
                .collect();

            let unit_price = pricing::unit_price(menu.price, &options, &line.option_ids);
            let line_total = pricing::line_total(unit_price, line.quantity);
            total_amount += line_total;

            priced.push(PricedLine {
                menu_id: line.menu_id,
                quantity: line.quantity,
                unit_price,
                line_total,
                options: selected,
            });
        }

        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO orders (total_amount, status, created_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(total_amount)
        .bind(OrderStatus::Placed)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
        let order_id = result.last_insert_rowid();

        for line in &priced {
            let result = sqlx::query(
                r#"
                INSERT INTO order_items (order_id, menu_id, quantity,
                                         unit_price, line_total)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(order_id)
            .bind(line.menu_id)
            .bind(line.quantity)
            .bind(line.unit_price)
            .bind(line.line_total)
            .execute(&mut *tx)
            .await?;
            let order_item_id = result.last_insert_rowid();

            for option in &line.options {
                sqlx::query(
                    r#"
                    INSERT INTO order_item_options (order_item_id, option_id,
                                                    price_delta)
                    VALUES (?1, ?2, ?3)
                    "#,
                )
                .bind(order_item_id)
                .bind(option.id)
                .bind(option.price_delta)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(
            order_id,
            total_amount,
            items = priced.len(),
            "Order placed"
        );

        Ok(Order {
            id: order_id,
            total_amount,
            status: OrderStatus::Placed,
            created_at,
        })
    }

    /// Moves an order to `target` if the transition table allows it.
    ///
    /// ## Failure Modes
    /// * `CoreError::OrderNotFound` - no such order
    /// * `CoreError::InvalidTransition` - target not reachable from the
    ///   current status; nothing is mutated
    ///
    /// The UPDATE is guarded on the status we read, so a transition raced by
    /// another staff client fails instead of silently overwriting.
    pub async fn transition_status(
        &self,
        order_id: i64,
        target: OrderStatus,
    ) -> OrderResult<Order> {
        let mut tx = self.pool.begin().await?;

        let order: Order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, total_amount, status, created_at
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CoreError::OrderNotFound(order_id))?;

        if !order.status.can_transition_to(target) {
            return Err(CoreError::InvalidTransition {
                order_id,
                from: order.status,
                to: target,
            }
            .into());
        }

        let updated = sqlx::query(
            r#"
            UPDATE orders
            SET status = ?2
            WHERE id = ?1 AND status = ?3
            "#,
        )
        .bind(order_id)
        .bind(target)
        .bind(order.status)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            // Someone else moved the order between our read and write
            return Err(CoreError::InvalidTransition {
                order_id,
                from: order.status,
                to: target,
            }
            .into());
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(order_id, from = %order.status, to = %target, "Order status updated");

        Ok(Order {
            status: target,
            ..order
        })
    }

    /// Gets one order with nested items, menu references, and option
    /// snapshots.
    pub async fn get_detail(&self, order_id: i64) -> DbResult<Option<OrderDetail>> {
        let order: Option<Order> = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, total_amount, status, created_at
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = self.load_items(order.id).await?;
        Ok(Some(OrderDetail { order, items }))
    }

    /// Lists orders newest-first with offset pagination.
    ///
    /// `next_cursor` is the id of the last row iff the page came back full,
    /// signalling more data may exist; a short page means end of results.
    pub async fn list(
        &self,
        status: Option<OrderStatus>,
        limit: i64,
        offset: i64,
    ) -> DbResult<OrderPage> {
        let orders: Vec<Order> = match status {
            Some(status) => {
                sqlx::query_as::<_, Order>(
                    r#"
                    SELECT id, total_amount, status, created_at
                    FROM orders
                    WHERE status = ?1
                    ORDER BY created_at DESC, id DESC
                    LIMIT ?2 OFFSET ?3
                    "#,
                )
                .bind(status)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Order>(
                    r#"
                    SELECT id, total_amount, status, created_at
                    FROM orders
                    ORDER BY created_at DESC, id DESC
                    LIMIT ?1 OFFSET ?2
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        let next_cursor = if orders.len() as i64 == limit {
            orders.last().map(|o| o.id)
        } else {
            None
        };

        let mut items = Vec::with_capacity(orders.len());
        for order in orders {
            let details = self.load_items(order.id).await?;
            items.push(OrderDetail {
                order,
                items: details,
            });
        }

        Ok(OrderPage { items, next_cursor })
    }

    /// Loads the item details of one order: the order items, their menu
    /// records, and their option snapshots. Three queries, grouped in memory.
    async fn load_items(&self, order_id: i64) -> DbResult<Vec<OrderItemDetail>> {
        let items: Vec<OrderItem> = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, menu_id, quantity, unit_price, line_total
            FROM order_items
            WHERE order_id = ?1
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        let menus: Vec<MenuItem> = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, name, description, price, image_url, stock_qty,
                   created_at, updated_at
            FROM menu_items
            WHERE id IN (SELECT menu_id FROM order_items WHERE order_id = ?1)
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;
        let menu_by_id: HashMap<i64, MenuItem> =
            menus.into_iter().map(|m| (m.id, m)).collect();

        let options: Vec<OrderItemOptionDetail> = sqlx::query_as::<_, OrderItemOptionDetail>(
            r#"
            SELECT o.id, o.order_item_id, o.option_id, o.price_delta, m.name
            FROM order_item_options o
            JOIN order_items oi ON o.order_item_id = oi.id
            JOIN menu_options m ON m.id = o.option_id
            WHERE oi.order_id = ?1
            ORDER BY o.id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;
        let mut options_by_item: HashMap<i64, Vec<OrderItemOptionDetail>> = HashMap::new();
        for option in options {
            options_by_item
                .entry(option.option.order_item_id)
                .or_default()
                .push(option);
        }

        items
            .into_iter()
            .map(|item| {
                let menu = menu_by_id.get(&item.menu_id).cloned().ok_or_else(|| {
                    // unreachable while the FK constraint holds
                    DbError::Internal(format!(
                        "order item {} references missing menu {}",
                        item.id, item.menu_id
                    ))
                })?;
                let options = options_by_item.remove(&item.id).unwrap_or_default();
                Ok(OrderItemDetail {
                    item,
                    menu,
                    options,
                })
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;
    use crate::pool::{Database, DbConfig};
    use crate::repository::menu::NewMenuItem;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// Seeds one menu item and returns (menu, extra shot option, free syrup
    /// option).
    async fn seed_menu(
        db: &Database,
        name: &str,
        price: i64,
        stock_qty: i64,
    ) -> (MenuItem, MenuOption, MenuOption) {
        let menus = db.menus();
        let item = menus
            .insert(&NewMenuItem {
                name: name.to_string(),
                description: None,
                price,
                image_url: None,
                stock_qty,
            })
            .await
            .unwrap();
        let shot = menus.add_option(item.id, "Extra shot", 500).await.unwrap();
        let syrup = menus.add_option(item.id, "Syrup", 0).await.unwrap();
        (item, shot, syrup)
    }

    fn line(menu_id: i64, quantity: i64, option_ids: Vec<i64>) -> OrderLine {
        OrderLine {
            menu_id,
            quantity,
            option_ids,
        }
    }

    #[tokio::test]
    async fn test_place_order_totals() {
        let db = test_db().await;
        let (americano, shot, _) = seed_menu(&db, "Americano (Iced)", 4000, 10).await;
        let (latte, latte_shot, _) = seed_menu(&db, "Caffe Latte", 5000, 10).await;

        let order = db
            .orders()
            .place_order(&[
                line(americano.id, 2, vec![shot.id]), // (4000+500)×2 = 9000
                line(latte.id, 1, vec![latte_shot.id]), // (5000+500)×1 = 5500
            ])
            .await
            .unwrap();

        assert_eq!(order.total_amount, 14_500);
        assert_eq!(order.status, OrderStatus::Placed);

        let detail = db.orders().get_detail(order.id).await.unwrap().unwrap();
        assert_eq!(detail.items.len(), 2);
        assert_eq!(detail.items[0].item.unit_price, 4500);
        assert_eq!(detail.items[0].item.line_total, 9000);
        assert_eq!(detail.items[1].item.unit_price, 5500);
        let sum: i64 = detail.items.iter().map(|i| i.item.line_total).sum();
        assert_eq!(detail.order.total_amount, sum);
    }

    #[tokio::test]
    async fn test_place_order_decrements_stock_and_persists_snapshots() {
        let db = test_db().await;
        let (item, shot, _) = seed_menu(&db, "Americano (Hot)", 4000, 10).await;

        let order = db
            .orders()
            .place_order(&[line(item.id, 3, vec![shot.id])])
            .await
            .unwrap();

        let reread = db.menus().get_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(reread.stock_qty, 7);

        let detail = db.orders().get_detail(order.id).await.unwrap().unwrap();
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.items[0].menu.id, item.id);
        assert_eq!(detail.items[0].options.len(), 1);
        assert_eq!(detail.items[0].options[0].option.option_id, shot.id);
        assert_eq!(detail.items[0].options[0].option.price_delta, 500);
        // The referenced option's name rides along for display
        assert_eq!(detail.items[0].options[0].name, "Extra shot");
    }

    #[tokio::test]
    async fn test_insufficient_stock_leaves_stock_unchanged() {
        let db = test_db().await;
        let (item, _, _) = seed_menu(&db, "Caffe Latte", 5000, 3).await;

        let err = db
            .orders()
            .place_order(&[line(item.id, 5, vec![])])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrderError::Domain(CoreError::InsufficientStock {
                available: 3,
                requested: 5,
                ..
            })
        ));

        let reread = db.menus().get_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(reread.stock_qty, 3);
        assert!(db.orders().get_detail(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_menu_lines_compound_and_roll_back() {
        let db = test_db().await;
        let (item, _, _) = seed_menu(&db, "Americano (Iced)", 4000, 10).await;

        // 6 + 6 > 10: the first line decrements inside the transaction, so
        // the second observes 4 left and fails; the rollback must restore
        // the first line's decrement too.
        let err = db
            .orders()
            .place_order(&[line(item.id, 6, vec![]), line(item.id, 6, vec![])])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrderError::Domain(CoreError::InsufficientStock {
                available: 4,
                requested: 6,
                ..
            })
        ));

        let reread = db.menus().get_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(reread.stock_qty, 10);
    }

    #[tokio::test]
    async fn test_duplicate_menu_lines_within_stock_succeed() {
        let db = test_db().await;
        let (item, _, _) = seed_menu(&db, "Americano (Iced)", 4000, 10).await;

        let order = db
            .orders()
            .place_order(&[line(item.id, 4, vec![]), line(item.id, 6, vec![])])
            .await
            .unwrap();

        assert_eq!(order.total_amount, 40_000);
        let reread = db.menus().get_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(reread.stock_qty, 0);
    }

    #[tokio::test]
    async fn test_unknown_menu_rolls_back_earlier_lines() {
        let db = test_db().await;
        let (item, _, _) = seed_menu(&db, "Americano (Iced)", 4000, 10).await;

        let err = db
            .orders()
            .place_order(&[line(item.id, 2, vec![]), line(9999, 1, vec![])])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrderError::Domain(CoreError::MenuNotFound(9999))
        ));

        let reread = db.menus().get_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(reread.stock_qty, 10);
    }

    #[tokio::test]
    async fn test_unknown_option_ids_do_not_fail_or_price() {
        let db = test_db().await;
        let (item, _, _) = seed_menu(&db, "Americano (Iced)", 4000, 10).await;
        let (_other, other_shot, _) = seed_menu(&db, "Caffe Latte", 5000, 10).await;

        // 9999 matches nothing; other_shot belongs to a different menu item.
        // Both are ignored: no price effect, no snapshot rows.
        let order = db
            .orders()
            .place_order(&[line(item.id, 1, vec![9999, other_shot.id])])
            .await
            .unwrap();

        assert_eq!(order.total_amount, 4000);
        let detail = db.orders().get_detail(order.id).await.unwrap().unwrap();
        assert!(detail.items[0].options.is_empty());
    }

    #[tokio::test]
    async fn test_empty_order_rejected_before_touching_storage() {
        let db = test_db().await;

        let err = db.orders().place_order(&[]).await.unwrap_err();
        assert!(matches!(
            err,
            OrderError::Domain(CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_status_transitions_follow_the_table() {
        let db = test_db().await;
        let (item, _, _) = seed_menu(&db, "Americano (Iced)", 4000, 10).await;
        let order = db
            .orders()
            .place_order(&[line(item.id, 1, vec![])])
            .await
            .unwrap();

        // Skipping a state is rejected without mutation
        let err = db
            .orders()
            .transition_status(order.id, OrderStatus::InProgress)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OrderError::Domain(CoreError::InvalidTransition { .. })
        ));
        let detail = db.orders().get_detail(order.id).await.unwrap().unwrap();
        assert_eq!(detail.order.status, OrderStatus::Placed);

        // The forward chain succeeds one step at a time
        let updated = db
            .orders()
            .transition_status(order.id, OrderStatus::Accepted)
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Accepted);
        assert_eq!(updated.total_amount, order.total_amount);

        db.orders()
            .transition_status(order.id, OrderStatus::InProgress)
            .await
            .unwrap();
        db.orders()
            .transition_status(order.id, OrderStatus::Done)
            .await
            .unwrap();

        // DONE is terminal
        for target in [
            OrderStatus::Accepted,
            OrderStatus::InProgress,
            OrderStatus::Done,
        ] {
            let err = db
                .orders()
                .transition_status(order.id, target)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                OrderError::Domain(CoreError::InvalidTransition { .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_transition_unknown_order() {
        let db = test_db().await;

        let err = db
            .orders()
            .transition_status(404, OrderStatus::Accepted)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OrderError::Domain(CoreError::OrderNotFound(404))
        ));
    }

    #[tokio::test]
    async fn test_pagination_cursor_semantics() {
        let db = test_db().await;
        let (item, _, _) = seed_menu(&db, "Americano (Iced)", 4000, 100).await;

        let mut ids = Vec::new();
        for _ in 0..3 {
            let order = db
                .orders()
                .place_order(&[line(item.id, 1, vec![])])
                .await
                .unwrap();
            ids.push(order.id);
        }

        // Newest first: page 1 holds the two latest orders and a cursor
        let page = db.orders().list(None, 2, 0).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].order.id, ids[2]);
        assert_eq!(page.items[1].order.id, ids[1]);
        assert_eq!(page.next_cursor, Some(ids[1]));

        // Page 2 (caller-accumulated offset) is short: no cursor
        let page = db.orders().list(None, 2, 2).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].order.id, ids[0]);
        assert_eq!(page.next_cursor, None);
    }

    #[tokio::test]
    async fn test_list_filters_by_status() {
        let db = test_db().await;
        let (item, _, _) = seed_menu(&db, "Americano (Iced)", 4000, 100).await;

        let first = db
            .orders()
            .place_order(&[line(item.id, 1, vec![])])
            .await
            .unwrap();
        db.orders()
            .place_order(&[line(item.id, 1, vec![])])
            .await
            .unwrap();
        db.orders()
            .transition_status(first.id, OrderStatus::Accepted)
            .await
            .unwrap();

        let placed = db
            .orders()
            .list(Some(OrderStatus::Placed), 20, 0)
            .await
            .unwrap();
        assert_eq!(placed.items.len(), 1);

        let accepted = db
            .orders()
            .list(Some(OrderStatus::Accepted), 20, 0)
            .await
            .unwrap();
        assert_eq!(accepted.items.len(), 1);
        assert_eq!(accepted.items[0].order.id, first.id);

        let done = db
            .orders()
            .list(Some(OrderStatus::Done), 20, 0)
            .await
            .unwrap();
        assert!(done.items.is_empty());
    }
}
