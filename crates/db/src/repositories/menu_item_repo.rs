//! Repository for the `menu` table.

use async_trait::async_trait;
use menu_core::pagination::{Page, PageRequest};
use menu_core::search::contains_pattern;
use menu_core::types::DbId;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::models::menu_item::{CreateMenuItem, MenuItem, MenuItemWithRestaurant, MENU_COLUMNS};

/// Read-side queries over menu items. Items are only ever written through
/// their owning restaurant.
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// One page of a restaurant's menu, ordered by item id ascending.
    async fn find_by_restaurant(
        &self,
        restaurant_id: DbId,
        request: PageRequest,
    ) -> Result<Page<MenuItem>, sqlx::Error>;

    /// Every item across all restaurants whose dish name contains `text`,
    /// ignoring case. Ordered by item id.
    async fn find_by_dish_name_containing(
        &self,
        text: &str,
    ) -> Result<Vec<MenuItemWithRestaurant>, sqlx::Error>;
}

/// PostgreSQL-backed [`MenuItemRepository`].
#[derive(Debug, Clone)]
pub struct PgMenuItemRepo {
    pool: PgPool,
}

impl PgMenuItemRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepo {
    async fn find_by_restaurant(
        &self,
        restaurant_id: DbId,
        request: PageRequest,
    ) -> Result<Page<MenuItem>, sqlx::Error> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu WHERE restaurant_id = $1")
            .bind(restaurant_id)
            .fetch_one(&self.pool)
            .await?;

        let query = format!(
            "SELECT {MENU_COLUMNS} FROM menu
             WHERE restaurant_id = $1
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        let content = sqlx::query_as::<_, MenuItem>(&query)
            .bind(restaurant_id)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(content, request, total))
    }

    async fn find_by_dish_name_containing(
        &self,
        text: &str,
    ) -> Result<Vec<MenuItemWithRestaurant>, sqlx::Error> {
        // Backslash is the default LIKE escape, matching `contains_pattern`.
        sqlx::query_as::<_, MenuItemWithRestaurant>(
            "SELECT m.id, m.restaurant_id, m.dish_name, m.price, m.availability,
                    m.\"type\" AS item_type, m.created_on, m.updated_on,
                    r.name AS restaurant_name
             FROM menu m
             JOIN restaurant r ON r.id = m.restaurant_id
             WHERE m.dish_name ILIKE $1
             ORDER BY m.id ASC",
        )
        .bind(contains_pattern(text))
        .fetch_all(&self.pool)
        .await
    }
}

/// Bulk-insert `items` for `restaurant_id` on an open connection, returning
/// the stored rows ordered by id.
pub(crate) async fn insert_menu_items(
    conn: &mut PgConnection,
    restaurant_id: DbId,
    items: &[CreateMenuItem],
) -> Result<Vec<MenuItem>, sqlx::Error> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Postgres>::new(
        "INSERT INTO menu (restaurant_id, dish_name, price, availability, \"type\") ",
    );
    builder.push_values(items, |mut row, item| {
        row.push_bind(restaurant_id)
            .push_bind(item.dish_name.as_str())
            .push_bind(item.price)
            .push_bind(item.availability)
            .push_bind(item.item_type.as_str());
    });
    builder.push(" RETURNING ");
    builder.push(MENU_COLUMNS);

    let mut inserted = builder
        .build_query_as::<MenuItem>()
        .fetch_all(&mut *conn)
        .await?;
    inserted.sort_by_key(|item| item.id);
    Ok(inserted)
}
