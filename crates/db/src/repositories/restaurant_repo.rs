//! Repository for the `restaurant` table.

use async_trait::async_trait;
use menu_core::types::DbId;
use sqlx::PgPool;

use crate::models::menu_item::CreateMenuItem;
use crate::models::restaurant::{CreateRestaurant, Restaurant, RestaurantMenu};
use crate::repositories::menu_item_repo::insert_menu_items;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, city, pincode";

/// Restaurant persistence. Writes always cover the owned menu as a whole.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Insert a restaurant and its initial menu in one transaction.
    async fn create(&self, input: &CreateRestaurant) -> Result<RestaurantMenu, sqlx::Error>;

    /// Find a restaurant by id. The menu is not loaded.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Restaurant>, sqlx::Error>;

    /// Discard every menu item owned by `restaurant` and store `items` in
    /// their place, in one transaction.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] if the restaurant no longer
    /// exists.
    async fn replace_menu(
        &self,
        restaurant: &Restaurant,
        items: &[CreateMenuItem],
    ) -> Result<RestaurantMenu, sqlx::Error>;

    /// Physically delete a restaurant and, by cascade, its menu.
    /// Returns `true` if a row was removed.
    async fn delete(&self, restaurant: &Restaurant) -> Result<bool, sqlx::Error>;
}

/// PostgreSQL-backed [`RestaurantRepository`].
#[derive(Debug, Clone)]
pub struct PgRestaurantRepo {
    pool: PgPool,
}

impl PgRestaurantRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepo {
    async fn create(&self, input: &CreateRestaurant) -> Result<RestaurantMenu, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO restaurant (name, address, city, pincode)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let restaurant = sqlx::query_as::<_, Restaurant>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.pincode)
            .fetch_one(&mut *tx)
            .await?;

        let menu_items = insert_menu_items(&mut *tx, restaurant.id, &input.menu_items).await?;
        tx.commit().await?;

        Ok(RestaurantMenu {
            restaurant,
            menu_items,
        })
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurant WHERE id = $1");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn replace_menu(
        &self,
        restaurant: &Restaurant,
        items: &[CreateMenuItem],
    ) -> Result<RestaurantMenu, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        // Row lock serializes concurrent replacements of the same menu.
        let query = format!("SELECT {COLUMNS} FROM restaurant WHERE id = $1 FOR UPDATE");
        let locked = sqlx::query_as::<_, Restaurant>(&query)
            .bind(restaurant.id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        let removed = sqlx::query("DELETE FROM menu WHERE restaurant_id = $1")
            .bind(locked.id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let menu_items = insert_menu_items(&mut *tx, locked.id, items).await?;
        tx.commit().await?;

        tracing::debug!(
            restaurant_id = locked.id,
            removed,
            inserted = menu_items.len(),
            "Menu replaced"
        );

        Ok(RestaurantMenu {
            restaurant: locked,
            menu_items,
        })
    }

    async fn delete(&self, restaurant: &Restaurant) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM restaurant WHERE id = $1")
            .bind(restaurant.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
