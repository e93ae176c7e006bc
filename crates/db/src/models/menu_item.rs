//! Menu item entity model and DTOs.

use menu_core::item_type::ItemType;
use menu_core::types::{DbId, Timestamp};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// Column list shared across menu queries. `type` is aliased so the row
/// decoder and the struct field agree.
pub const MENU_COLUMNS: &str =
    "id, restaurant_id, dish_name, price, availability, \"type\" AS item_type, created_on, updated_on";

/// A row from the `menu` table.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: DbId,
    /// Owning restaurant. Never changes for the lifetime of the row.
    pub restaurant_id: DbId,
    pub dish_name: String,
    pub price: f64,
    pub availability: bool,
    pub item_type: ItemType,
    pub created_on: Timestamp,
    pub updated_on: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for MenuItem {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let raw_type: String = row.try_get("item_type")?;
        let item_type = raw_type
            .parse::<ItemType>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "item_type".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            restaurant_id: row.try_get("restaurant_id")?,
            dish_name: row.try_get("dish_name")?,
            price: row.try_get("price")?,
            availability: row.try_get("availability")?,
            item_type,
            created_on: row.try_get("created_on")?,
            updated_on: row.try_get("updated_on")?,
        })
    }
}

/// DTO for inserting a menu item. The owning restaurant is supplied by the
/// repository call, not by the DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMenuItem {
    pub dish_name: String,
    pub price: f64,
    pub availability: bool,
    pub item_type: ItemType,
}

/// A menu item joined with its owner's name, as returned by dish search.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemWithRestaurant {
    pub menu_item: MenuItem,
    pub restaurant_name: String,
}

impl<'r> FromRow<'r, PgRow> for MenuItemWithRestaurant {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            menu_item: MenuItem::from_row(row)?,
            restaurant_name: row.try_get("restaurant_name")?,
        })
    }
}
