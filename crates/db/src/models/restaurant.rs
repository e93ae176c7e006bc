//! Restaurant entity model and DTOs.

use menu_core::types::DbId;
use sqlx::FromRow;

use crate::models::menu_item::{CreateMenuItem, MenuItem};

/// A row from the `restaurant` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Restaurant {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub pincode: String,
}

/// DTO for inserting a restaurant together with its initial menu.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRestaurant {
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub pincode: String,
    pub menu_items: Vec<CreateMenuItem>,
}

/// A restaurant with its complete menu, ordered by item id.
///
/// Returned by writes, which always know the full owned collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub menu_items: Vec<MenuItem>,
}
