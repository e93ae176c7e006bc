use menu_core::item_type::ItemType;
use menu_core::types::DbId;
use serde::Serialize;

/// A restaurant without its menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub pincode: String,
}

/// A dish nested under its restaurant; carries no owner fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemBasicResponse {
    pub id: DbId,
    pub dish_name: String,
    pub price: f64,
    pub availability: bool,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// A dish returned from search, identifying the restaurant that serves it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: DbId,
    pub dish_name: String,
    pub price: f64,
    pub availability: bool,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub restaurant_id: DbId,
    pub restaurant_name: String,
}

/// One page of a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedMenuItemResponse {
    pub restaurant_id: DbId,
    pub restaurant_name: String,
    pub menu_items: Vec<MenuItemBasicResponse>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_elements: i64,
}

/// A restaurant with its complete, unpaginated menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantMenuResponse {
    pub id: DbId,
    pub name: String,
    pub menu_items: Vec<MenuItemBasicResponse>,
}
