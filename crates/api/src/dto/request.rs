use menu_core::item_type::ItemType;
use serde::Deserialize;
use validator::Validate;

/// Body of `POST /restaurant`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Restaurant name is required and must not exceed 100 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Restaurant address is required and must not exceed 255 characters"
    ))]
    pub address: String,

    #[validate(length(max = 50, message = "City must not exceed 50 characters"))]
    pub city: Option<String>,

    #[validate(length(equal = 6, message = "Pincode must be exactly 6 characters"))]
    pub pincode: String,

    /// Absent and `null` both mean an empty initial menu.
    #[serde(default)]
    #[validate(nested)]
    pub menu_items: Option<Vec<MenuItemRequest>>,
}

/// One dish, as sent on creation and on menu replacement.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRequest {
    #[validate(length(min = 1, message = "Dish name is required"))]
    pub dish_name: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    pub price: f64,

    pub availability: bool,

    #[serde(rename = "type")]
    pub item_type: ItemType,
}
