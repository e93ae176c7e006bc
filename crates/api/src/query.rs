//! Query parameter types for the menu handlers.

use serde::Deserialize;

/// Pagination parameters (`?page=&size=`) for a restaurant's menu.
///
/// `page` is zero-based and defaults to 0; `size` defaults to 10.
#[derive(Debug, Default, Deserialize)]
pub struct MenuPageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Dish search parameters (`?dishname=`). The parameter is required; an
/// empty value matches every dish.
#[derive(Debug, Deserialize)]
pub struct DishSearchParams {
    pub dishname: String,
}
