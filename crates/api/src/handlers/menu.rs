//! Handlers for the `/menu` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use menu_core::pagination::{PageRequest, DEFAULT_PAGE_SIZE};
use menu_core::types::DbId;

use crate::dto::request::{CreateRestaurantRequest, MenuItemRequest};
use crate::dto::response::{
    MenuItemResponse, PaginatedMenuItemResponse, RestaurantMenuResponse, RestaurantResponse,
};
use crate::error::AppResult;
use crate::extract::{validate_each, AppJson, AppPath, AppQuery, ValidatedJson};
use crate::query::{DishSearchParams, MenuPageParams};
use crate::state::AppState;

/// POST /api/v1/menu/restaurant
pub async fn add_restaurant(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateRestaurantRequest>,
) -> AppResult<Json<RestaurantResponse>> {
    let restaurant = state.menu_service.add_restaurant(input).await?;
    Ok(Json(restaurant))
}

/// GET /api/v1/menu/restaurant/{id}?page=0&size=10
pub async fn get_menu(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<MenuPageParams>,
) -> AppResult<Json<PaginatedMenuItemResponse>> {
    let request = PageRequest::new(
        params.page.unwrap_or(0),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;
    let menu = state.menu_service.get_menu(id, request).await?;
    Ok(Json(menu))
}

/// PUT /api/v1/menu/restaurant/{id}/menu
///
/// Replaces the whole menu with the request body.
pub async fn update_menu(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(menu_items): AppJson<Vec<MenuItemRequest>>,
) -> AppResult<Json<RestaurantMenuResponse>> {
    validate_each(&menu_items)?;
    let menu = state.menu_service.update_menu(id, menu_items).await?;
    Ok(Json(menu))
}

/// DELETE /api/v1/menu/restaurant/{id}
pub async fn delete_restaurant(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.menu_service.delete_restaurant(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/menu/search?dishname=piz
pub async fn search_by_dish_name(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DishSearchParams>,
) -> AppResult<Json<Vec<MenuItemResponse>>> {
    let items = state
        .menu_service
        .search_by_dish_name(&params.dishname)
        .await?;
    Ok(Json(items))
}
