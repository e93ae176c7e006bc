//! Route definitions for restaurants and their menus.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::menu;
use crate::state::AppState;

/// Menu routes mounted at `/menu`.
///
/// ```text
/// POST   /restaurant               -> add_restaurant
/// GET    /restaurant/{id}          -> get_menu
/// DELETE /restaurant/{id}          -> delete_restaurant
/// PUT    /restaurant/{id}/menu     -> update_menu
/// GET    /search                   -> search_by_dish_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurant", post(menu::add_restaurant))
        .route(
            "/restaurant/{id}",
            get(menu::get_menu).delete(menu::delete_restaurant),
        )
        .route("/restaurant/{id}/menu", put(menu::update_menu))
        .route("/search", get(menu::search_by_dish_name))
}
