pub mod health;
pub mod menu;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /menu/restaurant                 create restaurant with menu (POST)
/// /menu/restaurant/{id}            paginated menu (GET), delete (DELETE)
/// /menu/restaurant/{id}/menu       replace menu (PUT)
/// /menu/search?dishname=           dish search across restaurants (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/menu", menu::router())
}
