use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::MenuService;

/// State shared by every handler through `State<AppState>`. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// `None` when running on the in-memory store.
    pub pool: Option<menu_db::DbPool>,
    pub config: Arc<ServerConfig>,
    pub menu_service: Arc<MenuService>,
}

impl AppState {
    /// Probe the storage backend. The in-memory store is always reachable.
    pub async fn storage_healthy(&self) -> bool {
        match &self.pool {
            Some(pool) => menu_db::health_check(pool).await.is_ok(),
            None => true,
        }
    }
}
