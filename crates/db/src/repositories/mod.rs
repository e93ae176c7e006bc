//! Repository layer.
//!
//! Each entity kind gets its own narrow async trait. The PostgreSQL
//! implementations hold a cloned `PgPool`; [`MemoryMenuStore`] implements
//! both traits over one shared in-process state.

pub mod memory;
pub mod menu_item_repo;
pub mod restaurant_repo;

pub use memory::MemoryMenuStore;
pub use menu_item_repo::{MenuItemRepository, PgMenuItemRepo};
pub use restaurant_repo::{PgRestaurantRepo, RestaurantRepository};
