//! In-process store implementing both repository traits.
//!
//! Mirrors the PostgreSQL schema's behaviour: identity counters starting at
//! 1, cascade delete of owned items, id-ascending pagination and
//! case-insensitive substring search. Selected with `STORAGE_BACKEND=memory`
//! and used by the test suites.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use menu_core::pagination::{Page, PageRequest};
use menu_core::search::contains_ignore_case;
use menu_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::menu_item::{CreateMenuItem, MenuItem, MenuItemWithRestaurant};
use crate::models::restaurant::{CreateRestaurant, Restaurant, RestaurantMenu};
use crate::repositories::menu_item_repo::MenuItemRepository;
use crate::repositories::restaurant_repo::RestaurantRepository;

#[derive(Debug, Default)]
struct MemoryState {
    last_restaurant_id: DbId,
    last_menu_item_id: DbId,
    restaurants: BTreeMap<DbId, Restaurant>,
    menu_items: BTreeMap<DbId, MenuItem>,
}

impl MemoryState {
    fn insert_menu_items(&mut self, restaurant_id: DbId, items: &[CreateMenuItem]) -> Vec<MenuItem> {
        let now = Utc::now();
        items
            .iter()
            .map(|input| {
                self.last_menu_item_id += 1;
                let item = MenuItem {
                    id: self.last_menu_item_id,
                    restaurant_id,
                    dish_name: input.dish_name.clone(),
                    price: input.price,
                    availability: input.availability,
                    item_type: input.item_type,
                    created_on: now,
                    updated_on: now,
                };
                self.menu_items.insert(item.id, item.clone());
                item
            })
            .collect()
    }

    fn remove_menu_of(&mut self, restaurant_id: DbId) {
        self.menu_items
            .retain(|_, item| item.restaurant_id != restaurant_id);
    }
}

/// Cheaply cloneable handle; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryMenuStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored menu items across all restaurants.
    pub async fn menu_item_count(&self) -> usize {
        self.state.read().await.menu_items.len()
    }
}

#[async_trait]
impl RestaurantRepository for MemoryMenuStore {
    async fn create(&self, input: &CreateRestaurant) -> Result<RestaurantMenu, sqlx::Error> {
        let mut state = self.state.write().await;

        state.last_restaurant_id += 1;
        let restaurant = Restaurant {
            id: state.last_restaurant_id,
            name: input.name.clone(),
            address: input.address.clone(),
            city: input.city.clone(),
            pincode: input.pincode.clone(),
        };
        state.restaurants.insert(restaurant.id, restaurant.clone());
        let menu_items = state.insert_menu_items(restaurant.id, &input.menu_items);

        Ok(RestaurantMenu {
            restaurant,
            menu_items,
        })
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Restaurant>, sqlx::Error> {
        Ok(self.state.read().await.restaurants.get(&id).cloned())
    }

    async fn replace_menu(
        &self,
        restaurant: &Restaurant,
        items: &[CreateMenuItem],
    ) -> Result<RestaurantMenu, sqlx::Error> {
        let mut state = self.state.write().await;

        let stored = state
            .restaurants
            .get(&restaurant.id)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)?;

        state.remove_menu_of(stored.id);
        let menu_items = state.insert_menu_items(stored.id, items);

        Ok(RestaurantMenu {
            restaurant: stored,
            menu_items,
        })
    }

    async fn delete(&self, restaurant: &Restaurant) -> Result<bool, sqlx::Error> {
        let mut state = self.state.write().await;
        if state.restaurants.remove(&restaurant.id).is_none() {
            return Ok(false);
        }
        state.remove_menu_of(restaurant.id);
        Ok(true)
    }
}

#[async_trait]
impl MenuItemRepository for MemoryMenuStore {
    async fn find_by_restaurant(
        &self,
        restaurant_id: DbId,
        request: PageRequest,
    ) -> Result<Page<MenuItem>, sqlx::Error> {
        let state = self.state.read().await;
        let owned: Vec<MenuItem> = state
            .menu_items
            .values()
            .filter(|item| item.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        Ok(Page::from_ordered(owned, request))
    }

    async fn find_by_dish_name_containing(
        &self,
        text: &str,
    ) -> Result<Vec<MenuItemWithRestaurant>, sqlx::Error> {
        let state = self.state.read().await;
        let matches = state
            .menu_items
            .values()
            .filter(|item| contains_ignore_case(&item.dish_name, text))
            .filter_map(|item| {
                state
                    .restaurants
                    .get(&item.restaurant_id)
                    .map(|owner| MenuItemWithRestaurant {
                        menu_item: item.clone(),
                        restaurant_name: owner.name.clone(),
                    })
            })
            .collect();
        Ok(matches)
    }
}
