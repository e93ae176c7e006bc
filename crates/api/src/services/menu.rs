//! The five menu use cases. Each call is a single storage transaction.

use std::sync::Arc;

use menu_core::error::CoreError;
use menu_core::pagination::PageRequest;
use menu_core::types::DbId;
use menu_db::models::restaurant::Restaurant;
use menu_db::repositories::{MemoryMenuStore, MenuItemRepository, RestaurantRepository};

use crate::dto::request::{CreateRestaurantRequest, MenuItemRequest};
use crate::dto::response::{
    MenuItemResponse, PaginatedMenuItemResponse, RestaurantMenuResponse, RestaurantResponse,
};
use crate::error::{AppError, AppResult};
use crate::mapper;

fn restaurant_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Restaurant",
        id,
    })
}

/// Restaurant and menu operations over a pair of repositories.
#[derive(Clone)]
pub struct MenuService {
    restaurants: Arc<dyn RestaurantRepository>,
    menu_items: Arc<dyn MenuItemRepository>,
}

impl MenuService {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        menu_items: Arc<dyn MenuItemRepository>,
    ) -> Self {
        Self {
            restaurants,
            menu_items,
        }
    }

    /// Both repositories backed by the same in-memory store.
    pub fn in_memory(store: MemoryMenuStore) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store)
    }

    /// Create a restaurant together with its initial menu.
    pub async fn add_restaurant(
        &self,
        request: CreateRestaurantRequest,
    ) -> AppResult<RestaurantResponse> {
        let input = mapper::to_create_restaurant(request);
        let saved = self
            .restaurants
            .create(&input)
            .await
            .map_err(AppError::persistence("Failed to save restaurant"))?;

        tracing::info!(
            restaurant_id = saved.restaurant.id,
            menu_items = saved.menu_items.len(),
            "Restaurant saved"
        );
        Ok(mapper::to_restaurant_response(saved.restaurant))
    }

    /// One page of a restaurant's menu, ordered by item id.
    pub async fn get_menu(
        &self,
        restaurant_id: DbId,
        request: PageRequest,
    ) -> AppResult<PaginatedMenuItemResponse> {
        let restaurant = self.find_restaurant(restaurant_id).await?;
        let page = self
            .menu_items
            .find_by_restaurant(restaurant.id, request)
            .await
            .map_err(AppError::persistence("Failed to load menu"))?;

        Ok(mapper::to_paginated_response(restaurant, page))
    }

    /// Replace the whole menu. An empty list clears it.
    pub async fn update_menu(
        &self,
        restaurant_id: DbId,
        menu_items: Vec<MenuItemRequest>,
    ) -> AppResult<RestaurantMenuResponse> {
        let restaurant = self.find_restaurant(restaurant_id).await?;
        let items = mapper::to_create_menu_items(menu_items);

        let saved = match self.restaurants.replace_menu(&restaurant, &items).await {
            Ok(saved) => saved,
            // Deleted between the lookup and the write.
            Err(sqlx::Error::RowNotFound) => return Err(restaurant_not_found(restaurant_id)),
            Err(err) => return Err(AppError::persistence("Failed to update menu")(err)),
        };

        tracing::info!(
            restaurant_id,
            menu_items = saved.menu_items.len(),
            "Menu replaced"
        );
        Ok(mapper::to_restaurant_menu_response(saved))
    }

    /// Delete a restaurant and every item on its menu.
    pub async fn delete_restaurant(&self, restaurant_id: DbId) -> AppResult<()> {
        let restaurant = self.find_restaurant(restaurant_id).await?;
        let deleted = self
            .restaurants
            .delete(&restaurant)
            .await
            .map_err(AppError::persistence("Failed to delete restaurant"))?;

        if !deleted {
            return Err(restaurant_not_found(restaurant_id));
        }
        tracing::info!(restaurant_id, "Restaurant deleted");
        Ok(())
    }

    /// Case-insensitive substring search over dish names of every restaurant.
    pub async fn search_by_dish_name(&self, dish_name: &str) -> AppResult<Vec<MenuItemResponse>> {
        let hits = self
            .menu_items
            .find_by_dish_name_containing(dish_name)
            .await
            .map_err(AppError::persistence("Failed to search menu items"))?;

        tracing::debug!(query = dish_name, matches = hits.len(), "Dish search");
        Ok(hits.into_iter().map(mapper::to_menu_item_response).collect())
    }

    async fn find_restaurant(&self, restaurant_id: DbId) -> AppResult<Restaurant> {
        self.restaurants
            .find_by_id(restaurant_id)
            .await
            .map_err(AppError::persistence("Failed to load restaurant"))?
            .ok_or_else(|| restaurant_not_found(restaurant_id))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use menu_core::item_type::ItemType;
    use menu_db::models::menu_item::CreateMenuItem;
    use menu_db::models::restaurant::{CreateRestaurant, RestaurantMenu};

    use super::*;

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn service() -> MenuService {
        MenuService::in_memory(MemoryMenuStore::new())
    }

    fn pizza() -> MenuItemRequest {
        item("Pizza", 10.99)
    }

    fn item(dish_name: &str, price: f64) -> MenuItemRequest {
        MenuItemRequest {
            dish_name: dish_name.to_string(),
            price,
            availability: true,
            item_type: ItemType::Veg,
        }
    }

    fn create_request(menu_items: Option<Vec<MenuItemRequest>>) -> CreateRestaurantRequest {
        CreateRestaurantRequest {
            name: "Test Restaurant".to_string(),
            address: "123 Test St".to_string(),
            city: Some("Test City".to_string()),
            pincode: "123456".to_string(),
            menu_items,
        }
    }

    fn first_page() -> PageRequest {
        PageRequest::new(0, 10).unwrap()
    }

    /// Repository whose every call fails like a dropped connection.
    struct BrokenStore;

    #[async_trait]
    impl RestaurantRepository for BrokenStore {
        async fn create(&self, _: &CreateRestaurant) -> Result<RestaurantMenu, sqlx::Error> {
            Err(sqlx::Error::PoolTimedOut)
        }
        async fn find_by_id(&self, _: DbId) -> Result<Option<Restaurant>, sqlx::Error> {
            Err(sqlx::Error::PoolTimedOut)
        }
        async fn replace_menu(
            &self,
            _: &Restaurant,
            _: &[CreateMenuItem],
        ) -> Result<RestaurantMenu, sqlx::Error> {
            Err(sqlx::Error::PoolTimedOut)
        }
        async fn delete(&self, _: &Restaurant) -> Result<bool, sqlx::Error> {
            Err(sqlx::Error::PoolTimedOut)
        }
    }

    // -----------------------------------------------------------------------
    // add_restaurant
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn add_restaurant_echoes_input_with_assigned_id() {
        let response = service()
            .add_restaurant(create_request(Some(vec![pizza()])))
            .await
            .unwrap();

        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Test Restaurant");
        assert_eq!(response.address, "123 Test St");
        assert_eq!(response.city.as_deref(), Some("Test City"));
        assert_eq!(response.pincode, "123456");
    }

    #[tokio::test]
    async fn add_restaurant_without_menu_yields_empty_menu() {
        let svc = service();
        for menu in [None, Some(vec![])] {
            let created = svc.add_restaurant(create_request(menu)).await.unwrap();
            let page = svc.get_menu(created.id, first_page()).await.unwrap();
            assert!(page.menu_items.is_empty());
            assert_eq!(page.total_elements, 0);
            assert_eq!(page.total_pages, 0);
        }
    }

    #[tokio::test]
    async fn add_restaurant_storage_failure_is_persistence_error() {
        let broken = Arc::new(BrokenStore);
        let svc = MenuService::new(broken, Arc::new(MemoryMenuStore::new()));

        let result = svc.add_restaurant(create_request(None)).await;
        assert_matches!(
            result,
            Err(AppError::Persistence {
                context: "Failed to save restaurant",
                ..
            })
        );
    }

    // -----------------------------------------------------------------------
    // get_menu
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn get_menu_returns_first_page() {
        let svc = service();
        let created = svc
            .add_restaurant(create_request(Some(vec![pizza()])))
            .await
            .unwrap();

        let page = svc.get_menu(created.id, first_page()).await.unwrap();
        assert_eq!(page.restaurant_id, created.id);
        assert_eq!(page.restaurant_name, "Test Restaurant");
        assert_eq!(page.menu_items.len(), 1);
        assert_eq!(page.menu_items[0].dish_name, "Pizza");
        assert_eq!(page.current_page, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_elements, 1);
    }

    #[tokio::test]
    async fn get_menu_window_sizes_follow_page_arithmetic() {
        let svc = service();
        let items: Vec<_> = (1..=7).map(|n| item(&format!("Dish {n}"), n as f64)).collect();
        let created = svc.add_restaurant(create_request(Some(items))).await.unwrap();

        let size = 3;
        for p in 0..4u32 {
            let page = svc
                .get_menu(created.id, PageRequest::new(p, size).unwrap())
                .await
                .unwrap();
            let expected = (7i64 - i64::from(p * size)).clamp(0, i64::from(size));
            assert_eq!(page.menu_items.len() as i64, expected);
            assert_eq!(page.total_pages, 3);
            assert_eq!(page.total_elements, 7);
            assert!(page.menu_items.windows(2).all(|w| w[0].id < w[1].id));
        }
    }

    #[tokio::test]
    async fn get_menu_unknown_restaurant_is_not_found() {
        let result = service().get_menu(99, first_page()).await;
        assert_matches!(
            result,
            Err(AppError::Core(CoreError::NotFound {
                entity: "Restaurant",
                id: 99
            }))
        );
    }

    // -----------------------------------------------------------------------
    // update_menu
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn update_menu_replaces_all_items() {
        let svc = service();
        let created = svc
            .add_restaurant(create_request(Some(vec![pizza(), item("Pasta", 8.0)])))
            .await
            .unwrap();

        let updated = svc
            .update_menu(created.id, vec![item("Biryani", 12.5)])
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Test Restaurant");
        assert_eq!(updated.menu_items.len(), 1);
        assert_eq!(updated.menu_items[0].dish_name, "Biryani");

        let page = svc.get_menu(created.id, first_page()).await.unwrap();
        let names: Vec<_> = page.menu_items.iter().map(|i| i.dish_name.as_str()).collect();
        assert_eq!(names, vec!["Biryani"]);
        assert!(svc.search_by_dish_name("pizza").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_menu_with_empty_list_clears_menu() {
        let svc = service();
        let created = svc
            .add_restaurant(create_request(Some(vec![pizza()])))
            .await
            .unwrap();

        let updated = svc.update_menu(created.id, vec![]).await.unwrap();
        assert!(updated.menu_items.is_empty());

        let page = svc.get_menu(created.id, first_page()).await.unwrap();
        assert_eq!(page.total_elements, 0);
    }

    #[tokio::test]
    async fn update_menu_unknown_restaurant_is_not_found() {
        let result = service().update_menu(5, vec![pizza()]).await;
        assert_matches!(result, Err(AppError::Core(CoreError::NotFound { id: 5, .. })));
    }

    // -----------------------------------------------------------------------
    // delete_restaurant
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn delete_restaurant_makes_later_calls_not_found() {
        let svc = service();
        let created = svc
            .add_restaurant(create_request(Some(vec![pizza()])))
            .await
            .unwrap();

        svc.delete_restaurant(created.id).await.unwrap();

        assert_matches!(
            svc.get_menu(created.id, first_page()).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
        assert_matches!(
            svc.update_menu(created.id, vec![]).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
        assert_matches!(
            svc.delete_restaurant(created.id).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
        assert!(svc.search_by_dish_name("Pizza").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_restaurant_storage_failure_is_persistence_error() {
        let svc = MenuService::new(Arc::new(BrokenStore), Arc::new(MemoryMenuStore::new()));
        assert_matches!(
            svc.delete_restaurant(1).await,
            Err(AppError::Persistence {
                context: "Failed to load restaurant",
                ..
            })
        );
    }

    // -----------------------------------------------------------------------
    // search_by_dish_name
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn search_matches_substring_ignoring_case() {
        let svc = service();
        let created = svc
            .add_restaurant(create_request(Some(vec![pizza(), item("Burger", 5.0)])))
            .await
            .unwrap();

        let hits = svc.search_by_dish_name("piz").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].dish_name, "Pizza");
        assert_eq!(hits[0].restaurant_id, created.id);
        assert_eq!(hits[0].restaurant_name, "Test Restaurant");

        assert!(svc.search_by_dish_name("sushi").await.unwrap().is_empty());
        assert_eq!(svc.search_by_dish_name("").await.unwrap().len(), 2);
    }
}
