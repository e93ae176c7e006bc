//! Pure translations between wire DTOs and persisted entities.

use menu_core::pagination::Page;
use menu_db::models::menu_item::{CreateMenuItem, MenuItem, MenuItemWithRestaurant};
use menu_db::models::restaurant::{CreateRestaurant, Restaurant, RestaurantMenu};

use crate::dto::request::{CreateRestaurantRequest, MenuItemRequest};
use crate::dto::response::{
    MenuItemBasicResponse, MenuItemResponse, PaginatedMenuItemResponse, RestaurantMenuResponse,
    RestaurantResponse,
};

pub fn to_create_restaurant(request: CreateRestaurantRequest) -> CreateRestaurant {
    CreateRestaurant {
        name: request.name,
        address: request.address,
        city: request.city,
        pincode: request.pincode,
        menu_items: to_create_menu_items(request.menu_items.unwrap_or_default()),
    }
}

/// Used both for the initial menu and for wholesale replacement.
pub fn to_create_menu_items(requests: Vec<MenuItemRequest>) -> Vec<CreateMenuItem> {
    requests
        .into_iter()
        .map(|request| CreateMenuItem {
            dish_name: request.dish_name,
            price: request.price,
            availability: request.availability,
            item_type: request.item_type,
        })
        .collect()
}

pub fn to_restaurant_response(restaurant: Restaurant) -> RestaurantResponse {
    RestaurantResponse {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
        city: restaurant.city,
        pincode: restaurant.pincode,
    }
}

pub fn to_paginated_response(
    restaurant: Restaurant,
    page: Page<MenuItem>,
) -> PaginatedMenuItemResponse {
    let current_page = page.number();
    let total_pages = page.total_pages();
    let total_elements = page.total_elements;

    PaginatedMenuItemResponse {
        restaurant_id: restaurant.id,
        restaurant_name: restaurant.name,
        menu_items: page
            .content
            .into_iter()
            .map(to_menu_item_basic_response)
            .collect(),
        current_page,
        total_pages,
        total_elements,
    }
}

pub fn to_restaurant_menu_response(menu: RestaurantMenu) -> RestaurantMenuResponse {
    RestaurantMenuResponse {
        id: menu.restaurant.id,
        name: menu.restaurant.name,
        menu_items: menu
            .menu_items
            .into_iter()
            .map(to_menu_item_basic_response)
            .collect(),
    }
}

pub fn to_menu_item_basic_response(item: MenuItem) -> MenuItemBasicResponse {
    MenuItemBasicResponse {
        id: item.id,
        dish_name: item.dish_name,
        price: item.price,
        availability: item.availability,
        item_type: item.item_type,
    }
}

pub fn to_menu_item_response(hit: MenuItemWithRestaurant) -> MenuItemResponse {
    let item = hit.menu_item;
    MenuItemResponse {
        id: item.id,
        dish_name: item.dish_name,
        price: item.price,
        availability: item.availability,
        item_type: item.item_type,
        restaurant_id: item.restaurant_id,
        restaurant_name: hit.restaurant_name,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use menu_core::item_type::ItemType;
    use menu_core::pagination::PageRequest;

    use super::*;

    fn restaurant() -> Restaurant {
        Restaurant {
            id: 1,
            name: "Test Restaurant".to_string(),
            address: "123 Test St".to_string(),
            city: Some("Test City".to_string()),
            pincode: "123456".to_string(),
        }
    }

    fn menu_item(id: i64, dish_name: &str) -> MenuItem {
        let now = Utc::now();
        MenuItem {
            id,
            restaurant_id: 1,
            dish_name: dish_name.to_string(),
            price: 10.99,
            availability: true,
            item_type: ItemType::Veg,
            created_on: now,
            updated_on: now,
        }
    }

    #[test]
    fn absent_menu_becomes_empty_list() {
        let request = CreateRestaurantRequest {
            name: "Test Restaurant".to_string(),
            address: "123 Test St".to_string(),
            city: None,
            pincode: "123456".to_string(),
            menu_items: None,
        };
        let create = to_create_restaurant(request);
        assert!(create.menu_items.is_empty());
        assert_eq!(create.city, None);
    }

    #[test]
    fn restaurant_response_echoes_fields() {
        let response = to_restaurant_response(restaurant());
        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Test Restaurant");
        assert_eq!(response.address, "123 Test St");
        assert_eq!(response.city.as_deref(), Some("Test City"));
        assert_eq!(response.pincode, "123456");
    }

    #[test]
    fn paginated_response_carries_page_metadata() {
        let request = PageRequest::new(1, 2).unwrap();
        let page = Page::new(vec![menu_item(3, "Pizza")], request, 3);

        let response = to_paginated_response(restaurant(), page);
        assert_eq!(response.restaurant_id, 1);
        assert_eq!(response.restaurant_name, "Test Restaurant");
        assert_eq!(response.current_page, 1);
        assert_eq!(response.total_pages, 2);
        assert_eq!(response.total_elements, 3);
        assert_eq!(response.menu_items[0].dish_name, "Pizza");
    }

    #[test]
    fn search_hit_includes_owner() {
        let response = to_menu_item_response(MenuItemWithRestaurant {
            menu_item: menu_item(7, "Pizza"),
            restaurant_name: "Test Restaurant".to_string(),
        });
        assert_eq!(response.id, 7);
        assert_eq!(response.restaurant_id, 1);
        assert_eq!(response.restaurant_name, "Test Restaurant");
    }

    #[test]
    fn nested_items_omit_back_reference() {
        let json = serde_json::to_value(to_menu_item_basic_response(menu_item(1, "Pizza"))).unwrap();
        assert_eq!(json["dishName"], "Pizza");
        assert_eq!(json["type"], "VEG");
        assert!(json.get("restaurantId").is_none());
    }
}
