use serde::Serialize;
use utoipa::ToSchema;

use crate::models;

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaResponse {
    pub id: i32,
    pub name: String,
    /// Free-text description of the toppings
    pub ingredients: String,
}

/// A pizza on a restaurant's menu, as listed under the restaurant.
#[derive(Debug, Serialize, ToSchema)]
pub struct MenuEntryResponse {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetailResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<MenuEntryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaResponse {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaResponse,
    pub restaurant: RestaurantResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorsResponse {
    /// Error messages
    pub errors: Vec<String>,
}

pub fn serialize_restaurant(restaurant: &models::Restaurant) -> RestaurantResponse {
    RestaurantResponse {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
    }
}

pub fn serialize_pizza(pizza: &models::Pizza) -> PizzaResponse {
    PizzaResponse {
        id: pizza.id,
        name: pizza.name.clone(),
        ingredients: pizza.ingredients.clone(),
    }
}

pub fn serialize_restaurant_details(
    restaurant: &models::Restaurant,
    offerings: &[(models::RestaurantPizza, models::Pizza)],
) -> RestaurantDetailResponse {
    RestaurantDetailResponse {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
        restaurant_pizzas: offerings
            .iter()
            .map(|(rp, pizza)| MenuEntryResponse {
                id: rp.id,
                price: rp.price,
                restaurant_id: rp.restaurant_id,
                pizza_id: rp.pizza_id,
                pizza: serialize_pizza(pizza),
            })
            .collect(),
    }
}

pub fn serialize_restaurant_pizza(
    restaurant_pizza: &models::RestaurantPizza,
    pizza: &models::Pizza,
    restaurant: &models::Restaurant,
) -> RestaurantPizzaResponse {
    RestaurantPizzaResponse {
        id: restaurant_pizza.id,
        price: restaurant_pizza.price,
        pizza_id: restaurant_pizza.pizza_id,
        restaurant_id: restaurant_pizza.restaurant_id,
        pizza: serialize_pizza(pizza),
        restaurant: serialize_restaurant(restaurant),
    }
}
