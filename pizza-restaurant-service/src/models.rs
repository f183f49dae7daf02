use diesel::prelude::*;

use crate::schema::{pizza, restaurant, restaurant_pizzas};

pub const MIN_PRICE: i32 = 1;
pub const MAX_PRICE: i32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Validation error: Name and Address are required")]
    MissingNameOrAddress,
    #[error("validation errors")]
    InvalidPrice,
    #[error("Invalid pizza or restaurant")]
    InvalidReference,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = restaurant)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = restaurant)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

impl NewRestaurant {
    /// Missing and empty values are rejected alike.
    pub fn new(name: Option<String>, address: Option<String>) -> Result<Self, ValidationError> {
        match (name, address) {
            (Some(name), Some(address)) if !name.is_empty() && !address.is_empty() => {
                Ok(Self { name, address })
            }
            _ => Err(ValidationError::MissingNameOrAddress),
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = pizza)]
pub struct Pizza {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = pizza)]
pub struct NewPizza<'a> {
    pub name: &'a str,
    pub ingredients: &'a str,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(Restaurant))]
#[diesel(belongs_to(Pizza))]
#[diesel(table_name = restaurant_pizzas)]
pub struct RestaurantPizza {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = restaurant_pizzas)]
pub struct NewRestaurantPizza {
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

/// Accepts prices in `MIN_PRICE..=MAX_PRICE`.
pub fn validate_price(price: i64) -> Result<i32, ValidationError> {
    i32::try_from(price)
        .ok()
        .filter(|price| (MIN_PRICE..=MAX_PRICE).contains(price))
        .ok_or(ValidationError::InvalidPrice)
}
