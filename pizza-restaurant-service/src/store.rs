use diesel::{insert_into, prelude::*, SqliteConnection};
use diesel_migrations::MigrationHarness;
use tracing::{debug, info};

use crate::models::{
    validate_price, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
    ValidationError,
};
use crate::schema::{pizza, restaurant, restaurant_pizzas};
use crate::{establish_connection, MIGRATIONS};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Failed to connect to database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
    #[error("Failed to run migrations: {0}")]
    Migration(String),
}

/// Handle to the relational store.
///
/// Every operation opens its own connection and, when it writes, runs inside
/// a single transaction that commits before the call returns.
#[derive(Debug, Clone)]
pub struct Store {
    database_url: String,
}

impl Store {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn connection(&self) -> Result<SqliteConnection, StoreError> {
        establish_connection(&self.database_url)
    }

    pub fn run_pending_migrations(&self) -> Result<usize, StoreError> {
        let conn = &mut self.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        for version in &applied {
            info!(%version, "applied migration");
        }
        Ok(applied.len())
    }

    pub fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError> {
        let conn = &mut self.connection()?;
        let results = restaurant::table
            .select(Restaurant::as_select())
            .order(restaurant::id)
            .load(conn)?;
        Ok(results)
    }

    /// Loads a restaurant together with every pizza it offers.
    pub fn get_restaurant(
        &self,
        restaurant_id: i64,
    ) -> Result<(Restaurant, Vec<(RestaurantPizza, Pizza)>), StoreError> {
        let restaurant_id = to_key(restaurant_id).ok_or(StoreError::NotFound("Restaurant"))?;

        let conn = &mut self.connection()?;
        conn.transaction::<_, StoreError, _>(|conn| {
            let found = restaurant::table
                .find(restaurant_id)
                .select(Restaurant::as_select())
                .first::<Restaurant>(conn)
                .optional()?
                .ok_or(StoreError::NotFound("Restaurant"))?;

            let offerings = RestaurantPizza::belonging_to(&found)
                .inner_join(pizza::table)
                .select((RestaurantPizza::as_select(), Pizza::as_select()))
                .order(restaurant_pizzas::id)
                .load::<(RestaurantPizza, Pizza)>(conn)?;

            Ok((found, offerings))
        })
    }

    pub fn create_restaurant(
        &self,
        name: Option<String>,
        address: Option<String>,
    ) -> Result<Restaurant, StoreError> {
        let new_restaurant = NewRestaurant::new(name, address)?;

        let conn = &mut self.connection()?;
        let created = conn.transaction::<_, StoreError, _>(|conn| {
            let created = insert_into(restaurant::table)
                .values(&new_restaurant)
                .returning(Restaurant::as_returning())
                .get_result::<Restaurant>(conn)?;
            Ok(created)
        })?;

        debug!(id = created.id, "created restaurant");
        Ok(created)
    }

    /// Deletes a restaurant and every restaurant pizza that references it.
    pub fn delete_restaurant(&self, restaurant_id: i64) -> Result<(), StoreError> {
        let restaurant_id = to_key(restaurant_id).ok_or(StoreError::NotFound("Restaurant"))?;

        let conn = &mut self.connection()?;
        conn.transaction::<_, StoreError, _>(|conn| {
            let offerings = diesel::delete(
                restaurant_pizzas::table.filter(restaurant_pizzas::restaurant_id.eq(restaurant_id)),
            )
            .execute(conn)?;

            let deleted = diesel::delete(restaurant::table.find(restaurant_id)).execute(conn)?;
            if deleted == 0 {
                return Err(StoreError::NotFound("Restaurant"));
            }

            debug!(id = restaurant_id, offerings, "deleted restaurant");
            Ok(())
        })
    }

    pub fn list_pizzas(&self) -> Result<Vec<Pizza>, StoreError> {
        let conn = &mut self.connection()?;
        let results = pizza::table
            .select(Pizza::as_select())
            .order(pizza::id)
            .load(conn)?;
        Ok(results)
    }

    pub fn list_restaurant_pizzas(
        &self,
    ) -> Result<Vec<(RestaurantPizza, Pizza, Restaurant)>, StoreError> {
        let conn = &mut self.connection()?;
        let results = restaurant_pizzas::table
            .inner_join(pizza::table)
            .inner_join(restaurant::table)
            .select((
                RestaurantPizza::as_select(),
                Pizza::as_select(),
                Restaurant::as_select(),
            ))
            .order(restaurant_pizzas::id)
            .load::<(RestaurantPizza, Pizza, Restaurant)>(conn)?;
        Ok(results)
    }

    /// Offers a pizza at a restaurant.
    ///
    /// The price is checked before either reference is resolved, so an
    /// out-of-range price is reported even when the ids are also wrong.
    pub fn create_restaurant_pizza(
        &self,
        price: Option<i64>,
        pizza_id: Option<i64>,
        restaurant_id: Option<i64>,
    ) -> Result<(RestaurantPizza, Pizza, Restaurant), StoreError> {
        let price = validate_price(price.ok_or(ValidationError::InvalidPrice)?)?;
        let (Some(pizza_id), Some(restaurant_id)) =
            (pizza_id.and_then(to_key), restaurant_id.and_then(to_key))
        else {
            return Err(ValidationError::InvalidReference.into());
        };

        let conn = &mut self.connection()?;
        conn.transaction::<_, StoreError, _>(|conn| {
            let found_pizza = pizza::table
                .find(pizza_id)
                .select(Pizza::as_select())
                .first::<Pizza>(conn)
                .optional()?;
            let found_restaurant = restaurant::table
                .find(restaurant_id)
                .select(Restaurant::as_select())
                .first::<Restaurant>(conn)
                .optional()?;
            let (Some(found_pizza), Some(found_restaurant)) = (found_pizza, found_restaurant)
            else {
                return Err(ValidationError::InvalidReference.into());
            };

            let created = insert_into(restaurant_pizzas::table)
                .values(&NewRestaurantPizza {
                    price,
                    restaurant_id: found_restaurant.id,
                    pizza_id: found_pizza.id,
                })
                .returning(RestaurantPizza::as_returning())
                .get_result::<RestaurantPizza>(conn)?;

            debug!(id = created.id, price, "created restaurant pizza");
            Ok((created, found_pizza, found_restaurant))
        })
    }

    pub fn delete_restaurant_pizza(&self, restaurant_pizza_id: i64) -> Result<(), StoreError> {
        let restaurant_pizza_id =
            to_key(restaurant_pizza_id).ok_or(StoreError::NotFound("RestaurantPizza"))?;

        let conn = &mut self.connection()?;
        conn.transaction::<_, StoreError, _>(|conn| {
            let deleted =
                diesel::delete(restaurant_pizzas::table.find(restaurant_pizza_id)).execute(conn)?;
            if deleted == 0 {
                return Err(StoreError::NotFound("RestaurantPizza"));
            }
            Ok(())
        })
    }
}

/// Primary keys are 32-bit; anything wider cannot name a stored row.
fn to_key(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}
