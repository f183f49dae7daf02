use diesel::{insert_into, prelude::*};
use tracing::info;

use crate::models::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
};
use crate::schema::{pizza, restaurant, restaurant_pizzas};
use crate::store::{Store, StoreError};

const RESTAURANTS: [(&str, &str); 3] = [
    ("Pizza Hut", "123 Main St"),
    ("Domino's", "456 Elm St"),
    ("Papa John's", "789 Oak St"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Cheese", "Cheese, Tomato Sauce, Dough"),
    ("Pepperoni", "Pepperoni, Cheese, Tomato Sauce, Dough"),
    ("Veggie", "Mushrooms, Peppers, Onions, Cheese, Dough"),
];

/// Price of the i-th pizza at the i-th restaurant.
const PRICES: [i32; 3] = [15, 20, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Wipes every table and loads the sample data in one transaction.
pub fn seed(store: &Store) -> Result<SeedSummary, StoreError> {
    let conn = &mut store.connection()?;
    conn.transaction::<_, StoreError, _>(|conn| {
        info!("Deleting data...");
        diesel::delete(restaurant_pizzas::table).execute(conn)?;
        diesel::delete(pizza::table).execute(conn)?;
        diesel::delete(restaurant::table).execute(conn)?;

        info!("Creating restaurants...");
        let restaurants = RESTAURANTS
            .into_iter()
            .map(|(name, address)| {
                insert_into(restaurant::table)
                    .values(&NewRestaurant {
                        name: name.to_string(),
                        address: address.to_string(),
                    })
                    .returning(Restaurant::as_returning())
                    .get_result::<Restaurant>(conn)
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("Creating pizzas...");
        let pizzas = PIZZAS
            .into_iter()
            .map(|(name, ingredients)| {
                insert_into(pizza::table)
                    .values(&NewPizza { name, ingredients })
                    .returning(Pizza::as_returning())
                    .get_result::<Pizza>(conn)
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("Creating restaurant-pizzas...");
        let restaurant_pizzas = restaurants
            .iter()
            .zip(&pizzas)
            .zip(PRICES)
            .map(|((r, p), price)| {
                insert_into(restaurant_pizzas::table)
                    .values(&NewRestaurantPizza {
                        price,
                        restaurant_id: r.id,
                        pizza_id: p.id,
                    })
                    .returning(RestaurantPizza::as_returning())
                    .get_result::<RestaurantPizza>(conn)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SeedSummary {
            restaurants: restaurants.len(),
            pizzas: pizzas.len(),
            restaurant_pizzas: restaurant_pizzas.len(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::setup_database;

    #[test]
    fn test_seed_loads_sample_data() {
        let (_dir, store) = setup_database();

        let summary = seed(&store).unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                restaurants: 3,
                pizzas: 3,
                restaurant_pizzas: 3,
            }
        );

        let restaurants = store.list_restaurants().unwrap();
        let names: Vec<_> = restaurants.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Pizza Hut", "Domino's", "Papa John's"]);

        let (_, offerings) = store.get_restaurant(restaurants[0].id.into()).unwrap();
        assert_eq!(offerings.len(), 1);
        assert_eq!(offerings[0].0.price, 15);
        assert_eq!(offerings[0].1.name, "Cheese");
    }

    #[test]
    fn test_seed_is_repeatable() {
        let (_dir, store) = setup_database();
        store
            .create_restaurant(Some("Sbarro".to_string()), Some("1 Mall Rd".to_string()))
            .unwrap();

        seed(&store).unwrap();
        seed(&store).unwrap();

        assert_eq!(store.list_restaurants().unwrap().len(), 3);
        assert_eq!(store.list_pizzas().unwrap().len(), 3);
        let prices: Vec<_> = store
            .list_restaurant_pizzas()
            .unwrap()
            .into_iter()
            .map(|(rp, _, _)| rp.price)
            .collect();
        assert_eq!(prices, [15, 20, 12]);
    }
}
