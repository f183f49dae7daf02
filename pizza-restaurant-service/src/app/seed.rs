use pizza_restaurant_service::seed::seed;
use pizza_restaurant_service::store::Store;
use tracing::info;

pub fn main(store: Store) -> Result<(), Box<dyn std::error::Error>> {
    store.run_pending_migrations()?;

    let summary = seed(&store)?;
    info!(
        restaurants = summary.restaurants,
        pizzas = summary.pizzas,
        restaurant_pizzas = summary.restaurant_pizzas,
        "Seeding done!"
    );

    Ok(())
}
