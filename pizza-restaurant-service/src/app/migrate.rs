use pizza_restaurant_service::store::Store;
use tracing::info;

pub fn main(store: Store) -> Result<(), Box<dyn std::error::Error>> {
    let applied = store.run_pending_migrations()?;
    info!(applied, database = store.database_url(), "migrations complete");
    Ok(())
}
