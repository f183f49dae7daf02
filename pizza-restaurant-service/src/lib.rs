use diesel::{connection::SimpleConnection, prelude::*, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations};

pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod seed;
pub mod serializer;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

use store::StoreError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub fn establish_connection(database_url: &str) -> Result<SqliteConnection, StoreError> {
    let mut conn = SqliteConnection::establish(database_url)?;
    // SQLite leaves foreign keys off unless asked, per connection.
    conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")?;
    Ok(conn)
}
