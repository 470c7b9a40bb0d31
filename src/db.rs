pub mod models;
pub mod schema;

use diesel::{Connection, PgConnection};
use diesel_async::{
    pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager},
    AsyncPgConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/migrations");

#[derive(Error, Debug)]
pub enum DBError {
    #[error("failed to connect to database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("failed to run migrations: {0}")]
    Migration(#[from] Box<dyn std::error::Error + Send + Sync>),
    #[error("failed to create database connection pool: {0}")]
    PoolCreation(#[from] diesel_async::pooled_connection::deadpool::BuildError),
    #[error("failed to execute query: {0}")]
    Diesel(#[from] diesel::result::Error),
}

/// Runs any pending embedded migrations over a synchronous connection.
/// Migrations run once at startup, before the async pool is created.
pub fn run_migrations(database_url_base: &str, database_name: &str) -> Result<(), DBError> {
    let mut connection = PgConnection::establish(&database_url(database_url_base, database_name))?;
    let applied = connection.run_pending_migrations(MIGRATIONS)?;

    for version in &applied {
        log::info!(target: "db", version:display; "Applied migration.");
    }

    Ok(())
}

/// Creates the async connection pool. Connections are established lazily, so
/// this does not touch the database by itself.
pub fn create_database_connection_pool(
    database_url_base: &str,
    database_name: &str,
) -> Result<Pool<AsyncPgConnection>, DBError> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url(
        database_url_base,
        database_name,
    ));
    let pool = Pool::builder(manager).build()?;
    Ok(pool)
}

fn database_url(database_url_base: &str, database_name: &str) -> String {
    format!(
        "{}/{}",
        database_url_base.trim_end_matches('/'),
        database_name
    )
}
