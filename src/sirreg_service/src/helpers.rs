use secrecy::ExposeSecret;
use sirreg_adapters::{config::PostgresSettings, persistence::postgres_user_store::run_migrations};
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connect to PostgreSQL and bring the schema up to date.
///
/// # Arguments
/// * `settings` - Connection URL and pool size
///
/// # Returns
/// A PgPool ready for use by `PostgresUserStore`
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(settings).await?;

    run_migrations(&pg_pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(settings.url.expose_secret())
        .await
}
