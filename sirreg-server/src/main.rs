use color_eyre::eyre::Result;
use sirreg::{
    HashMapUserStore, PostgresUserStore, SirRegService, SirRegSettings, configure_postgresql,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = SirRegSettings::load()?;

    let service = match &settings.postgres {
        Some(postgres) => {
            let pg_pool = configure_postgresql(postgres).await?;
            SirRegService::new(
                PostgresUserStore::new(pg_pool),
                settings.session.clone(),
                settings.server.assets_dir.clone(),
            )
        }
        None => {
            tracing::warn!("No postgres settings found, users are kept in memory");
            SirRegService::new(
                HashMapUserStore::new(),
                settings.session.clone(),
                settings.server.assets_dir.clone(),
            )
        }
    };

    let listener = tokio::net::TcpListener::bind(&settings.server.address).await?;
    tracing::info!("Starting SirReg...");

    service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
