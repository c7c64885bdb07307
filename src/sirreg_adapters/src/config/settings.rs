use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{defaults, env, files};
use crate::authentication::SessionConfig;

/// Application settings.
///
/// Sources, later ones winning: `config/default`, `config/local` (both
/// optional, any format the `config` crate understands), then `SIRREG__*`
/// environment variables such as `SIRREG__SESSION__JWT_SECRET`. A `.env` file
/// is loaded into the environment first.
#[derive(Debug, Clone, Deserialize)]
pub struct SirRegSettings {
    #[serde(default)]
    pub server: ServerSettings,
    /// Absent means the in-memory user store is used.
    pub postgres: Option<PostgresSettings>,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
            assets_dir: default_assets_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_address() -> String {
    defaults::APP_ADDRESS.to_string()
}

fn default_assets_dir() -> String {
    defaults::ASSETS_DIR.to_string()
}

fn default_max_connections() -> u32 {
    defaults::POSTGRES_MAX_CONNECTIONS
}

impl SirRegSettings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let builder = Config::builder()
            .add_source(File::with_name(files::DEFAULT_CONFIG_FILE).required(false))
            .add_source(File::with_name(files::LOCAL_CONFIG_FILE).required(false));

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .add_source(
                Environment::with_prefix(env::CONFIG_ENV_PREFIX)
                    .separator(env::CONFIG_ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
