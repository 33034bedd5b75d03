use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;
use domain_products::StockPolicy;

pub use core_config::Environment;

/// Product-specific settings
#[derive(Clone, Copy, Debug)]
pub struct ProductsConfig {
    /// `STOCK_POLICY`: `reject` (default) or `allow-negative`
    pub stock_policy: StockPolicy,
}

impl FromEnv for ProductsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            stock_policy: env_parse("STOCK_POLICY", "reject")?,
        })
    }
}

/// Application configuration, composed from the shared config pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub products: ProductsConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL is required
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080
        let products = ProductsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            products,
        })
    }
}
