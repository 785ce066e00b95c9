use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

pub const DEFAULT_SERVICE_NAME: &str = "job-feed";

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub base_url: String,
    pub service_name: String,
    pub listen_port: String,
    pub database_url: String,
    pub database_pool_max_connections: u32,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("base_url", "http://localhost:8000")?
            .set_default("service_name", DEFAULT_SERVICE_NAME)?
            .set_default("listen_port", "8000")?
            .set_default("database_pool_max_connections", 5)?
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        s.base_url = s.base_url.trim_end_matches('/').to_string();
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
