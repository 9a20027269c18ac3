use serde::Deserialize;
use std::env;
use viaro_domain::FareSchedule;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_base_fare_cents")]
    pub base_fare_cents: i64,
    #[serde(default = "default_tax_percent")]
    pub tax_percent: i64,
}

fn default_base_fare_cents() -> i64 {
    10_000
}

fn default_tax_percent() -> i64 {
    16
}

impl BusinessRules {
    pub fn fare_schedule(&self) -> FareSchedule {
        FareSchedule {
            base_fare_cents: self.base_fare_cents,
            tax_percent: self.tax_percent,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base configuration, always present.
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional.
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in.
            .add_source(config::File::with_name("config/local").required(false))
            // Environment variables, e.g. VIARO__SERVER__PORT=9000.
            .add_source(config::Environment::with_prefix("VIARO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
