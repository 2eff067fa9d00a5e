use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::convert::{TryFrom, TryInto};
use std::time::Duration;

use crate::probe::ServiceTarget;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub store: StoreSettings,
    pub dashboard: DashboardSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct StoreSettings {
    /// Connection string for the document store. Left unset, the service
    /// runs with store-backed features disabled.
    pub uri: Option<Secret<String>>,
    pub database_name: String,
    pub collection_name: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub connection_timeout_seconds: u64,
}

impl StoreSettings {
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_seconds)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct DashboardSettings {
    pub services: Vec<ServiceTarget>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub health_timeout_milliseconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub users_timeout_milliseconds: u64,
}

impl DashboardSettings {
    pub fn health_timeout(&self) -> Duration {
        Duration::from_millis(self.health_timeout_milliseconds)
    }

    pub fn users_timeout(&self) -> Duration {
        Duration::from_millis(self.users_timeout_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();
    let base_path = std::env::current_dir().expect("failed to determine current dir");
    let configuration_directory = base_path.join("configuration");

    settings.merge(config::File::from(configuration_directory.join("base.yaml")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("failed to parse environment");
    tracing::debug!("the environment is {}", environment.as_str());

    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    // Deployment contract: MONGO_URI carries the store connection string.
    if let Ok(uri) = std::env::var("MONGO_URI") {
        settings.set("store.uri", uri)?;
    }

    settings.try_into()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local.yaml",
            Environment::Production => "production.yaml",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _other => Err(format!("failed to parse {}", s)),
        }
    }
}
