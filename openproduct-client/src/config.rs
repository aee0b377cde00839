use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::{ClientFactory, OpenProductClient};
use crate::error::{Error, Result};

/// How requests to a service authenticate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServiceAuth {
    #[default]
    NoAuth,
    /// A static header, e.g. `Authorization: Token <key>`.
    ApiKey { header: String, key: String },
    BearerToken { token: String },
}

/// Location and credentials of one upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub base_url: Url,
    #[serde(default)]
    pub auth: ServiceAuth,
}

impl Service {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            auth: ServiceAuth::NoAuth,
        }
    }

    pub fn parse(base_url: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(base_url)?))
    }

    pub fn with_auth(mut self, auth: ServiceAuth) -> Self {
        self.auth = auth;
        self
    }
}

/// The Open Product API configuration used to build an [`OpenProductClient`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub open_product_api_service: Option<Service>,
    #[serde(default)]
    pub open_product_types_api_service: Option<Service>,
}

impl Configuration {
    pub fn new(
        open_product_api_service: Option<Service>,
        open_product_types_api_service: Option<Service>,
    ) -> Self {
        Self {
            open_product_api_service,
            open_product_types_api_service,
        }
    }

    /// Build a client from both services.
    ///
    /// Returns `Ok(None)` without touching `factory` when either service is
    /// not configured.
    pub fn client<F: ClientFactory>(
        &self,
        factory: &F,
    ) -> Result<Option<OpenProductClient<F::Client>>> {
        let (Some(products), Some(product_types)) = (
            &self.open_product_api_service,
            &self.open_product_types_api_service,
        ) else {
            return Ok(None);
        };

        let client = OpenProductClient::new(
            products.base_url.clone(),
            factory.build(products)?,
            product_types.base_url.clone(),
            factory.build(product_types)?,
        )?;
        Ok(Some(client))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Open Product API client configuration")
    }
}

/// Where the one configuration record lives.
pub trait ConfigurationStore {
    /// The current configuration, or the default one if nothing was saved yet.
    fn current(&self) -> Result<Configuration>;

    fn save(&self, configuration: &Configuration) -> Result<()>;
}

/// Keeps the configuration in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    configuration: Mutex<Configuration>,
}

impl InMemoryStore {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration: Mutex::new(configuration),
        }
    }
}

impl ConfigurationStore for InMemoryStore {
    fn current(&self) -> Result<Configuration> {
        let configuration = self
            .configuration
            .lock()
            .map_err(|_| Error::StorePoisoned)?;
        Ok(configuration.clone())
    }

    fn save(&self, configuration: &Configuration) -> Result<()> {
        let mut current = self
            .configuration
            .lock()
            .map_err(|_| Error::StorePoisoned)?;
        *current = configuration.clone();
        Ok(())
    }
}

/// Persists the configuration as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigurationStore for JsonFileStore {
    fn current(&self) -> Result<Configuration> {
        if !self.path.exists() {
            log::debug!(
                "no configuration at {}, using defaults",
                self.path.display()
            );
            return Ok(Configuration::default());
        }
        let json = fs::read_to_string(&self.path)?;
        Configuration::from_json(&json)
    }

    fn save(&self, configuration: &Configuration) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, configuration.to_json()?)?;
        Ok(())
    }
}
