#![allow(clippy::module_inception)]
//! Blocking client for the Open Product and Open Product Types REST APIs.
//!
//! ```ignore
//! use openproduct_client::{Configuration, ProductFilters, UreqClientFactory};
//!
//! let config = Configuration::from_json(&std::fs::read_to_string("openproduct.json")?)?;
//! if let Some(client) = config.client(&UreqClientFactory::new())? {
//!     let products = client.list_products(&ProductFilters::default())?;
//! }
//! ```
mod client;
mod config;
mod error;
mod filters;
mod params;

pub use client::{
    ApiClient, ClientFactory, Endpoint, HttpClient, HttpResponse, OpenProductClient, UreqClient,
    UreqClientFactory, ORGANIZATIONS, PRODUCTS, PRODUCT_TYPES, THEMES,
};
pub use config::{
    Configuration, ConfigurationStore, InMemoryStore, JsonFileStore, Service, ServiceAuth,
};
pub use error::{Error, Result};
pub use filters::{
    Filters, OrganizationFilters, ProductFilters, ProductTypeFilters, ThemeFilters,
};
pub use params::{format_list_param, format_params, ParamValue};

pub use serde_json::Value;
