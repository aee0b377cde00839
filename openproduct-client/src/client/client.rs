use log::error;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};
use crate::filters::{
    Filters, OrganizationFilters, ProductFilters, ProductTypeFilters, ThemeFilters,
};

use super::api::{ApiClient, Endpoint};
use super::http_trait::HttpClient;

pub const PRODUCTS: Endpoint = Endpoint {
    path: "producten",
    list_label: "products API",
    detail_label: "products API",
};

pub const PRODUCT_TYPES: Endpoint = Endpoint {
    path: "producttypen",
    list_label: "producttypes API",
    detail_label: "producttype from producttypes API",
};

pub const THEMES: Endpoint = Endpoint {
    path: "themas",
    list_label: "themes from producttypes API",
    detail_label: "theme from producttypes API",
};

pub const ORGANIZATIONS: Endpoint = Endpoint {
    path: "organisaties",
    list_label: "organizations from producttypes API",
    detail_label: "organization from producttypes API",
};

/// Client for the Open Product and Open Product Types APIs.
///
/// Products live on the first API; product types, themes and organizations
/// on the second. Responses are returned as decoded JSON, untouched.
#[derive(Clone, Debug)]
pub struct OpenProductClient<H: HttpClient> {
    products: ApiClient<H>,
    product_types: ApiClient<H>,
}

impl<H: HttpClient> OpenProductClient<H> {
    /// Create a client from the two API roots and their HTTP clients.
    ///
    /// # Arguments
    /// * `products_url` - Base URL of the Open Product API
    /// * `products_client` - HTTP client for the Open Product API
    /// * `product_types_url` - Base URL of the Open Product Types API
    /// * `product_types_client` - HTTP client for the Open Product Types API
    pub fn new(
        products_url: Url,
        products_client: H,
        product_types_url: Url,
        product_types_client: H,
    ) -> Result<Self> {
        Ok(Self {
            products: ApiClient::new(products_url, products_client)?,
            product_types: ApiClient::new(product_types_url, product_types_client)?,
        })
    }

    pub fn products_api(&self) -> &ApiClient<H> {
        &self.products
    }

    pub fn product_types_api(&self) -> &ApiClient<H> {
        &self.product_types
    }

    /// Checks whether both APIs respond, using a HEAD request each.
    ///
    /// Returns `(true, "")` on success, otherwise `false` and a description
    /// of the first failure. Never fails itself.
    pub fn is_healthy(&self) -> (bool, String) {
        let result = self
            .products
            .head(&PRODUCTS)
            .and_then(|_| self.product_types.head(&PRODUCT_TYPES));

        match result {
            Ok(_) => (true, String::new()),
            Err(e @ Error::UpstreamHttp { .. }) => (
                false,
                format!("Server did not return a valid response ({e})."),
            ),
            Err(e) => {
                error!("health check failed: {}", e);
                (false, e.to_string())
            }
        }
    }

    // -- Open Product API

    pub fn list_products(&self, filters: &ProductFilters) -> Result<Value> {
        self.products.list(&PRODUCTS, &filters.to_query())
    }

    pub fn retrieve_product(&self, id: &str) -> Result<Value> {
        self.products.retrieve(&PRODUCTS, id)
    }

    // -- Open Product Types API

    pub fn list_product_types(&self, filters: &ProductTypeFilters) -> Result<Value> {
        self.product_types.list(&PRODUCT_TYPES, &filters.to_query())
    }

    pub fn retrieve_product_type(&self, id: &str) -> Result<Value> {
        self.product_types.retrieve(&PRODUCT_TYPES, id)
    }

    pub fn list_themes(&self, filters: &ThemeFilters) -> Result<Value> {
        self.product_types.list(&THEMES, &filters.to_query())
    }

    pub fn retrieve_theme(&self, id: &str) -> Result<Value> {
        self.product_types.retrieve(&THEMES, id)
    }

    pub fn list_organizations(&self, filters: &OrganizationFilters) -> Result<Value> {
        self.product_types.list(&ORGANIZATIONS, &filters.to_query())
    }
}
