mod api;
mod client;
mod http_trait;
mod ureq_impl;

pub use api::{ApiClient, Endpoint};
pub use client::{OpenProductClient, ORGANIZATIONS, PRODUCTS, PRODUCT_TYPES, THEMES};
pub use http_trait::{ClientFactory, HttpClient, HttpResponse};

pub use ureq_impl::{UreqClient, UreqClientFactory};
