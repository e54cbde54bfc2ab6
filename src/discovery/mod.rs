//! Endpoint discovery - loads the endpoint catalog from OpenAPI documents

pub mod openapi;

pub use openapi::load_catalog;
