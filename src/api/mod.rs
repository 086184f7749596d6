//! API client for the remote catalog service

pub mod catalog;

pub use catalog::{CatalogClient, CatalogError};
