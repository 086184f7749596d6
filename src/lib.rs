//! watchtui - terminal client for a remote video catalog
//!
//! Lists videos fetched from the catalog service, supports free-text search,
//! and renders per-video cards themed by a shared light/dark flag.
//!
//! # Modules
//!
//! - `models` - normalized video records
//! - `api` - catalog service HTTP client
//! - `app` - view-state machine (fetch lifecycle, search, banner)
//! - `ui` - ratatui components and theming
//! - `config` - config file and credential store
//! - `cli` / `commands` - scriptable command mode

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use api::{CatalogClient, CatalogError};
pub use app::{App, FetchIntent, FetchOutcome, FetchStatus, InputMode, RenderedView};
pub use config::Config;
pub use models::VideoSummary;
pub use ui::{Palette, ThemeFlag};
