//! # Demo Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHELF_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoConfig {
    /// Library name printed in the summary.
    pub library_name: String,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Whether to stock the inventory with the sample catalogue.
    pub seed_books: bool,
}

impl Default for DemoConfig {
    /// ## Default Values
    /// - Name: "Shelf Community Library"
    /// - Log filter: `info,shelf_core=debug,shelf_lending=debug`
    /// - Seed books: yes
    fn default() -> Self {
        DemoConfig {
            library_name: "Shelf Community Library".to_string(),
            log_filter: "info,shelf_core=debug,shelf_lending=debug".to_string(),
            seed_books: true,
        }
    }
}

impl DemoConfig {
    /// Creates a DemoConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHELF_LIBRARY_NAME`: Override library name
    /// - `SHELF_LOG_FILTER`: Override default log filter
    /// - `SHELF_SEED_BOOKS`: `true`/`false` (also `1`/`0`, `yes`/`no`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DemoConfig::default();

        if let Some(name) = lookup("SHELF_LIBRARY_NAME") {
            config.library_name = name;
        }

        if let Some(filter) = lookup("SHELF_LOG_FILTER") {
            config.log_filter = filter;
        }

        if let Some(seed) = lookup("SHELF_SEED_BOOKS").as_deref().and_then(parse_flag) {
            config.seed_books = seed;
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
