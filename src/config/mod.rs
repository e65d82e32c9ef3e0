//! Configuration module
//!
//! Handles the site configuration (_config.yml)

mod site;

pub use site::{ServerConfig, SiteConfig, UndatedPolicy};
