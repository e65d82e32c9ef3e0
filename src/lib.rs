//! siteset: content backend for the Site.Set blog
//!
//! Loads MDX blog posts with YAML front-matter, normalizes them into
//! display-ready records and answers the listing, search and per-slug
//! queries the site's pages are built from.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod server;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

use content::{ContentStore, Normalizer, PostRepository};

/// The main site handle
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the blog documents
    pub content_dir: PathBuf,
    /// Export (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Open a site rooted at a directory
    ///
    /// A missing `_config.yml` means default configuration.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Load the content snapshot
    pub fn load_store(&self) -> Result<ContentStore> {
        ContentStore::load(&self.content_dir, &self.config.base_url)
    }

    /// Normalizer configured from the site's fallbacks
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::from_config(&self.config)
    }

    /// Repository over `store` using this site's normalization rules
    pub fn repository<'a>(&self, store: &'a ContentStore) -> PostRepository<'a> {
        PostRepository::with_normalizer(store, self.normalizer())
    }

    /// Directory the JSON export is written into
    pub fn export_dir(&self) -> PathBuf {
        self.public_dir
            .join(self.config.base_url.trim_matches('/'))
    }
}
