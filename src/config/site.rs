//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::Author;
use crate::error::{Error, Result};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub site_name: String,
    pub description: String,
    pub locale: String,

    // URL
    pub url: String,
    pub base_url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Writing
    pub date_format: String,
    pub fallback_author: Author,
    pub undated_posts: UndatedPolicy,

    // Server
    pub server: ServerConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            site_name: "Site.Set".to_string(),
            description: "Tips and strategies to boost your business".to_string(),
            locale: "pt-BR".to_string(),

            url: "http://localhost:4000".to_string(),
            base_url: "/blog".to_string(),

            content_dir: "content/blog".to_string(),
            public_dir: "public".to_string(),

            date_format: "DD/MM/YYYY".to_string(),
            fallback_author: Author::default(),
            undated_posts: UndatedPolicy::default(),

            server: ServerConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: SiteConfig = serde_yaml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// What `publishedAt` resolves to when a post carries no usable date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndatedPolicy {
    /// Treat the post as published at normalization time
    #[default]
    Now,
    /// Pin the post to the Unix epoch so it sorts last
    Epoch,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url, "/blog");
        assert_eq!(config.content_dir, "content/blog");
        assert_eq!(config.fallback_author.name, "Unknown Author");
        assert_eq!(config.undated_posts, UndatedPolicy::Now);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Notes
base_url: /posts
undated_posts: epoch
fallback_author:
  name: Editorial Team
  avatar: /team.png
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Notes");
        assert_eq!(config.base_url, "/posts");
        assert_eq!(config.undated_posts, UndatedPolicy::Epoch);
        assert_eq!(config.fallback_author.name, "Editorial Team");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "127.0.0.1");
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "server: [not, a, map]").unwrap();
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
