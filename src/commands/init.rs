//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# Site.Set blog configuration

# Site
title: Blog
site_name: Site.Set
description: Tips and strategies to boost your business
locale: pt-BR

# URL
url: http://localhost:4000
base_url: /blog

# Directory
content_dir: content/blog
public_dir: public

# Writing
date_format: DD/MM/YYYY
fallback_author:
  name: Unknown Author
  avatar: /avatar.jpg
# now: undated posts count as just published; epoch: they sort last
undated_posts: now

# Server
server:
  ip: 127.0.0.1
  port: 4000
"#;

const WELCOME_POST: &str = r#"---
title: Welcome to the blog
summary: The first post, created by siteset init.
coverImage: /images/welcome.png
author:
  name: Site.Set
  avatar: /avatar.jpg
publishedAt: 2024-01-01
---

## Hello

Edit or delete this post in `content/blog/welcome.mdx`.
"#;

/// Initialize a new site in the given directory
///
/// Existing files are left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    let content_dir = target_dir.join("content/blog");
    fs::create_dir_all(&content_dir)?;
    fs::create_dir_all(target_dir.join("public"))?;

    write_if_missing(&target_dir.join("_config.yml"), CONFIG_TEMPLATE)?;
    write_if_missing(&content_dir.join("welcome.mdx"), WELCOME_POST)?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;

    #[test]
    fn test_init_site_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.site_name, "Site.Set");

        let store = site.load_store().unwrap();
        let posts = site.repository(&store).posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "welcome");
        assert_eq!(posts[0].published_at, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: Mine\n").unwrap();
        init_site(dir.path()).unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.title, "Mine");
    }
}
