//! Create a new post

use anyhow::Result;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

use crate::content::{AuthorMatter, DateValue, FrontMatter};
use crate::helpers::to_iso_string;
use crate::Site;

/// Scaffold `<content_dir>/<slug>.mdx` and return its path
///
/// The slug defaults to the slugified title.
pub fn create_post(site: &Site, title: &str, explicit_slug: Option<&str>) -> Result<PathBuf> {
    let slug = slug::slugify(explicit_slug.unwrap_or(title));
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title: {:?}", title);
    }

    let file_path = site.content_dir.join(format!("{}.mdx", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let author = &site.config.fallback_author;
    let front_matter = FrontMatter {
        title: Some(title.to_string()),
        summary: Some(String::new()),
        cover_image: Some(String::new()),
        author: Some(AuthorMatter {
            name: Some(author.name.clone()),
            avatar: Some(author.avatar.clone()),
        }),
        published_at: Some(DateValue::Text(to_iso_string(&Utc::now()))),
        ..Default::default()
    };

    let content = format!(
        "---\n{}---\n\nWrite your post here.\n",
        serde_yaml::to_string(&front_matter)?
    );

    fs::create_dir_all(&site.content_dir)?;
    fs::write(&file_path, content)?;
    tracing::info!("Created {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_round_trips_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let path = create_post(&site, "Hello, World: Part 2", None).unwrap();
        assert!(path.ends_with("hello-world-part-2.mdx"));

        let store = site.load_store().unwrap();
        let post = site.repository(&store).post("hello-world-part-2").unwrap();
        assert_eq!(post.title, "Hello, World: Part 2");
        assert_eq!(post.author.name, "Unknown Author");
    }

    #[test]
    fn test_create_post_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        create_post(&site, "Twice", Some("twice")).unwrap();
        assert!(create_post(&site, "Twice again", Some("twice")).is_err());
    }
}
