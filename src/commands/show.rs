//! Show a single post

use anyhow::Result;

use crate::content::MarkdownRenderer;
use crate::Site;

/// Print the detail view of `slug` as JSON
pub fn run(site: &Site, slug: &str) -> Result<()> {
    let store = site.load_store()?;
    let repo = site.repository(&store);

    let Some(detail) = repo.detail(slug, &MarkdownRenderer::new(), &site.config) else {
        anyhow::bail!("No post found for slug: {}", slug);
    };

    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}
