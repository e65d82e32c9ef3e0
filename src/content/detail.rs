//! Detail and listing view models

use serde::Serialize;

use super::{BlogPostData, ListingMetadata, MarkdownRenderer, PostMetadata, PostSummary};
use crate::config::SiteConfig;
use crate::helpers;

/// Everything a post page renders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub post: BlogPostData,
    pub metadata: PostMetadata,
    /// Localized publication date ("1 de junho de 2024")
    pub published_label: String,
    pub reading_minutes: usize,
    pub html: String,
}

impl PostDetail {
    pub fn build(
        post: BlogPostData,
        body: &str,
        renderer: &MarkdownRenderer,
        config: &SiteConfig,
    ) -> Self {
        let published_label = chrono::DateTime::parse_from_rfc3339(&post.published_at)
            .map(|d| helpers::format_long(&d.with_timezone(&chrono::Utc), &config.locale))
            .unwrap_or_default();

        Self {
            metadata: PostMetadata::for_post(&post, &config.url),
            published_label,
            reading_minutes: renderer.reading_minutes(body),
            html: renderer.render(body),
            post,
        }
    }
}

/// Result of a listing query plus the copy the index page shows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub query: String,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub empty_message: String,
    pub metadata: ListingMetadata,
    pub posts: Vec<PostSummary>,
}

impl SearchOutcome {
    pub fn new(query: &str, posts: Vec<PostSummary>, config: &SiteConfig) -> Self {
        let searching = !query.trim().is_empty();

        let heading = if searching {
            format!("Search results for \"{}\"", query)
        } else {
            config.description.clone()
        };

        let status = searching.then(|| match posts.len() {
            1 => "1 post found".to_string(),
            n => format!("{} posts found", n),
        });

        let empty_message = if searching {
            format!("No posts found for \"{}\"", query)
        } else {
            "No posts available".to_string()
        };

        Self {
            query: query.to_string(),
            heading,
            status,
            empty_message,
            metadata: ListingMetadata::from_config(config),
            posts,
        }
    }
}
