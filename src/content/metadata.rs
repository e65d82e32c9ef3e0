//! Page metadata for search engines and social cards

use serde::Serialize;

use super::BlogPostData;
use crate::config::SiteConfig;
use crate::helpers::{full_url_for, url_for};

const ROBOTS: &str = "index, follow";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Metadata for a single post page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    pub title: String,
    pub description: String,
    pub authors: Vec<String>,
    pub robots: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
}

impl PostMetadata {
    pub fn for_post(post: &BlogPostData, site_url: &str) -> Self {
        let images: Vec<String> = if post.cover_image.is_empty() {
            Vec::new()
        } else {
            vec![full_url_for(site_url, &post.cover_image)]
        };
        let authors = vec![post.author.name.clone()];

        Self {
            title: post.title.clone(),
            description: post.summary.clone(),
            authors: authors.clone(),
            robots: ROBOTS.to_string(),
            open_graph: Some(OpenGraph {
                title: post.title.clone(),
                description: post.summary.clone(),
                url: Some(full_url_for(site_url, &post.url)),
                kind: "article".to_string(),
                images: images.clone(),
                published_time: Some(post.published_at.clone()),
                authors,
                ..Default::default()
            }),
            twitter: Some(TwitterCard {
                card: "summary_large_image".to_string(),
                title: post.title.clone(),
                description: post.summary.clone(),
                images,
            }),
        }
    }

    /// Metadata served in place of a missing post
    pub fn not_found() -> Self {
        Self {
            title: "Post not found".to_string(),
            ..Default::default()
        }
    }
}

/// Metadata for the blog index page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingMetadata {
    pub title: String,
    pub description: String,
    pub robots: String,
    pub open_graph: OpenGraph,
}

impl ListingMetadata {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            robots: ROBOTS.to_string(),
            open_graph: OpenGraph {
                title: config.title.clone(),
                description: config.description.clone(),
                url: Some(full_url_for(&config.url, &url_for(&config.base_url, ""))),
                site_name: Some(config.site_name.clone()),
                locale: Some(config.locale.clone()),
                kind: "website".to_string(),
                ..Default::default()
            },
        }
    }
}
