//! Normalized post models

use serde::{Deserialize, Serialize};

/// Name used when a post carries no author
pub const UNKNOWN_AUTHOR_NAME: &str = "Unknown Author";

/// Avatar used when a post carries no author
pub const DEFAULT_AVATAR: &str = "/avatar.jpg";

/// Post author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: UNKNOWN_AUTHOR_NAME.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
        }
    }
}

/// A complete, display-ready post
///
/// Every field is always present; see [`Normalizer`](super::Normalizer)
/// for how missing frontmatter is filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostData {
    pub title: String,
    pub summary: String,
    pub author: Author,
    pub cover_image: String,
    /// ISO 8601 timestamp in UTC
    pub published_at: String,
    pub slug: String,
    pub url: String,
}

/// Card shape used by listing views: `summary` is exposed as `excerpt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub cover_image: String,
    pub published_at: String,
    pub author: Author,
}

impl From<BlogPostData> for PostSummary {
    fn from(post: BlogPostData) -> Self {
        Self {
            slug: post.slug,
            title: post.title,
            excerpt: post.summary,
            cover_image: post.cover_image,
            published_at: post.published_at,
            author: post.author,
        }
    }
}

/// Route parameter for one post page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticParam {
    pub slug: String,
}
