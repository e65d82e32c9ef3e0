//! Post normalization - raw pages to complete `BlogPostData`

use chrono::{DateTime, Utc};

use super::frontmatter::AuthorMatter;
use super::{Author, BlogPostData, RawPage};
use crate::config::{SiteConfig, UndatedPolicy};
use crate::helpers;

/// Fills every optional frontmatter field with its default
///
/// This is the only place post defaults are applied; listing, detail and
/// metadata code all go through it.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    fallback_author: Author,
    undated: UndatedPolicy,
}

impl Normalizer {
    pub fn new(fallback_author: Author, undated: UndatedPolicy) -> Self {
        Self {
            fallback_author,
            undated,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.fallback_author.clone(), config.undated_posts)
    }

    /// Normalize against the current wall-clock time
    pub fn normalize(&self, raw: &RawPage) -> BlogPostData {
        self.normalize_at(raw, Utc::now())
    }

    /// Normalize with an explicit "now" for undated posts
    pub fn normalize_at(&self, raw: &RawPage, now: DateTime<Utc>) -> BlogPostData {
        let data = &raw.data;
        BlogPostData {
            title: data.title.clone().unwrap_or_default(),
            summary: data.summary.clone().unwrap_or_default(),
            author: self.author(data.author.as_ref()),
            cover_image: data.cover_image.clone().unwrap_or_default(),
            published_at: helpers::to_iso_string(&self.published_at(raw, now)),
            slug: raw.slug().to_string(),
            url: raw.url.clone(),
        }
    }

    /// Resolved publication time, used both for output and ordering
    pub fn published_at(&self, raw: &RawPage, now: DateTime<Utc>) -> DateTime<Utc> {
        raw.data
            .parse_published_at()
            .unwrap_or_else(|| match self.undated {
                UndatedPolicy::Now => now,
                UndatedPolicy::Epoch => DateTime::<Utc>::UNIX_EPOCH,
            })
    }

    fn author(&self, matter: Option<&AuthorMatter>) -> Author {
        let Some(matter) = matter else {
            return self.fallback_author.clone();
        };
        let pick = |value: &Option<String>, fallback: &str| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        Author {
            name: pick(&matter.name, &self.fallback_author.name),
            avatar: pick(&matter.avatar, &self.fallback_author.avatar),
        }
    }
}

/// Normalize with the default fallbacks and the current time
pub fn normalize(raw: &RawPage) -> BlogPostData {
    Normalizer::default().normalize(raw)
}
