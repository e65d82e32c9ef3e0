//! Raw page records produced by the content store

use serde::Serialize;
use std::path::PathBuf;

use super::FrontMatter;

/// A document as loaded from the content directory, before normalization
#[derive(Debug, Clone, Serialize)]
pub struct RawPage {
    /// Slug segments derived from the file path
    pub slugs: Vec<String>,

    /// Page URL under the blog base URL
    pub url: String,

    /// Front-matter bag, every field optional
    pub data: FrontMatter,

    /// Document body without the front-matter block
    pub body: String,

    /// Source file path, empty for synthetic pages
    pub source: PathBuf,
}

impl RawPage {
    /// Create a page with no body and no source file
    pub fn new(slugs: Vec<String>, url: impl Into<String>, data: FrontMatter) -> Self {
        Self {
            slugs,
            url: url.into(),
            data,
            body: String::new(),
            source: PathBuf::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// First slug segment, or empty for a root page
    pub fn slug(&self) -> &str {
        self.slugs.first().map(String::as_str).unwrap_or("")
    }
}
