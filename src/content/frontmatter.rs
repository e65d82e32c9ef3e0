//! Front-matter parsing

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::helpers;

/// Deserialize a field, turning a wrongly-typed value into `None`
///
/// Frontmatter is hand-written; one bad field must not discard the rest
/// of the document's metadata.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    match serde_yaml::from_value(value) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            tracing::debug!("Ignoring malformed frontmatter field: {}", e);
            Ok(None)
        }
    }
}

/// `publishedAt` as written: a date string or epoch milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Millis(i64),
    Text(String),
}

/// Author block as written in frontmatter, every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorMatter {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub avatar: Option<String>,
}

/// Front-matter data from a blog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(rename = "coverImage", deserialize_with = "lenient")]
    pub cover_image: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub author: Option<AuthorMatter>,
    #[serde(rename = "publishedAt", deserialize_with = "lenient")]
    pub published_at: Option<DateValue>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split a document into front-matter and body
    ///
    /// Never fails: a missing, unterminated or unparsable block yields the
    /// default front-matter and the whole document as body.
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return (FrontMatter::default(), content);
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        // Empty block: the closing fence follows the opening one directly
        if let Some(body) = rest.strip_prefix("---") {
            return (FrontMatter::default(), body.trim_start_matches(['\n', '\r']));
        }

        let Some(end_pos) = rest.find("\n---") else {
            return (FrontMatter::default(), content);
        };

        let yaml = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        let value = match serde_yaml::from_str::<serde_yaml::Value>(yaml) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to parse YAML front-matter, treating as content: {}", e);
                return (FrontMatter::default(), content);
            }
        };

        // A `---` thematic break followed by prose parses as a scalar
        if !value.is_mapping() {
            return (FrontMatter::default(), content);
        }

        match serde_yaml::from_value::<FrontMatter>(value) {
            Ok(fm) => (fm, body),
            Err(e) => {
                tracing::warn!("Failed to read front-matter fields, treating as content: {}", e);
                (FrontMatter::default(), content)
            }
        }
    }

    /// Parse `publishedAt`; `None` when absent or unrecognised
    pub fn parse_published_at(&self) -> Option<DateTime<Utc>> {
        match self.published_at.as_ref()? {
            DateValue::Text(s) => helpers::parse_date(s),
            DateValue::Millis(ms) => helpers::from_millis(*ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_frontmatter() {
        let content = r#"---
title: Hello World
summary: First steps
coverImage: /images/hello.png
author:
  name: Ana Souza
  avatar: /avatars/ana.png
publishedAt: 2024-01-15
---

# Heading

Body text.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Hello World"));
        assert_eq!(fm.summary.as_deref(), Some("First steps"));
        assert_eq!(fm.cover_image.as_deref(), Some("/images/hello.png"));
        let author = fm.author.unwrap();
        assert_eq!(author.name.as_deref(), Some("Ana Souza"));
        assert_eq!(author.avatar.as_deref(), Some("/avatars/ana.png"));
        assert_eq!(fm.published_at, Some(DateValue::Text("2024-01-15".to_string())));
        assert!(body.starts_with("# Heading"));
    }

    #[test]
    fn test_parse_millis_date_and_extra_fields() {
        let content = "---\ntitle: T\npublishedAt: 1704067200000\ndraft: true\n---\nbody";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.published_at, Some(DateValue::Millis(1_704_067_200_000)));
        assert_eq!(fm.extra.get("draft"), Some(&serde_yaml::Value::Bool(true)));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_malformed_field_is_dropped_not_fatal() {
        let content = "---\ntitle: Kept\nauthor: just a string\npublishedAt: [1, 2]\n---\nbody";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Kept"));
        assert_eq!(fm.author, None);
        assert_eq!(fm.published_at, None);
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, body) = FrontMatter::parse("Just text.");
        assert_eq!(fm.title, None);
        assert_eq!(body, "Just text.");
    }

    #[test]
    fn test_unterminated_frontmatter() {
        let content = "---\ntitle: Open\nbody never closes";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_invalid_yaml_falls_back_to_content() {
        let content = "---\ntitle: [unclosed\n---\nbody";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert!(body.contains("body"));
    }

    #[test]
    fn test_thematic_break_not_yaml() {
        let content = "---\nCheck https://example.com for details\n---\nMore.";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert!(body.contains("https://example.com"));
    }

    #[test]
    fn test_quoted_keys_are_frontmatter() {
        let content = "---\n\"title\": Quoted\n'summary': Single\n---\nbody";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Quoted"));
        assert_eq!(fm.summary.as_deref(), Some("Single"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_list_block_is_not_frontmatter() {
        let content = "---\n- one\n- two\n---\nbody";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_fence_block() {
        let (fm, body) = FrontMatter::parse("---\n---\nBody text");
        assert_eq!(fm.title, None);
        assert_eq!(body, "Body text");

        let (_, body) = FrontMatter::parse("---\n\n---\nBody text");
        assert_eq!(body, "Body text");
    }
}
