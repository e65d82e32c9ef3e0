//! Content store - loads blog documents from the content directory

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, RawPage};
use crate::error::{Error, Result};
use crate::helpers::page_url;

/// In-memory snapshot of every document under the content directory
///
/// Pages keep the directory's natural order (file names sorted), which is
/// the tie-break order the repository relies on.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pages: Vec<RawPage>,
}

impl ContentStore {
    /// Build a store from already-loaded pages
    pub fn from_pages(pages: Vec<RawPage>) -> Self {
        Self { pages }
    }

    /// Load all `.md`/`.mdx` documents under `dir`
    ///
    /// A missing directory is an empty store. Files that cannot be read
    /// are skipped with a warning.
    pub fn load<P: AsRef<Path>>(dir: P, base_url: &str) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.exists() {
            tracing::debug!("Content directory {:?} does not exist", dir);
            return Ok(Self::from_pages(Vec::new()));
        }

        let mut pages = Vec::new();
        let mut seen: HashMap<Vec<String>, PathBuf> = HashMap::new();

        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_content_file(path) {
                continue;
            }

            match load_page(dir, path, base_url) {
                Ok(page) => {
                    if let Some(first) = seen.get(&page.slugs) {
                        tracing::warn!(
                            "Duplicate slug {:?} in {:?}, {:?} wins",
                            page.slugs,
                            page.source,
                            first
                        );
                    } else {
                        seen.insert(page.slugs.clone(), page.source.clone());
                    }
                    tracing::debug!("Loaded {:?} as {}", path, page.url);
                    pages.push(page);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                }
            }
        }

        tracing::info!("Loaded {} documents from {:?}", pages.len(), dir);
        Ok(Self::from_pages(pages))
    }

    /// All pages in natural order
    pub fn pages(&self) -> &[RawPage] {
        &self.pages
    }

    /// Page whose slug sequence equals `slugs`, first match wins
    pub fn get_page<S: AsRef<str>>(&self, slugs: &[S]) -> Option<&RawPage> {
        self.pages.iter().find(|page| {
            page.slugs.len() == slugs.len()
                && page
                    .slugs
                    .iter()
                    .zip(slugs)
                    .all(|(a, b)| a == b.as_ref())
        })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

fn load_page(root: &Path, path: &Path, base_url: &str) -> Result<RawPage> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let (data, body) = FrontMatter::parse(&content);
    if data.published_at.is_some() && data.parse_published_at().is_none() {
        tracing::warn!("Unrecognised publishedAt in {:?}, treating as undated", path);
    }

    let relative = path.strip_prefix(root).unwrap_or(path);
    let slugs = slugs_for(relative);
    let url = page_url(base_url, &slugs);

    Ok(RawPage::new(slugs, url, data)
        .with_body(body)
        .with_source(path))
}

/// Slug segments for a path relative to the content root
///
/// The extension is dropped and a trailing `index` maps to its directory.
fn slugs_for(relative: &Path) -> Vec<String> {
    let mut slugs: Vec<String> = relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();

    if slugs.last().map(String::as_str) == Some("index") {
        slugs.pop();
    }
    slugs
}

/// Check if a file is a markdown or MDX document
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "mdx" | "markdown"))
        .unwrap_or(false)
}
