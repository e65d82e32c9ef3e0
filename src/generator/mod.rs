//! JSON export of the blog for a static host
//!
//! Writes the listing, the route parameters and one detail document per
//! post under `<public_dir>/<base_url>/`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{ContentStore, MarkdownRenderer};
use crate::Site;

/// Writes export files for one site
pub struct Generator<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

/// What an export produced
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub posts: usize,
    pub skipped: usize,
    pub files: Vec<PathBuf>,
}

impl<'a> Generator<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Export every post in `store`
    pub fn generate(&self, store: &ContentStore) -> Result<ExportReport> {
        let out_dir = self.site.export_dir();
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Failed to create {:?}", out_dir))?;

        let repo = self.site.repository(store);
        let mut report = ExportReport::default();

        let listing = repo.search_outcome("", &self.site.config);
        report.files.push(write_json(&out_dir.join("index.json"), &listing)?);

        let params = repo.generate_static_params();
        report.files.push(write_json(&out_dir.join("params.json"), &params)?);

        let mut written = HashSet::new();
        for param in &params {
            if param.slug.is_empty() {
                tracing::warn!("Skipping page without a slug");
                report.skipped += 1;
                continue;
            }
            if !written.insert(param.slug.as_str()) {
                tracing::warn!("Skipping duplicate slug {:?}", param.slug);
                report.skipped += 1;
                continue;
            }

            let Some(detail) = repo.detail(&param.slug, &self.renderer, &self.site.config) else {
                report.skipped += 1;
                continue;
            };

            let path = out_dir.join(&param.slug).join("index.json");
            report.files.push(write_json(&path, &detail)?);
            report.posts += 1;
        }

        tracing::info!(
            "Exported {} posts to {:?} ({} skipped)",
            report.posts,
            out_dir,
            report.skipped
        );
        Ok(report)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    tracing::debug!("Wrote {:?}", path);
    Ok(path.to_path_buf())
}
