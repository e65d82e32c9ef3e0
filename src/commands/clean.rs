//! Clean the export directory

use anyhow::Result;
use std::fs;

use crate::Site;

/// Remove everything the export wrote
pub fn run(site: &Site) -> Result<()> {
    let export_dir = site.export_dir();
    if export_dir.exists() {
        fs::remove_dir_all(&export_dir)?;
        tracing::info!("Deleted: {:?}", export_dir);
    } else {
        tracing::debug!("Nothing to clean at {:?}", export_dir);
    }
    Ok(())
}
