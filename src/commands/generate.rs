//! Export the blog as JSON

use anyhow::Result;

use crate::generator::{ExportReport, Generator};
use crate::Site;

/// Load the content directory and export it
pub fn run(site: &Site) -> Result<ExportReport> {
    let start = std::time::Instant::now();

    let store = site.load_store()?;
    let report = Generator::new(site).generate(&store)?;

    tracing::info!("Exported in {:.2}s", start.elapsed().as_secs_f64());
    Ok(report)
}
