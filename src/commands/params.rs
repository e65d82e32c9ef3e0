//! Print route parameters

use anyhow::Result;

use crate::Site;

/// Print one `{ "slug": ... }` record per post as JSON
pub fn run(site: &Site) -> Result<()> {
    let store = site.load_store()?;
    let params = site.repository(&store).generate_static_params();
    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}
