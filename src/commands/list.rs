//! List posts

use anyhow::Result;
use chrono::DateTime;

use crate::helpers::format_date;
use crate::Site;

/// Print posts newest first, filtered by `query`
pub fn run(site: &Site, query: Option<&str>) -> Result<()> {
    let store = site.load_store()?;
    let outcome = site
        .repository(&store)
        .search_outcome(query.unwrap_or(""), &site.config);

    println!("{}", outcome.heading);
    if let Some(status) = &outcome.status {
        println!("{}", status);
    }

    if outcome.posts.is_empty() {
        println!("  {}", outcome.empty_message);
        return Ok(());
    }

    for post in &outcome.posts {
        let date = DateTime::parse_from_rfc3339(&post.published_at)
            .map(|d| format_date(&d.with_timezone(&chrono::Utc), &site.config.date_format))
            .unwrap_or_else(|_| post.published_at.clone());
        println!("  {} - {} [{}]", date, post.title, post.slug);
    }

    Ok(())
}
