//! URL helper functions

/// Join a base path and a relative path with exactly one slash
///
/// # Examples
/// ```ignore
/// url_for("/blog", "hello-world") // -> "/blog/hello-world"
/// ```
pub fn url_for(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    match (base.is_empty(), path.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", path),
        (false, true) => base.to_string(),
        (false, false) => format!("{}/{}", base, path),
    }
}

/// URL of a page from its slug segments
pub fn page_url(base_url: &str, slugs: &[String]) -> String {
    url_for(base_url, &slugs.join("/"))
}

/// Absolute URL including the site origin
///
/// Absolute inputs (`https://...`) are returned unchanged.
pub fn full_url_for(site_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    url_for(site_url, path)
}
