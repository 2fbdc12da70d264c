/// Returns true if `base_uri` refers to a robots.txt resource
///
/// Links discovered while fetching robots.txt are never filtered, so that the
/// crawler can always retrieve the file regardless of seed rules. Any URI
/// containing `robots.txt` counts, including query strings and mirrors.
///
/// # Examples
///
/// ```
/// use seed_scope::url::is_robots_txt;
///
/// assert!(is_robots_txt("http://example.com/robots.txt"));
/// assert!(is_robots_txt("http://example.com/robots.txt?v=2"));
/// assert!(!is_robots_txt("http://example.com/robots"));
/// ```
pub fn is_robots_txt(base_uri: &str) -> bool {
    base_uri.contains("robots.txt")
}

/// Checks whether a discovering page is rooted under a seed
///
/// This is a plain textual prefix test: the seed is not interpreted as a
/// pattern and no normalization is applied to either side.
///
/// # Arguments
///
/// * `base_uri` - The URI of the page the candidate was discovered on
/// * `seed` - The resolved seed key
///
/// # Examples
///
/// ```
/// use seed_scope::url::is_rooted_under;
///
/// assert!(is_rooted_under("http://example.com/index.html", "http://example.com/"));
/// assert!(!is_rooted_under("http://other.com/index.html", "http://example.com/"));
/// ```
pub fn is_rooted_under(base_uri: &str, seed: &str) -> bool {
    base_uri.starts_with(seed)
}
