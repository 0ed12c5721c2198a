use url::Url;

/// Directory name for one seed's output, derived from the seed's host.
/// Falls back to a sanitized form of the whole URL when it has no host.
pub fn seed_dir_name(seed_url: &str) -> String {
    match Url::parse(seed_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
    {
        Some(host) => host,
        None => sanitize_filename(seed_url),
    }
}

/// Convert a string to a sanitized filename
pub fn sanitize_filename(url: &str) -> String {
    // Remove protocol and replace invalid filename characters
    let mut name = url.replace("http://", "").replace("https://", "");
    name = name.replace(['/', ':', '?', '&', '=', '#', '%'], "_");

    // Limit filename length
    if name.len() > 100 {
        name[..100].to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dir_name_uses_host() {
        assert_eq!(seed_dir_name("https://docs.example.com/guide"), "docs.example.com");
    }

    #[test]
    fn test_seed_dir_name_falls_back_to_sanitized_url() {
        assert_eq!(seed_dir_name("not a url"), "not a url");
        assert_eq!(seed_dir_name("data:text/plain,hi"), "data_text_plain,hi");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(
            sanitize_filename("https://example.com/a/b?q=1#top"),
            "example.com_a_b_q_1_top"
        );
    }

    #[test]
    fn test_sanitize_filename_truncates() {
        let long = format!("https://example.com/{}", "x".repeat(200));
        assert_eq!(sanitize_filename(&long).len(), 100);
    }
}
