use regex::Regex;
use url::Url;

/// Resolves raw hrefs against the page they were found on and decides
/// which of them stay inside the crawl.
///
/// Same-origin scoping uses the historical base-domain heuristic: the
/// page host is split on its first `.` and the two pieces are rejoined
/// with a single `.`. For any host that contains a dot this reproduces
/// the host unchanged; a bare host (no dot) comes out with a trailing
/// dot and then matches nothing. Absolute links are kept by a substring
/// test against that base domain, so sibling subdomains that embed it
/// textually pass as well. Kept as-is for compatibility.
#[derive(Debug, Default)]
pub struct LinkResolver {
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl LinkResolver {
    /// Create a resolver with optional include/exclude patterns applied
    /// to resolved URLs. Exclude patterns take precedence; a non-empty
    /// include list requires at least one match.
    pub fn new(
        include_patterns: &[String],
        exclude_patterns: &[String],
    ) -> Result<Self, regex::Error> {
        let mut include_regexes = Vec::with_capacity(include_patterns.len());
        for pattern in include_patterns {
            include_regexes.push(Regex::new(pattern)?);
        }

        let mut exclude_regexes = Vec::with_capacity(exclude_patterns.len());
        for pattern in exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            include_regexes,
            exclude_regexes,
        })
    }

    /// Base domain of a page URL: subdomain joined with the remainder of
    /// the host by a single dot (see the type-level note for the quirk).
    /// Returns None when the URL has no parseable host.
    pub fn base_domain(page_url: &str) -> Option<String> {
        let url = Url::parse(page_url).ok()?;
        let host = url.host_str()?;

        Some(match host.split_once('.') {
            Some((subdomain, remainder)) => format!("{subdomain}.{remainder}"),
            None => format!("{host}."),
        })
    }

    /// Resolve every raw href found on `page_url`, dropping fragments,
    /// cross-origin links and anything rejected by the configured
    /// patterns. The base domain is computed once for the page; a page
    /// URL with no host yields no links.
    pub fn resolve_page_links(&self, raw_links: &[String], page_url: &str) -> Vec<String> {
        let Some(base_domain) = Self::base_domain(page_url) else {
            ::log::debug!("no base domain for {}, dropping its links", page_url);
            return Vec::new();
        };

        raw_links
            .iter()
            .filter_map(|raw| self.resolve(raw, &base_domain))
            .collect()
    }

    /// Resolve one raw href against a base domain.
    ///
    /// Absolute http(s) links are kept verbatim when they contain the
    /// base domain; root-relative and bare-relative links are rebuilt
    /// against `https://<base>/`; in-page fragments are dropped. No
    /// query or fragment stripping happens beyond the `#` prefix check,
    /// and malformed input degrades to an unreachable URL rather than
    /// an error.
    pub fn resolve(&self, raw: &str, base_domain: &str) -> Option<String> {
        let resolved = if raw.starts_with("http") {
            if !raw.contains(base_domain) {
                return None;
            }
            raw.to_string()
        } else if let Some(rest) = raw.strip_prefix('/') {
            format!("https://{base_domain}/{rest}")
        } else if raw.starts_with('#') {
            return None;
        } else {
            format!("https://{base_domain}/{raw}")
        };

        if !self.passes_patterns(&resolved) {
            return None;
        }

        Some(resolved)
    }

    /// Check a resolved URL against the include/exclude patterns
    fn passes_patterns(&self, url: &str) -> bool {
        for regex in &self.exclude_regexes {
            if regex.is_match(url) {
                return false;
            }
        }

        if !self.include_regexes.is_empty() {
            return self.include_regexes.iter().any(|r| r.is_match(url));
        }

        true
    }
}
