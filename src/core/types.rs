use std::fmt;

/// URL scheme tried against every host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Probe order. `http` sorts before `https`, which keeps results in output order.
    pub const ALL: [Scheme; 2] = [Scheme::Http, Scheme::Https];

    pub fn prefix(self) -> &'static str {
        match self {
            Scheme::Http => "http://",
            Scheme::Https => "https://",
        }
    }

    /// Build the candidate URL for `host`.
    ///
    /// The host is used verbatim: a host that already carries a scheme ends
    /// up as e.g. `http://https://example.com`, which simply fails to connect.
    pub fn url_for(self, host: &str) -> String {
        format!("{}{host}", self.prefix())
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

/// Live URLs found for one host.
///
/// Holds zero, one or two URLs, never the same one twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeResult {
    pub host: String,
    urls: Vec<String>,
}

impl ProbeResult {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            urls: Vec::with_capacity(Scheme::ALL.len()),
        }
    }

    /// Build a result from already known live URLs (duplicates are dropped).
    pub fn with_urls<I, S>(host: impl Into<String>, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut result = Self::new(host);
        for url in urls {
            result.push(url.into());
        }
        result
    }

    /// Record a live URL. Returns `false` if it was already recorded.
    pub fn push(&mut self, url: String) -> bool {
        if self.urls.contains(&url) {
            return false;
        }
        self.urls.push(url);
        true
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn into_urls(self) -> Vec<String> {
        self.urls
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_scheme_url_for() {
        assert_eq!(Scheme::Http.url_for("example.com"), "http://example.com");
        assert_eq!(Scheme::Https.url_for("example.com"), "https://example.com");
    }

    #[test]
    fn test_scheme_url_for__does_not_normalize_existing_scheme() {
        assert_eq!(
            Scheme::Http.url_for("https://example.com"),
            "http://https://example.com"
        );
    }

    #[test]
    fn test_scheme_order_matches_url_sort_order() {
        let urls: Vec<String> = Scheme::ALL.iter().map(|s| s.url_for("a.b")).collect();
        let mut sorted = urls.clone();
        sorted.sort();
        assert_eq!(urls, sorted);
    }

    #[test]
    fn test_scheme_display() {
        assert_eq!(Scheme::Http.to_string(), "http");
        assert_eq!(Scheme::Https.to_string(), "https");
    }

    #[test]
    fn test_probe_result__push_ignores_duplicates() {
        let mut result = ProbeResult::new("example.com");
        assert!(result.push("http://example.com".to_string()));
        assert!(!result.push("http://example.com".to_string()));

        assert_eq!(result.len(), 1);
        assert_eq!(result.urls(), ["http://example.com"]);
    }

    #[test]
    fn test_probe_result__with_urls() {
        let result = ProbeResult::with_urls(
            "example.com",
            ["http://example.com", "https://example.com", "http://example.com"],
        );

        assert_eq!(result.host, "example.com");
        assert_eq!(
            result.into_urls(),
            vec!["http://example.com", "https://example.com"]
        );
    }

    #[test]
    fn test_probe_result__empty() {
        let result = ProbeResult::new("dead.invalid");
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
    }
}
