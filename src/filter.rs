use url::Url;

/// Classifies link targets as internal or external relative to the site host
#[derive(Debug, Clone, Default)]
pub struct LinkClassifier {
    site_host: Option<String>,
}

impl LinkClassifier {
    /// Create a classifier from the site URL (if any)
    pub fn new(site_url: Option<&str>) -> Self {
        let site_host = site_url.and_then(|s| {
            let s = s.trim();
            // Accept a bare host ("example.com") as well as a full URL
            let parsed = Url::parse(s).or_else(|_| Url::parse(&format!("https://{}", s)));
            match parsed {
                Ok(url) => url.host_str().map(normalize_host),
                Err(e) => {
                    ::log::debug!("Ignoring unparseable site URL {:?}: {}", s, e);
                    None
                }
            }
        });

        Self { site_host }
    }

    /// Host the classifier compares against, without any leading `www.`
    pub fn site_host(&self) -> Option<&str> {
        self.site_host.as_deref()
    }

    /// Determine if a link target belongs to the site.
    ///
    /// Links without a host (relative paths, fragments, `mailto:`) are internal.
    pub fn is_internal(&self, href: &str) -> bool {
        match Self::host_of(href) {
            None => true,
            Some(host) => self.site_host.as_deref() == Some(host.as_str()),
        }
    }

    /// Normalized host of an absolute link, `None` for host-less links
    fn host_of(href: &str) -> Option<String> {
        let href = href.trim();
        // Protocol-relative links carry a host too
        let parsed = if let Some(rest) = href.strip_prefix("//") {
            Url::parse(&format!("https://{}", rest))
        } else {
            Url::parse(href)
        };

        match parsed {
            Ok(url) => url.host_str().filter(|h| !h.is_empty()).map(normalize_host),
            // RelativeUrlWithoutBase and friends
            Err(_) => None,
        }
    }
}

/// Lowercase a host and strip a leading `www.`
fn normalize_host(host: &str) -> String {
    let host = host.to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_links_are_internal() {
        let classifier = LinkClassifier::new(Some("https://example.com"));
        assert!(classifier.is_internal("/about"));
        assert!(classifier.is_internal("contact.html"));
        assert!(classifier.is_internal("#section-2"));
        assert!(classifier.is_internal(""));
    }

    #[test]
    fn test_site_host_match() {
        let classifier = LinkClassifier::new(Some("https://www.Example.com/blog"));
        assert_eq!(classifier.site_host(), Some("example.com"));

        assert!(classifier.is_internal("https://example.com/page"));
        assert!(classifier.is_internal("http://www.example.com/page"));
        assert!(classifier.is_internal("//example.com/asset"));
        assert!(!classifier.is_internal("https://other.com/page"));
        assert!(!classifier.is_internal("https://sub.example.com/page"));
    }

    #[test]
    fn test_without_site_url_only_hostless_links_are_internal() {
        let classifier = LinkClassifier::default();
        assert!(classifier.is_internal("/docs"));
        assert!(!classifier.is_internal("https://example.com/docs"));
    }

    #[test]
    fn test_bare_host_site_url() {
        let classifier = LinkClassifier::new(Some("example.org"));
        assert_eq!(classifier.site_host(), Some("example.org"));
        assert!(classifier.is_internal("https://example.org/x"));
    }

    #[test]
    fn test_mailto_is_internal() {
        let classifier = LinkClassifier::new(Some("https://example.com"));
        assert!(classifier.is_internal("mailto:team@example.com"));
    }
}
