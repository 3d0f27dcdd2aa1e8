/// Divide, treating a zero denominator as a zero ratio
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Convert a title into a URL slug
pub fn slugify(title: &str) -> String {
    // Lowercase ASCII, collapse every run of other characters into one hyphen
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Count non-overlapping, case-insensitive occurrences of `needle` in `haystack`
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    haystack.to_lowercase().matches(needle.as_str()).count()
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    count_occurrences(haystack, needle) > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_ratio() {
        assert_eq!(safe_ratio(10.0, 0.0), 0.0);
        assert_eq!(safe_ratio(10.0, 4.0), 2.5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(66.66666, 1), 66.7);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust   SEO tips  "), "rust-seo-tips");
        assert_eq!(slugify("Top 10 Tools"), "top-10-tools");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_count_occurrences() {
        assert_eq!(count_occurrences("SEO tips for seo. Seo!", "seo"), 3);
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("anything", "  "), 0);
        assert!(contains_ignore_case("Content Marketing 101", "content marketing"));
    }
}
