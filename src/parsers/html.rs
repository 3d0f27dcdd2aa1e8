use crate::filter::LinkClassifier;
use crate::parsers::{HeadingInfo, ImageInfo, LinkInfo};
use crate::parsers::text::normalize_whitespace_in_segment;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment regex"));

static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>")
        .expect("valid script regex")
});

/// WordPress core shortcodes: `[gallery ids="1,2"]`, `[/caption]`.
/// Other bracketed prose such as `[sic]` is left alone.
static SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[/?(?:caption|wp_caption|gallery|audio|video|embed|playlist)(?:\s[^\]]*)?/?\]",
    )
    .expect("valid shortcode regex")
});

/// Closing block tags and line breaks end a line of plain text
static BLOCK_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(?:p|h[1-6]|li|ul|ol|div|blockquote|section|article|table|tr|td|th)\s*>|<br\s*/?>")
        .expect("valid block regex")
});

/// A tag opens with a name, `/`, `!` or `?`; a bare `<` in prose is text
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z/!?][^>]*>").expect("valid tag regex"));

static NBSP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)&nbsp;|&#160;|&#xa0;").expect("valid nbsp regex"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:[A-Za-z]+|#\d+|#[xX][0-9A-Fa-f]+);").expect("valid entity regex")
});

static PARAGRAPH_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<p(?:\s[^>]*)?>.*?</p\s*>").expect("valid paragraph regex")
});

static LIST_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:ul|ol)(?:\s[^>]*)?>").expect("valid list regex"));

/// Strips comments, scripts, shortcodes and tags, leaving plain text.
///
/// Closing block tags become newlines so that adjacent blocks stay separate
/// words and separate paragraphs.
pub fn strip_markup(html: &str) -> String {
    let text = COMMENT.replace_all(html, "");
    let text = SCRIPT_OR_STYLE.replace_all(&text, "");
    let text = SHORTCODE.replace_all(&text, "");
    let text = BLOCK_BREAK.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, "");
    let text = NBSP.replace_all(&text, " ");
    ENTITY.replace_all(&text, "").into_owned()
}

/// Counts `<p>...</p>` pairs in the raw markup
pub fn count_paragraph_tags(html: &str) -> usize {
    PARAGRAPH_TAG.find_iter(html).count()
}

/// Whether the markup contains an ordered or unordered list
pub fn has_lists(html: &str) -> bool {
    LIST_TAG.is_match(html)
}

/// Parses post content, which is an HTML fragment rather than a full document
pub fn parse_fragment(html: &str) -> Html {
    Html::parse_fragment(html)
}

/// Extracts `<h1>`..`<h6>` elements in document order
pub fn extract_headings(doc: &Html) -> Vec<HeadingInfo> {
    let selector = Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid selector");
    doc.select(&selector)
        .filter_map(|e| {
            let level = e.value().name().strip_prefix('h')?.parse::<u8>().ok()?;
            Some(HeadingInfo {
                level,
                text: element_text(&e),
            })
        })
        .collect()
}

/// Extracts anchors with an `href`, classifying each against the site host
pub fn extract_links(doc: &Html, classifier: &LinkClassifier) -> Vec<LinkInfo> {
    let selector = Selector::parse("a[href]").expect("valid selector");
    let links = doc
        .select(&selector)
        .filter_map(|e| {
            let url = e.value().attr("href")?.trim().to_string();
            let is_nofollow = e
                .value()
                .attr("rel")
                .map(|rel| {
                    rel.split_whitespace()
                        .any(|token| token.eq_ignore_ascii_case("nofollow"))
                })
                .unwrap_or(false);
            Some(LinkInfo {
                is_internal: classifier.is_internal(&url),
                anchor_text: element_text(&e),
                url,
                is_nofollow,
            })
        })
        .collect::<Vec<_>>();

    ::log::debug!("HTML parser found {} links", links.len());
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).map(|l| l.url.as_str()).collect::<Vec<_>>()
        );
    }

    links
}

/// Extracts `<img>` elements with their alt text and declared dimensions
pub fn extract_images(doc: &Html) -> Vec<ImageInfo> {
    let selector = Selector::parse("img").expect("valid selector");
    doc.select(&selector)
        .map(|e| {
            let alt_text = e.value().attr("alt").map(str::trim).unwrap_or("").to_string();
            ImageInfo {
                has_alt: !alt_text.is_empty(),
                alt_text,
                width: e.value().attr("width").and_then(parse_dimension),
                height: e.value().attr("height").and_then(parse_dimension),
            }
        })
        .collect()
}

/// Parses the leading digits of a dimension attribute ("800", "800px")
pub fn parse_dimension(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Inner text of an element with whitespace collapsed
fn element_text(element: &ElementRef<'_>) -> String {
    normalize_whitespace_in_segment(&element.text().collect::<Vec<_>>().join(""))
}
