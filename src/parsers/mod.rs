pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use crate::filter::LinkClassifier;
use serde::{Deserialize, Serialize};

/// A heading found in the content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingInfo {
    /// 1 through 6
    pub level: u8,
    /// Inner text with tags stripped
    pub text: String,
}

/// An anchor found in the content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInfo {
    pub url: String,
    pub anchor_text: String,
    pub is_internal: bool,
    pub is_nofollow: bool,
}

/// An image found in the content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub has_alt: bool,
    pub alt_text: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Everything the evaluators need to know about a piece of content,
/// computed once per analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Content with markup, shortcodes and entities removed
    pub plain_text: String,
    pub word_count: usize,
    /// Number of sentence terminators; zero when the text has none
    pub sentence_count: usize,
    pub syllable_count: usize,
    /// Non-empty lines of plain text, used for length checks
    pub paragraphs: Vec<String>,
    /// Sentence texts, used for length checks
    pub sentences: Vec<String>,
    /// `<p>...</p>` pairs in the raw markup, used for structure checks
    pub paragraph_tag_count: usize,
    pub has_lists: bool,
    pub headings: Vec<HeadingInfo>,
    pub links: Vec<LinkInfo>,
    pub images: Vec<ImageInfo>,
}

impl MetricSnapshot {
    /// Extracts text metrics and markup structure from raw post content.
    ///
    /// Counting works on the stripped text; headings, links, images and
    /// paragraph tags come from the original markup.
    pub fn extract(content: &str, classifier: &LinkClassifier) -> Self {
        let plain_text = html::strip_markup(content);
        let doc = html::parse_fragment(content);

        let snapshot = Self {
            word_count: text::word_count(&plain_text),
            sentence_count: text::sentence_count(&plain_text),
            syllable_count: text::total_syllables(&plain_text),
            paragraphs: text::split_into_paragraphs(&plain_text),
            sentences: text::split_into_sentences(&plain_text),
            paragraph_tag_count: html::count_paragraph_tags(content),
            has_lists: html::has_lists(content),
            headings: html::extract_headings(&doc),
            links: html::extract_links(&doc, classifier),
            images: html::extract_images(&doc),
            plain_text,
        };

        ::log::debug!(
            "Extracted {} words, {} sentences, {} paragraphs, {} headings, {} links, {} images",
            snapshot.word_count,
            snapshot.sentence_count,
            snapshot.paragraphs.len(),
            snapshot.headings.len(),
            snapshot.links.len(),
            snapshot.images.len()
        );

        snapshot
    }

    pub fn words_per_sentence(&self) -> f64 {
        crate::utils::safe_ratio(self.word_count as f64, self.sentence_count as f64)
    }

    pub fn syllables_per_word(&self) -> f64 {
        crate::utils::safe_ratio(self.syllable_count as f64, self.word_count as f64)
    }

    /// First paragraph with any text in it
    pub fn first_paragraph(&self) -> Option<&str> {
        self.paragraphs.first().map(String::as_str)
    }

    pub fn internal_link_count(&self) -> usize {
        self.links.iter().filter(|l| l.is_internal).count()
    }

    pub fn external_link_count(&self) -> usize {
        self.links.iter().filter(|l| !l.is_internal).count()
    }
}
