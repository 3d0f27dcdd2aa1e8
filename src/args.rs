use clap::{Parser, ValueEnum};
use content_audit::AnalysisInput;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "content-audit")]
#[command(about = "On-page SEO content analysis: length, keyword, readability, structure, links and images")]
#[command(version)]
pub struct Args {
    /// File with the post content (raw HTML), or a JSON post with --post-json
    pub file: PathBuf,

    /// Treat FILE as a JSON post ({"content", "title", "excerpt", "focus_keyword", "slug"})
    #[arg(long)]
    pub post_json: bool,

    /// Post title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Post excerpt
    #[arg(short, long)]
    pub excerpt: Option<String>,

    /// Focus keyword
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// URL slug (derived from the title if omitted)
    #[arg(long)]
    pub slug: Option<String>,

    /// Site URL used to tell internal links from external ones
    #[arg(long)]
    pub site_url: Option<String>,

    /// Path to an analysis settings JSON file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// `{success, data}` response envelope
    Json,
}

impl Args {
    /// Build the analysis input from FILE, with flags overriding its fields
    pub fn to_input(&self) -> Result<AnalysisInput, Box<dyn Error>> {
        let mut input = if self.post_json {
            AnalysisInput::from_file(&self.file)?
        } else {
            AnalysisInput::new(std::fs::read_to_string(&self.file)?, "")
        };

        if let Some(title) = &self.title {
            input.title = title.clone();
        }
        if let Some(excerpt) = &self.excerpt {
            input.excerpt = excerpt.clone();
        }
        if let Some(keyword) = &self.keyword {
            input.focus_keyword = Some(keyword.clone());
        }
        if let Some(slug) = &self.slug {
            input.slug = Some(slug.clone());
        }

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["content-audit", "post.html"]).unwrap();
        assert_eq!(args.file, PathBuf::from("post.html"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.post_json);
        assert!(args.keyword.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "content-audit",
            "post.json",
            "--post-json",
            "-k",
            "rust",
            "--title",
            "Why Rust",
            "--site-url",
            "https://example.com",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(args.post_json);
        assert_eq!(args.keyword.as_deref(), Some("rust"));
        assert_eq!(args.title.as_deref(), Some("Why Rust"));
        assert_eq!(args.site_url.as_deref(), Some("https://example.com"));
        assert_eq!(args.format, OutputFormat::Json);
    }
}
