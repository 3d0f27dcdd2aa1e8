use crate::filter::LinkClassifier;
use crate::parsers::{html, text};

#[cfg(test)]
mod strip_tests {
    use super::*;

    #[test]
    fn test_block_tags_become_line_breaks() {
        assert_eq!(html::strip_markup("<p>Hello</p><p>World</p>"), "Hello\nWorld\n");
        assert_eq!(html::strip_markup("one<br>two<br />three"), "one\ntwo\nthree");
    }

    #[test]
    fn test_inline_tags_vanish() {
        assert_eq!(
            html::strip_markup("Some <strong>bold</strong> and <a href=\"/\">linked</a> text"),
            "Some bold and linked text"
        );
    }

    #[test]
    fn test_shortcodes_removed() {
        let input = "[caption id=\"attachment_7\"]<img src=\"a.png\">Caption text[/caption]";
        assert_eq!(html::strip_markup(input), "Caption text");
        assert_eq!(html::strip_markup("Before [gallery] after"), "Before  after");
        assert_eq!(
            html::strip_markup("[embed]https://youtu.be/x[/embed] and [video src=\"a.mp4\" /]"),
            "https://youtu.be/x and "
        );
    }

    #[test]
    fn test_bracketed_prose_kept() {
        assert_eq!(
            html::strip_markup("wrote [sic] this and [citation needed] there"),
            "wrote [sic] this and [citation needed] there"
        );
    }

    #[test]
    fn test_bare_less_than_is_text() {
        let stripped = html::strip_markup(
            "<p>If a < b then c is small.</p><p>Next para here.</p><p>Third one.</p>",
        );
        assert_eq!(stripped, "If a < b then c is small.\nNext para here.\nThird one.\n");
        assert_eq!(text::word_count(&stripped), 12);
        assert_eq!(text::sentence_count(&stripped), 3);
        assert_eq!(html::strip_markup("x <= y and y > z"), "x <= y and y > z");
    }

    #[test]
    fn test_table_and_section_tags_break_lines() {
        assert_eq!(html::strip_markup("<td>a</td><td>b</td>"), "a\nb\n");
        assert_eq!(html::strip_markup("<th>Name</th><th>Age</th>"), "Name\nAge\n");
        assert_eq!(
            html::strip_markup("<section>One</section><article>Two</article>"),
            "One\nTwo\n"
        );
        assert_eq!(html::strip_markup("<ul><li>x</li></ul>tail"), "x\n\ntail");
    }

    #[test]
    fn test_scripts_styles_and_comments_removed() {
        assert_eq!(
            html::strip_markup("<p>Keep</p><script>var x = 1;</script><style>p{}</style>"),
            "Keep\n"
        );
        assert_eq!(
            html::strip_markup("<!-- wp:paragraph --><p>Text</p><!-- /wp:paragraph -->"),
            "Text\n"
        );
    }

    #[test]
    fn test_entities() {
        assert_eq!(html::strip_markup("Tom&nbsp;&amp;&nbsp;Jerry"), "Tom  Jerry");
    }
}

#[cfg(test)]
mod structure_tests {
    use super::*;

    #[test]
    fn test_count_paragraph_tags() {
        let input = "<p>a</p>\n<p class=\"lead\">b\nc</p><pre>code</pre><P>d</P>";
        assert_eq!(html::count_paragraph_tags(input), 3);
        assert_eq!(html::count_paragraph_tags("no tags"), 0);
    }

    #[test]
    fn test_has_lists() {
        assert!(html::has_lists("<UL><li>x</li></UL>"));
        assert!(html::has_lists("<ol start=\"3\"><li>x</li></ol>"));
        assert!(!html::has_lists("<p>ulcer</p>"));
    }

    #[test]
    fn test_extract_headings_in_document_order() {
        let doc = html::parse_fragment(
            "<h2>Intro <em>part</em></h2><p>x</p><h4>Deep</h4><h3>Back</h3>",
        );
        let headings = html::extract_headings(&doc);
        let levels: Vec<u8> = headings.iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![2, 4, 3]);
        assert_eq!(headings[0].text, "Intro part");
        assert_eq!(headings[1].text, "Deep");
    }

    #[test]
    fn test_extract_links() {
        let classifier = LinkClassifier::new(Some("https://example.com"));
        let doc = html::parse_fragment(
            "<a href=\"/about\">About us</a>\
             <a href=\"https://other.com\" rel=\"noopener NoFollow\">Other</a>\
             <a href=\"https://example.com/x\">  </a>\
             <a name=\"anchor-only\">skip</a>",
        );
        let links = html::extract_links(&doc, &classifier);
        assert_eq!(links.len(), 3);

        assert_eq!(links[0].url, "/about");
        assert_eq!(links[0].anchor_text, "About us");
        assert!(links[0].is_internal);
        assert!(!links[0].is_nofollow);

        assert!(!links[1].is_internal);
        assert!(links[1].is_nofollow);

        assert!(links[2].is_internal);
        assert_eq!(links[2].anchor_text, "");
    }

    #[test]
    fn test_extract_images() {
        let doc = html::parse_fragment(
            "<img src=\"a.png\" alt=\"Red shoes\" width=\"800px\" height=\"600\">\
             <img src=\"b.png\" alt=\"  \" width=\"2000\">\
             <img src=\"c.png\">",
        );
        let images = html::extract_images(&doc);
        assert_eq!(images.len(), 3);

        assert!(images[0].has_alt);
        assert_eq!(images[0].alt_text, "Red shoes");
        assert_eq!(images[0].width, Some(800));
        assert_eq!(images[0].height, Some(600));

        assert!(!images[1].has_alt);
        assert_eq!(images[1].width, Some(2000));
        assert_eq!(images[1].height, None);

        assert!(!images[2].has_alt);
        assert_eq!(images[2].width, None);
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(html::parse_dimension(" 1200 "), Some(1200));
        assert_eq!(html::parse_dimension("640px"), Some(640));
        assert_eq!(html::parse_dimension("auto"), None);
        assert_eq!(html::parse_dimension(""), None);
    }
}
