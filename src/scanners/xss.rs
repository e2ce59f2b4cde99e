//! Cross-Site Scripting indicators.
//!
//! Flags dangerous tags, script-capable URI schemes, CSS expressions and
//! inline event-handler/style attributes. A generic "any HTML tag" signal
//! fires alongside the specific ones so callers can distinguish severity.

use regex::Regex;
use std::sync::LazyLock;

use super::{Category, HitCode, Scanner};

static PATTERNS: LazyLock<Vec<(Regex, HitCode)>> = LazyLock::new(|| {
    [
        (r"(?i)<\s*script\b[^>]*>", "TAG_SCRIPT"),
        (r"(?i)<\s*iframe\b[^>]*>", "TAG_IFRAME"),
        (r"(?i)<\s*svg\b[^>]*>", "TAG_SVG"),
        (r"(?i)<\s*link\b[^>]*>", "TAG_LINK"),
        (r"(?i)<\s*base\b[^>]*>", "TAG_BASE"),
        (r#"(?i)(?:^|[("'\s=])javascript\s*:"#, "JS_URI"),
        (r"(?i)(?:^|[^a-z])expression\s*\(", "CSS_EXPRESSION"),
        (r#"(?i)(?:^|[("'\s=])data\s*:\s*text/html\b"#, "DATA_HTML"),
        (r"(?i)<\s*img\b[^>]*\bon[a-z0-9_-]+\s*=", "IMG_EVENT"),
        (r"(?i)\bjavascript:", "JAVASCRIPT_PROTOCOL"),
        (r"(?i)\bdata:\s*text/html\b", "DATA_HTML_PROTOCOL"),
        (r"(?i)<\s*/?\s*[a-z][^>]*>", "HTML_TAG"),
        // Entity evasion: spaced-out numeric entities that survived decoding.
        (r"(?i)&\s*#\s*x?0*\s*6[0-9a-f]+\s*;", "HTML_HEX_ENTITY"),
        (
            r#"(?i)<[a-z][^>]*\son[a-z0-9_-]+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#,
            "EVENT_HANDLER_ATTR",
        ),
        (
            r#"(?i)<[a-z][^>]*\sstyle\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#,
            "INLINE_STYLE",
        ),
    ]
    .into_iter()
    .map(|(re, code)| (Regex::new(re).expect("xss pattern is valid"), code))
    .collect()
});

/// Detects common indicators of Cross-Site Scripting.
pub struct XssScanner;

impl Scanner for XssScanner {
    fn category(&self) -> Category {
        Category::Xss
    }

    fn scan(&self, normalized: &str) -> Vec<HitCode> {
        PATTERNS
            .iter()
            .filter(|(re, _)| re.is_match(normalized))
            .map(|(_, code)| *code)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag() {
        let hits = XssScanner.scan("<script>alert(1)</script>");
        assert!(hits.contains(&"TAG_SCRIPT"));
        assert!(hits.contains(&"HTML_TAG"));
    }

    #[test]
    fn test_img_event_handler() {
        let hits = XssScanner.scan("<img src=x onerror=alert(1)>");
        assert!(hits.contains(&"IMG_EVENT"));
        assert!(hits.contains(&"EVENT_HANDLER_ATTR"));
    }

    #[test]
    fn test_javascript_uri() {
        let hits = XssScanner.scan(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(hits.contains(&"JS_URI"));
        assert!(hits.contains(&"JAVASCRIPT_PROTOCOL"));
    }

    #[test]
    fn test_css_expression_and_inline_style() {
        let hits = XssScanner.scan(r#"<div style="x:expression(alert(1))">x</div>"#);
        assert!(hits.contains(&"CSS_EXPRESSION"));
        assert!(hits.contains(&"INLINE_STYLE"));
    }

    #[test]
    fn test_svg_onload() {
        let hits = XssScanner.scan("<svg onload=alert(1)></svg>");
        assert!(hits.contains(&"TAG_SVG"));
        assert!(hits.contains(&"EVENT_HANDLER_ATTR"));
    }

    #[test]
    fn test_data_text_html() {
        let hits = XssScanner.scan("data:text/html;base64,PHNjcmlwdD4=");
        assert!(hits.contains(&"DATA_HTML"));
        assert!(hits.contains(&"DATA_HTML_PROTOCOL"));
    }

    #[test]
    fn test_plain_text_clean() {
        assert!(XssScanner.scan("Hello world & have a nice day!").is_empty());
        assert!(XssScanner.scan("price < 100").is_empty());
    }

    #[test]
    fn test_attribute_like_prose_clean() {
        // No tag context, so onsale= must not look like an event handler.
        assert!(XssScanner.scan("Our brand: OnyxStyle (onsale=10%)").is_empty());
    }
}
