//! Path traversal and stream-wrapper indicators.

use regex::Regex;
use std::sync::LazyLock;

use super::{Category, HitCode, Scanner};

static PATTERNS: LazyLock<Vec<(Regex, HitCode)>> = LazyLock::new(|| {
    [
        (r"(?:^|[^\w])(?:\.\./|\.\.\\)", "DOT_DOT"),
        (r"(?i)%2e%2e%2f|%2e%2e/", "ENC_DOT_DOT"),
        (
            r#"(?i)(?:^|[("'\s=])(?:php|data|expect|zip|phar)://"#,
            "WRAPPER",
        ),
        (r#"(?i)(?:^|[("'\s=])file:///"#, "FILE_WRAPPER"),
    ]
    .into_iter()
    .map(|(re, code)| (Regex::new(re).expect("traversal pattern is valid"), code))
    .collect()
});

/// Detects path traversal and file wrapper indicators.
pub struct PathTraversalScanner;

impl Scanner for PathTraversalScanner {
    fn category(&self) -> Category {
        Category::PathTraversal
    }

    fn scan(&self, normalized: &str) -> Vec<HitCode> {
        PATTERNS
            .iter()
            .filter(|(re, _)| re.is_match(normalized))
            .map(|(_, code)| *code)
            .collect()
    }
}
