//! CRLF / header injection indicators.
//!
//! Only an embedded CRLF (raw or percent-encoded) immediately followed by a
//! syntactically valid extra header line and a closing CRLF is flagged.
//! This narrow shape keeps ordinary multi-line text from matching.

use regex::Regex;
use std::sync::LazyLock;

use super::{Category, HitCode, Scanner};

static HEADER_INJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\r\n|%0d%0a)[ \t]*[A-Za-z0-9-]{2,}\s*:\s*[^\r\n]+(?:\r\n|%0d%0a)")
        .expect("crlf pattern is valid")
});

/// Detects CRLF/header injection attempts.
pub struct CrlfScanner;

impl Scanner for CrlfScanner {
    fn category(&self) -> Category {
        Category::Crlf
    }

    fn scan(&self, normalized: &str) -> Vec<HitCode> {
        if HEADER_INJECT.is_match(normalized) {
            vec!["HEADER_INJECT"]
        } else {
            Vec::new()
        }
    }
}
