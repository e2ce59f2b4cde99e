//! XML External Entity indicators.

use regex::Regex;
use std::sync::LazyLock;

use super::{Category, HitCode, Scanner};

static PATTERNS: LazyLock<Vec<(Regex, HitCode)>> = LazyLock::new(|| {
    [
        (r"(?i)<!doctype\s+[a-z0-9:_-]+", "DOCTYPE"),
        (r"(?i)<!entity\s+[a-z0-9:_-]+\s+(?:system|public)\b", "ENTITY"),
        (r"(?i)\bsystem\b[^>]{0,100}\b(?:https?|file|ftp):", "SYSTEM_EXTERNAL"),
    ]
    .into_iter()
    .map(|(re, code)| (Regex::new(re).expect("xxe pattern is valid"), code))
    .collect()
});

/// Detects XML External Entity (XXE) indicators.
pub struct XxeScanner;

impl Scanner for XxeScanner {
    fn category(&self) -> Category {
        Category::Xxe
    }

    fn scan(&self, normalized: &str) -> Vec<HitCode> {
        PATTERNS
            .iter()
            .filter(|(re, _)| re.is_match(normalized))
            .map(|(_, code)| *code)
            .collect()
    }
}
