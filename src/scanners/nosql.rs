//! NoSQL (Mongo-style) injection indicators.

use regex::Regex;
use std::sync::LazyLock;

use super::{Category, HitCode, Scanner};

static PATTERNS: LazyLock<Vec<(Regex, HitCode)>> = LazyLock::new(|| {
    [
        (
            r#"\{\s*"(?:\$where|\$ne|\$gt|\$lt|\$regex)"\s*:\s*[^}]+\}"#,
            "MONGO_OPERATOR_JSON",
        ),
        (
            r"(?i)(?:^|[^a-z0-9_])\$(?:where|ne|gt|lt|regex)(?:$|[^a-z0-9_])",
            "MONGO_OPERATOR",
        ),
        (r"(?i)\bdb\.[a-z0-9_]+\.[a-z0-9_]+\s*\(", "MONGO_DB_CALL"),
    ]
    .into_iter()
    .map(|(re, code)| (Regex::new(re).expect("nosql pattern is valid"), code))
    .collect()
});

/// Detects Mongo-like operator usage in input.
pub struct NoSqlScanner;

impl Scanner for NoSqlScanner {
    fn category(&self) -> Category {
        Category::Nosql
    }

    fn scan(&self, normalized: &str) -> Vec<HitCode> {
        PATTERNS
            .iter()
            .filter(|(re, _)| re.is_match(normalized))
            .map(|(_, code)| *code)
            .collect()
    }
}
