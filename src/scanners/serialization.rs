//! Unsafe object-serialization payload indicators.
//!
//! Matches the structural shape of length-prefixed serialization records
//! (array/string/object markers) as a proxy for deserialization attacks.

use regex::Regex;
use std::sync::LazyLock;

use super::{Category, HitCode, Scanner};

static PATTERNS: LazyLock<Vec<(Regex, HitCode)>> = LazyLock::new(|| {
    [
        (r"(?:^|[^A-Za-z0-9_])a:\d+:\{[^}]*\}", "SERIAL_ARRAY"),
        (r#"(?:^|[^A-Za-z0-9_])s:\d+:"[^"]*";"#, "SERIAL_STRING"),
        (
            r#"(?:^|[^A-Za-z0-9_])O:\d+:"[A-Za-z0-9_\\]+":\d+:\{[^}]*\}"#,
            "SERIAL_OBJECT",
        ),
    ]
    .into_iter()
    .map(|(re, code)| (Regex::new(re).expect("serialization pattern is valid"), code))
    .collect()
});

/// Detects length-prefixed serialization records.
pub struct SerializationScanner;

impl Scanner for SerializationScanner {
    fn category(&self) -> Category {
        Category::Serialization
    }

    fn scan(&self, normalized: &str) -> Vec<HitCode> {
        PATTERNS
            .iter()
            .filter(|(re, _)| re.is_match(normalized))
            .map(|(_, code)| *code)
            .collect()
    }
}
