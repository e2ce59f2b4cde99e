//! SQL injection indicators.
//!
//! Boolean tautologies, UNION SELECT probes, time-delay primitives,
//! metadata probing and file primitives. The UNION SELECT pattern uses a
//! bounded lookahead window to a terminator (FROM, `(` or `,`) so that
//! ordinary prose containing "union" and "select" does not match, and
//! INFORMATION_SCHEMA matches only as the underscored token.

use regex::Regex;
use std::sync::LazyLock;

use super::{Category, HitCode, Scanner};

static PATTERNS: LazyLock<Vec<(Regex, HitCode)>> = LazyLock::new(|| {
    [
        (
            r#"(?i)['"]\s*or\s*['"]?\s*1\s*['"]?\s*=\s*['"]?\s*1\s*['"]?"#,
            "BOOLEAN_OR_1EQ1",
        ),
        (
            r"(?is)\bunion\b(?:\s|/\*.*?\*/)+\bselect\b(?:\s|/\*.*?\*/)+.{1,80}?(?:\bfrom\b|\(|,)",
            "UNION_SELECT",
        ),
        (r"(?i)\bsleep\s*\(\s*\d+\s*\)", "TIME_DELAY_SLEEP"),
        (r"(?i)\bbenchmark\s*\(\s*\d+\s*,", "TIME_DELAY_BENCHMARK"),
        (r"(?i)\binformation_schema\b", "INFO_SCHEMA"),
        (r"(?i)\bload_file\s*\(", "LOAD_FILE"),
        (r"(?i)\binto\s+outfile\b", "INTO_OUTFILE"),
        (r"(?i)\bxp_cmdshell\b", "MSSQL_XP_CMDSHELL"),
        (r"(?i)\border\s+by\s+\d{3,}\b", "ORDER_BY_LARGE"),
    ]
    .into_iter()
    .map(|(re, code)| (Regex::new(re).expect("sqli pattern is valid"), code))
    .collect()
});

/// Detects common SQL injection patterns.
pub struct SqliScanner;

impl Scanner for SqliScanner {
    fn category(&self) -> Category {
        Category::Sqli
    }

    fn scan(&self, normalized: &str) -> Vec<HitCode> {
        PATTERNS
            .iter()
            .filter(|(re, _)| re.is_match(normalized))
            .map(|(_, code)| *code)
            .collect()
    }
}
