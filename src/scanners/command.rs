//! OS command injection indicators.
//!
//! Subshell syntax, shell control operators at statement boundaries,
//! well-known downloader/shell binaries as standalone tokens, dangerous
//! command idioms and redirection.

use regex::Regex;
use std::sync::LazyLock;

use super::{Category, HitCode, Scanner};

static PATTERNS: LazyLock<Vec<(Regex, HitCode)>> = LazyLock::new(|| {
    [
        (r"(?s)`[^`]*`|\$\([^)]*\)", "SUBSHELL"),
        (r"(?:^|[^\w])(?:\|\||&&|;)(?:\s|$)", "SHELL_OP"),
        (
            r"(?i)(?:^|[^\w.-])(?:wget|curl|nc|bash|sh|powershell|cmd|tftp)(?:\.exe)?(?:$|[^\w.-])",
            "SHELL_NAME",
        ),
        (
            r"(?i)(?:^|[^\w-])(?:rm\s+-rf|chmod\s+\d{3}|chown\s+\w+:\w+)(?:$|[^\w-])",
            "DANGEROUS_CMD",
        ),
        (r"\s>>?\s*[^\s><|;&]+", "SHELL_REDIRECT"),
    ]
    .into_iter()
    .map(|(re, code)| (Regex::new(re).expect("command pattern is valid"), code))
    .collect()
});

/// Detects shell/command injection indicators.
pub struct CmdInjectionScanner;

impl Scanner for CmdInjectionScanner {
    fn category(&self) -> Category {
        Category::CmdInjection
    }

    fn scan(&self, normalized: &str) -> Vec<HitCode> {
        PATTERNS
            .iter()
            .filter(|(re, _)| re.is_match(normalized))
            .map(|(_, code)| *code)
            .collect()
    }
}
