//! LDAP filter injection indicators.

use regex::Regex;
use std::sync::LazyLock;

use super::{Category, HitCode, Scanner};

static PATTERNS: LazyLock<Vec<(Regex, HitCode)>> = LazyLock::new(|| {
    [
        (r"\(\s*\|(?:\s*\([^)]+\)\s*)+\)", "LDAP_OR"),
        (r"(?i)\(\s*[a-z0-9_-]+\s*=\s*\*\s*\)", "LDAP_WILDCARD"),
        (r"\x00", "LDAP_NULL_BYTE"),
    ]
    .into_iter()
    .map(|(re, code)| (Regex::new(re).expect("ldap pattern is valid"), code))
    .collect()
});

/// Detects LDAP filter injection artifacts.
pub struct LdapScanner;

impl Scanner for LdapScanner {
    fn category(&self) -> Category {
        Category::Ldap
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
    fn test_or_filter_group() {
        let hits = LdapScanner.scan("(|(uid=admin)(uid=*))");
        assert!(hits.contains(&"LDAP_OR"));
        assert!(hits.contains(&"LDAP_WILDCARD"));
    }

    #[test]
    fn test_wildcard_filter() {
        assert_eq!(LdapScanner.scan("(objectClass=*)"), vec!["LDAP_WILDCARD"]);
    }

    #[test]
    fn test_null_byte() {
        assert!(LdapScanner.scan("admin\0").contains(&"LDAP_NULL_BYTE"));
    }

    #[test]
    fn test_parenthesized_prose_clean() {
        assert!(LdapScanner.scan("Our brand: OnyxStyle (onsale=10%)").is_empty());
        assert!(LdapScanner.scan("see note (a) and (b)").is_empty());
    }
}
