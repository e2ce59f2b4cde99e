//! Category Scanners
//!
//! One scanner per attack category. Every scanner is a stateless pure
//! function over normalized text: it never fails, holds no mutable state,
//! and is safe to invoke concurrently. Regexes are compiled once into
//! `LazyLock` tables.

pub mod command;
pub mod crlf;
pub mod ldap;
pub mod nosql;
pub mod serialization;
pub mod sqli;
pub mod ssrf;
pub mod traversal;
pub mod xss;
pub mod xxe;

pub use command::CmdInjectionScanner;
pub use crlf::CrlfScanner;
pub use ldap::LdapScanner;
pub use nosql::NoSqlScanner;
pub use serialization::SerializationScanner;
pub use sqli::SqliScanner;
pub use ssrf::SsrfScanner;
pub use traversal::PathTraversalScanner;
pub use xss::XssScanner;
pub use xxe::XxeScanner;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A short machine-readable tag identifying which sub-pattern matched.
pub type HitCode = &'static str;

/// The fixed attack classes this engine detects.
///
/// Declaration order is the canonical scanner iteration order, so ordered
/// maps keyed by `Category` iterate in the same order the scanners run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Xss,
    Sqli,
    CmdInjection,
    PathTraversal,
    Crlf,
    Ssrf,
    Xxe,
    Nosql,
    Ldap,
    Serialization,
}

impl Category {
    /// Canonical upper-case name, as used in hit maps and weight overrides.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Xss => "XSS",
            Category::Sqli => "SQLI",
            Category::CmdInjection => "CMD_INJECTION",
            Category::PathTraversal => "PATH_TRAVERSAL",
            Category::Crlf => "CRLF",
            Category::Ssrf => "SSRF",
            Category::Xxe => "XXE",
            Category::Nosql => "NOSQL",
            Category::Ldap => "LDAP",
            Category::Serialization => "SERIALIZATION",
        }
    }

    /// All categories in canonical scanner order.
    pub fn all() -> [Category; 10] {
        [
            Category::Xss,
            Category::Sqli,
            Category::CmdInjection,
            Category::PathTraversal,
            Category::Crlf,
            Category::Ssrf,
            Category::Xxe,
            Category::Nosql,
            Category::Ldap,
            Category::Serialization,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "XSS" => Ok(Category::Xss),
            "SQLI" => Ok(Category::Sqli),
            "CMD_INJECTION" => Ok(Category::CmdInjection),
            "PATH_TRAVERSAL" => Ok(Category::PathTraversal),
            "CRLF" => Ok(Category::Crlf),
            "SSRF" => Ok(Category::Ssrf),
            "XXE" => Ok(Category::Xxe),
            "NOSQL" => Ok(Category::Nosql),
            "LDAP" => Ok(Category::Ldap),
            "SERIALIZATION" => Ok(Category::Serialization),
            other => anyhow::bail!("unknown category: {other}"),
        }
    }
}

/// A single-category scanner.
///
/// Implementations must be side-effect-free and must not panic for any
/// input, including malformed encodings, null bytes, or very large strings.
pub trait Scanner: Send + Sync {
    /// The category this scanner reports under.
    fn category(&self) -> Category;

    /// Scan normalized input and return hit codes (possibly empty).
    fn scan(&self, normalized: &str) -> Vec<HitCode>;
}

/// The standard ten scanners, in canonical order.
pub fn default_set() -> Vec<Box<dyn Scanner>> {
    vec![
        Box::new(XssScanner),
        Box::new(SqliScanner),
        Box::new(CmdInjectionScanner),
        Box::new(PathTraversalScanner),
        Box::new(CrlfScanner),
        Box::new(SsrfScanner),
        Box::new(XxeScanner),
        Box::new(NoSqlScanner),
        Box::new(LdapScanner),
        Box::new(SerializationScanner),
    ]
}
