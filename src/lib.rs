//! Threatscan Library
//!
//! A deterministic, signature-based threat-detection engine: given an
//! arbitrary untrusted string (a request parameter, header, cookie, or
//! body fragment), it decides whether the string carries indicators of
//! common injection classes and produces a weighted suspicion score plus
//! the specific indicators matched.
//!
//! # Features
//!
//! - **Ten attack categories**: XSS, SQLi, command injection, path
//!   traversal, CRLF injection, SSRF, XXE, NoSQL, LDAP, serialization
//! - **Anomaly scoring**: per-category weights and a tunable threshold
//!   instead of binary match/no-match
//! - **Encoding-evasion resistance**: bounded fixed-point entity and
//!   percent decoding before matching
//! - **Low false positives**: patterns scoped so prose mentions of
//!   sensitive terms do not trigger hits
//!
//! # Example
//!
//! ```
//! use threatscan::{ScoringPolicy, ThreatDetector};
//!
//! let policy = ScoringPolicy::with_defaults().with_threshold_level("LOW");
//! let detector = ThreatDetector::with_defaults(policy);
//!
//! let result = detector.scan_str("<script>alert(1)</script>");
//! assert!(result.suspect);
//!
//! let result = detector.scan_str("Hello world & have a nice day!");
//! assert!(!result.suspect);
//! ```

pub mod config;
pub mod detection;
pub mod engine;
pub mod normalize;
pub mod request;
pub mod scanners;
pub mod scoring;

// Re-exports for convenience
pub use config::{DetectorConfig, HeaderScan, ThresholdSetting};
pub use detection::ThreatResult;
pub use engine::ThreatDetector;
pub use normalize::{normalize, MAX_SCAN_LEN};
pub use request::ScanAccumulator;
pub use scanners::{Category, HitCode, Scanner};
pub use scoring::{threshold, ScoringPolicy};
