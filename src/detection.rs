//! Scan Result Types

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::scanners::{Category, HitCode};

/// Immutable verdict produced by one scan call.
///
/// `hits` only ever contains categories with at least one code; codes
/// within a category are unique and keep the order the sub-patterns are
/// declared in. `norm` is the normalized text that was actually matched
/// against, useful for diagnostics and logging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreatResult {
    /// Whether `score` meets or exceeds the policy threshold.
    pub suspect: bool,
    /// Weighted sum of hit counts across categories.
    pub score: f64,
    /// Categories with at least one matched sub-pattern.
    pub hits: BTreeMap<Category, Vec<HitCode>>,
    /// The normalized input the scanners saw.
    pub norm: String,
}

impl ThreatResult {
    /// Export as a plain key-value structure, handy for logs.
    pub fn to_map(&self) -> Value {
        let hits: serde_json::Map<String, Value> = self
            .hits
            .iter()
            .map(|(cat, codes)| (cat.as_str().to_string(), json!(codes)))
            .collect();
        json!({
            "suspect": self.suspect,
            "score": self.score,
            "hits": hits,
            "norm": self.norm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_map_shape() {
        let result = ThreatResult {
            suspect: true,
            score: 3.0,
            hits: BTreeMap::from([(Category::Xss, vec!["TAG_SCRIPT", "HTML_TAG"])]),
            norm: "<script>".to_string(),
        };
        let map = result.to_map();
        assert_eq!(map["suspect"], json!(true));
        assert_eq!(map["score"], json!(3.0));
        assert_eq!(map["hits"]["XSS"], json!(["TAG_SCRIPT", "HTML_TAG"]));
        assert_eq!(map["norm"], json!("<script>"));
    }

    #[test]
    fn test_serialize_uses_category_names() {
        let result = ThreatResult {
            suspect: false,
            score: 0.0,
            hits: BTreeMap::from([(Category::CmdInjection, vec!["SUBSHELL"])]),
            norm: String::new(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"CMD_INJECTION\""));
    }
}
