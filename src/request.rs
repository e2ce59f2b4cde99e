//! Request-Level Aggregation
//!
//! Integration layers extract many scalar values from one request (query
//! parameters, cookie values, body fields) and need a single verdict.
//! Scores merge additively and hit codes merge by per-category set union,
//! so the combined result is independent of leaf visit order.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::detection::ThreatResult;
use crate::engine::ThreatDetector;
use crate::scanners::{Category, HitCode};

/// Accumulates per-leaf scan results into one request-level verdict.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScanAccumulator {
    score: f64,
    hits: BTreeMap<Category, Vec<HitCode>>,
}

impl ScanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scan result in: score adds, codes union per category.
    pub fn absorb(&mut self, result: &ThreatResult) {
        self.score += result.score;
        for (category, codes) in &result.hits {
            let merged = self.hits.entry(*category).or_default();
            for code in codes {
                if !merged.contains(code) {
                    merged.push(code);
                }
            }
        }
    }

    /// Scan every scalar leaf of a nested value tree.
    ///
    /// Strings are scanned as-is; numbers and booleans are scanned in their
    /// string form. Nulls and container nodes themselves are skipped.
    pub fn scan_tree(&mut self, detector: &ThreatDetector, value: &Value) {
        match value {
            Value::String(s) => self.absorb(&detector.scan_str(s)),
            Value::Number(n) => self.absorb(&detector.scan_str(&n.to_string())),
            Value::Bool(b) => self.absorb(&detector.scan_str(if *b { "true" } else { "false" })),
            Value::Array(items) => {
                for item in items {
                    self.scan_tree(detector, item);
                }
            }
            Value::Object(map) => {
                for item in map.values() {
                    self.scan_tree(detector, item);
                }
            }
            Value::Null => {}
        }
    }

    /// Accumulated score so far.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Accumulated hit map so far.
    pub fn hits(&self) -> &BTreeMap<Category, Vec<HitCode>> {
        &self.hits
    }

    /// Apply the threshold decision rule to the accumulated score.
    pub fn suspect(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}
