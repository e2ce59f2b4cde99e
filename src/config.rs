//! Detector Configuration
//!
//! The configuration surface consumed by HTTP-integration layers: which
//! request parts to scan, threshold/weight overrides, and how the verdict
//! is attached to the request. The engine itself never reads this; the
//! integration layer builds a [`ScoringPolicy`] from it and passes values
//! in explicitly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::scanners::Category;
use crate::scoring::{threshold, ScoringPolicy};

/// Threshold override: a named level or a literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThresholdSetting {
    /// `LOW` / `MEDIUM` / `HIGH`; unrecognized names resolve to `MEDIUM`.
    Level(String),
    /// Literal threshold value.
    Value(f64),
}

impl ThresholdSetting {
    /// Resolve to a concrete threshold.
    pub fn resolve(&self) -> f64 {
        match self {
            ThresholdSetting::Level(name) => threshold::resolve(name),
            ThresholdSetting::Value(v) => *v,
        }
    }
}

impl Default for ThresholdSetting {
    fn default() -> Self {
        ThresholdSetting::Level("MEDIUM".to_string())
    }
}

/// Header scanning mode: on/off, or an allow-list of header names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderScan {
    /// Scan all headers (true) or none (false).
    Enabled(bool),
    /// Scan only the named headers (case-insensitive).
    Allow(Vec<String>),
}

impl HeaderScan {
    /// Whether any header scanning happens at all.
    pub fn is_enabled(&self) -> bool {
        match self {
            HeaderScan::Enabled(on) => *on,
            HeaderScan::Allow(names) => !names.is_empty(),
        }
    }

    /// Whether a specific header should be scanned.
    pub fn allows(&self, name: &str) -> bool {
        match self {
            HeaderScan::Enabled(on) => *on,
            HeaderScan::Allow(names) => names.iter().any(|n| n.eq_ignore_ascii_case(name)),
        }
    }
}

impl Default for HeaderScan {
    fn default() -> Self {
        HeaderScan::Enabled(false)
    }
}

/// Options recognized by integration layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DetectorConfig {
    /// Suspicion threshold: named level or literal value.
    pub threshold: ThresholdSetting,
    /// Per-category weight overrides, keyed by category name.
    pub weights: BTreeMap<String, f64>,
    /// Scan query string parameters.
    pub scan_query: bool,
    /// Scan the request body.
    pub scan_body: bool,
    /// Scan request headers (all, none, or an allow-list).
    pub scan_headers: HeaderScan,
    /// Scan cookie values.
    pub scan_cookies: bool,
    /// Request attribute key the verdict is attached under.
    pub result_attribute: String,
    /// Emit a marker response header when the verdict is suspect.
    pub set_suspect_header: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: ThresholdSetting::default(),
            weights: BTreeMap::new(),
            scan_query: true,
            scan_body: true,
            scan_headers: HeaderScan::default(),
            scan_cookies: false,
            result_attribute: "threat.result".to_string(),
            set_suspect_header: true,
        }
    }
}

impl DetectorConfig {
    /// Build a scoring policy from the configured threshold and weight
    /// overrides. Unknown category names are logged and skipped.
    pub fn build_policy(&self) -> ScoringPolicy {
        let mut policy = ScoringPolicy::with_defaults().with_threshold(self.threshold.resolve());
        for (name, weight) in &self.weights {
            match name.parse::<Category>() {
                Ok(category) => policy = policy.with_weight(category, *weight),
                Err(_) => {
                    warn!(category = %name, "ignoring weight override for unknown category");
                }
            }
        }
        policy
    }
}
