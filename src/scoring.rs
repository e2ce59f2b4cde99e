//! Weighted Scoring Policy
//!
//! Holds per-category weights and the global suspicion threshold. Policies
//! are immutable values: the `with_*` builders return a new policy, so a
//! configured policy can be shared across threads and reused for
//! unboundedly many scans.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scanners::Category;

/// Named threshold levels for suspicion decisions.
pub mod threshold {
    pub const LOW: f64 = 1.0;
    pub const MEDIUM: f64 = 2.5;
    pub const HIGH: f64 = 5.0;

    /// Resolve a level name into a threshold. Unrecognized names fall back
    /// to `MEDIUM`.
    pub fn resolve(name: &str) -> f64 {
        match name.to_ascii_uppercase().as_str() {
            "LOW" => LOW,
            "HIGH" => HIGH,
            _ => MEDIUM,
        }
    }
}

/// Per-category weights plus a suspicion threshold.
///
/// Weight sign and magnitude are a configuration contract: weights are
/// assumed non-negative and are not validated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    weights: BTreeMap<Category, f64>,
    threshold: f64,
}

impl ScoringPolicy {
    /// Create a policy from explicit weights and a threshold.
    pub fn new(weights: BTreeMap<Category, f64>, threshold: f64) -> Self {
        Self { weights, threshold }
    }

    /// Baseline weights and the `MEDIUM` threshold.
    ///
    /// Weights reflect relative severity of a single indicator per
    /// category: command injection highest, CRLF/LDAP/serialization lowest.
    pub fn with_defaults() -> Self {
        let weights = BTreeMap::from([
            (Category::Xss, 1.5),
            (Category::Sqli, 2.5),
            (Category::CmdInjection, 3.0),
            (Category::PathTraversal, 1.5),
            (Category::Crlf, 1.0),
            (Category::Ssrf, 2.5),
            (Category::Xxe, 1.5),
            (Category::Nosql, 1.5),
            (Category::Ldap, 1.0),
            (Category::Serialization, 1.0),
        ]);
        Self::new(weights, threshold::MEDIUM)
    }

    /// Return a new policy with one category weight overridden.
    pub fn with_weight(mut self, category: Category, weight: f64) -> Self {
        self.weights.insert(category, weight);
        self
    }

    /// Return a new policy with the threshold set to a literal value.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Return a new policy with the threshold set from a named level
    /// (`LOW`/`MEDIUM`/`HIGH`; anything else resolves to `MEDIUM`).
    pub fn with_threshold_level(self, level: &str) -> Self {
        self.with_threshold(threshold::resolve(level))
    }

    /// Weight for a category. Unconfigured categories count at unit weight
    /// rather than being ignored.
    pub fn weight_for(&self, category: Category) -> f64 {
        self.weights.get(&category).copied().unwrap_or(1.0)
    }

    /// All configured weights.
    pub fn weights(&self) -> &BTreeMap<Category, f64> {
        &self.weights
    }

    /// The active suspicion threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::with_defaults()
    }
}
