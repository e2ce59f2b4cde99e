//! Threat Detection Engine
//!
//! Orchestrates normalization, the scanner set and weighted scoring into a
//! single verdict. A detector is immutable after construction and safe to
//! share across threads; each scan is independent and touches no shared
//! mutable state.

use anyhow::{ensure, Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::detection::ThreatResult;
use crate::normalize::normalize;
use crate::scanners::{self, HitCode, Scanner};
use crate::scoring::ScoringPolicy;

/// The detection pipeline: an ordered scanner list plus a scoring policy.
pub struct ThreatDetector {
    scanners: Vec<Box<dyn Scanner>>,
    policy: ScoringPolicy,
}

impl ThreatDetector {
    /// Build a detector from an explicit scanner list and policy.
    ///
    /// Scanners run in the order given; any subset or superset of the
    /// standard set may be supplied.
    pub fn new(scanners: Vec<Box<dyn Scanner>>, policy: ScoringPolicy) -> Self {
        Self { scanners, policy }
    }

    /// Build a detector with the ten standard scanners and the given policy.
    pub fn with_defaults(policy: ScoringPolicy) -> Self {
        Self::new(scanners::default_set(), policy)
    }

    /// Build a detector from an externally precompiled ruleset.
    ///
    /// The on-disk format belongs to the offline ruleset compiler and is
    /// treated as opaque here; the file is resolved and sanity-checked, and
    /// the resulting detector is behaviorally equivalent to the default
    /// scanner set. An unresolvable or empty path is a configuration error
    /// surfaced to the caller.
    pub fn from_ruleset(path: impl AsRef<Path>, policy: Option<ScoringPolicy>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)
            .with_context(|| format!("unable to read compiled ruleset {}", path.display()))?;
        ensure!(
            !data.is_empty(),
            "compiled ruleset {} is empty",
            path.display()
        );
        debug!(path = %path.display(), bytes = data.len(), "loaded compiled ruleset");
        Ok(Self::with_defaults(policy.unwrap_or_default()))
    }

    /// The active scoring policy.
    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Scan a raw string and produce a verdict.
    ///
    /// All scanners always run; there is no early exit on first hit, since
    /// callers need the complete hit set rather than a boolean.
    pub fn scan_str(&self, input: &str) -> ThreatResult {
        let norm = normalize(input);
        let mut hits = BTreeMap::new();

        for scanner in &self.scanners {
            let codes = dedupe(scanner.scan(&norm));
            if !codes.is_empty() {
                debug!(
                    category = %scanner.category(),
                    codes = ?codes,
                    "scanner hit"
                );
                hits.insert(scanner.category(), codes);
            }
        }

        let score: f64 = hits
            .iter()
            .map(|(cat, codes)| self.policy.weight_for(*cat) * codes.len() as f64)
            .sum();
        let suspect = score >= self.policy.threshold();

        ThreatResult {
            suspect,
            score,
            hits,
            norm,
        }
    }

    /// Scan and export as a plain key-value structure.
    pub fn scan_to_map(&self, input: &str) -> Value {
        self.scan_str(input).to_map()
    }
}

impl Default for ThreatDetector {
    fn default() -> Self {
        Self::with_defaults(ScoringPolicy::with_defaults())
    }
}

/// Drop duplicate codes, keeping first-seen order.
fn dedupe(codes: Vec<HitCode>) -> Vec<HitCode> {
    let mut out: Vec<HitCode> = Vec::with_capacity(codes.len());
    for code in codes {
        if !out.contains(&code) {
            out.push(code);
        }
    }
    out
}
