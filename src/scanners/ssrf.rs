//! SSRF indicators: URLs pointing at loopback or private networks.
//!
//! A scheme delimiter precheck short-circuits to "no hit" so that a plain
//! mention of a private IP address in prose never flags. Candidate URLs are
//! parsed properly rather than pattern-matched for host extraction.

use regex::Regex;
use std::net::IpAddr;
use std::sync::LazyLock;
use url::Url;

use super::{Category, HitCode, Scanner};

static URL_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?|ftp|file)://[^\s<>"'()]+"#).expect("ssrf pattern is valid")
});

/// Detects SSRF indicators (localhost, loopback, RFC1918 networks).
pub struct SsrfScanner;

impl Scanner for SsrfScanner {
    fn category(&self) -> Category {
        Category::Ssrf
    }

    fn scan(&self, normalized: &str) -> Vec<HitCode> {
        // Not even a scheme delimiter present? Definitely not a URL.
        if !normalized.contains("://") {
            return Vec::new();
        }

        let mut hits = Vec::new();
        for candidate in URL_CANDIDATE.find_iter(normalized) {
            let Ok(parsed) = Url::parse(candidate.as_str()) else {
                continue;
            };
            let Some(host) = parsed.host_str() else {
                continue;
            };
            let host = host.trim_matches(|c| c == '[' || c == ']');

            if host.eq_ignore_ascii_case("localhost") {
                push_unique(&mut hits, "LOCALHOST_URL");
                continue;
            }
            match host.parse::<IpAddr>() {
                Ok(IpAddr::V4(ip)) => {
                    if ip.is_loopback() || ip.is_unspecified() {
                        push_unique(&mut hits, "LOCALHOST_URL");
                    } else if ip.is_private() {
                        push_unique(&mut hits, "RFC1918_URL");
                    }
                }
                Ok(IpAddr::V6(ip)) => {
                    if ip.is_loopback() || ip.is_unspecified() {
                        push_unique(&mut hits, "LOCALHOST_URL");
                    }
                }
                Err(_) => {}
            }
        }
        hits
    }
}

fn push_unique(hits: &mut Vec<HitCode>, code: HitCode) {
    if !hits.contains(&code) {
        hits.push(code);
    }
}
