//! Input Normalization
//!
//! Canonicalizes raw input before pattern matching. Attackers routinely
//! double- or triple-encode payloads to slip past single-pass decoders, so
//! decoding runs to a fixed point with a bounded iteration count.

use regex::Regex;
use std::sync::LazyLock;

/// Hard cap on scanned input length, in characters.
///
/// Inputs are truncated before any decoding to keep pattern matching cost
/// bounded on pathologically large values.
pub const MAX_SCAN_LEN: usize = 65_536;

/// Maximum number of decode rounds before giving up on a fixed point.
const MAX_DECODE_ROUNDS: usize = 3;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalize a raw string for scanning.
///
/// In order:
/// 1. Truncate to [`MAX_SCAN_LEN`] characters.
/// 2. Decode HTML/XML entities (numeric and named, HTML5 set), then
///    form-style `+` as space, then percent-encoding, repeating until the
///    text stops changing or the round cap is reached. A percent-decode
///    that would produce invalid UTF-8 keeps the pre-decode value for
///    that round instead of failing.
/// 3. Collapse runs of Unicode whitespace to a single ASCII space.
/// 4. Trim leading and trailing whitespace.
pub fn normalize(raw: &str) -> String {
    let mut cur: String = raw.chars().take(MAX_SCAN_LEN).collect();
    let mut prev: Option<String> = None;

    for _ in 0..MAX_DECODE_ROUNDS {
        // Form encoding uses `+` for space; urlencoding only handles `%XX`.
        let decoded = html_escape::decode_html_entities(&cur).replace('+', " ");
        cur = match urlencoding::decode(&decoded) {
            Ok(s) => s.into_owned(),
            // Decoded bytes were not valid UTF-8; keep the entity-decoded text.
            Err(_) => decoded,
        };
        if prev.as_deref() == Some(cur.as_str()) {
            break;
        }
        prev = Some(cur.clone());
    }

    WHITESPACE.replace_all(&cur, " ").trim().to_string()
}
