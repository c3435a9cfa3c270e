//! Flight Results
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

//! Duration and price text parsers.
//!
//! The flight service formats durations as `"<H> hr <M> min"` and prices as
//! currency-prefixed amounts with thousands separators (`"₹12,345"`).
//! Both parsers return `None` when the text does not follow that grammar;
//! callers rank such values last and leave them out of aggregates.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hours are mandatory, minutes and the `min` suffix are optional.
static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*hr\s*(\d+)?\s*(?:min)?").unwrap());

/// First run of digits, possibly grouped with commas.
static PRICE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").unwrap());

const UNAVAILABLE_SENTINELS: [&str; 2] = ["price unavailable", "unavailable"];

/// Whether a price string means "no price" (empty or the service sentinel).
pub fn is_unavailable_price(text: &str) -> bool {
    let text = text.trim();
    text.is_empty()
        || UNAVAILABLE_SENTINELS
            .iter()
            .any(|sentinel| text.eq_ignore_ascii_case(sentinel))
}

/// Parse `"2 hr 30 min"` into `150`.
///
/// A missing minutes component counts as zero (`"3 hr"` is `180`).
/// Minutes-only strings such as `"45 min"` do not match.
pub fn parse_duration_minutes(text: &str) -> Option<u32> {
    let Some(caps) = DURATION_RE.captures(text) else {
        tracing::debug!("Could not parse duration from: '{}'", text);
        return None;
    };

    let hours: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    hours.checked_mul(60)?.checked_add(minutes)
}

/// Parse `"₹12,345"` into `12345`.
pub fn parse_price_amount(text: &str) -> Option<u64> {
    if is_unavailable_price(text) {
        return None;
    }

    let Some(run) = PRICE_RE.find(text) else {
        tracing::debug!("Could not parse price from: '{}'", text);
        return None;
    };

    let digits: String = run.as_str().chars().filter(|c| *c != ',').collect();
    digits.parse().ok()
}
