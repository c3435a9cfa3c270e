//! Flight Results
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

//! Deduplication of flight offers.
//!
//! The service regularly lists the same offer several times (for example once
//! in "best flights" and again in "other flights"), sometimes with a different
//! price. Two records are the same offer when they share airline, departure
//! and arrival; price, duration and stops are not part of the key.

use std::collections::HashSet;

use crate::FlightRecord;

/// Borrowed `(airline, departure, arrival)` identity of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DedupKey<'a> {
    pub airline: &'a str,
    pub departure: &'a str,
    pub arrival: &'a str,
}

/// Keep the first record of every key, in input order.
pub fn dedupe(records: &[FlightRecord]) -> Vec<FlightRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    let kept: Vec<FlightRecord> = records
        .iter()
        .filter(|record| seen.insert(record.dedup_key()))
        .cloned()
        .collect();

    if kept.len() < records.len() {
        tracing::debug!(
            "Dropped {} duplicate offers ({} -> {})",
            records.len() - kept.len(),
            records.len(),
            kept.len()
        );
    }

    kept
}
