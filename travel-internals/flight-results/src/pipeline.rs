//! Flight Results
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

use crate::{dedupe, rank, select, summarize, FlightRecord, FlightSummary, SortBy, TruncationNotice, ViewMode};

/// Output of [`process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFlights {
    /// Rows to display, ranked and limited.
    pub flights: Vec<FlightRecord>,
    /// Statistics over every deduplicated record, not only the displayed rows.
    pub summary: FlightSummary,
    pub truncation: Option<TruncationNotice>,
    pub duplicates_dropped: usize,
}

/// Run raw service records through dedupe, rank, select and summarize.
pub fn process(raw: &[FlightRecord], sort_by: SortBy, mode: ViewMode) -> ProcessedFlights {
    let deduped = dedupe(raw);
    let summary = summarize(&deduped);

    // Fastest ignores the criterion, no point ranking twice.
    let ranked = match mode {
        ViewMode::Fastest => Vec::new(),
        ViewMode::Top(_) | ViewMode::All => rank(deduped.clone(), sort_by),
    };
    let selection = select(&deduped, ranked, mode);

    tracing::debug!(
        "Processed {} raw records: {} unique, {} shown (sort={:?}, view={:?})",
        raw.len(),
        deduped.len(),
        selection.flights.len(),
        sort_by,
        mode
    );

    ProcessedFlights {
        flights: selection.flights,
        summary,
        truncation: selection.truncation,
        duplicates_dropped: raw.len() - deduped.len(),
    }
}
