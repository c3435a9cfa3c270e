//! Flight Results
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

//! travel-internals/flight-results
//! Side-effect free processing of flight search results:
//! parsing, deduplication, ranking, view selection and summaries.
//!
//! The pipeline is
//!
//! ```text
//! raw records -> dedupe -> rank -> select (top N / all / fastest)
//!                    \-> summarize (over the full deduplicated list)
//! ```
//!
//! Nothing in this crate performs I/O.

mod dedup;
mod parse;
mod pipeline;
mod rank;
mod record;
mod summary;
mod view;

pub use dedup::{dedupe, DedupKey};
pub use parse::{is_unavailable_price, parse_duration_minutes, parse_price_amount};
pub use pipeline::{process, ProcessedFlights};
pub use rank::{rank, SortBy};
pub use record::FlightRecord;
pub use summary::{summarize, FlightSummary, PriceRange};
pub use view::{select, Selection, TruncationNotice, ViewMode, DEFAULT_LIMIT, QUICK_LIMIT};
