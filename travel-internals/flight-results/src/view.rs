//! Flight Results
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

//! View selection: how much of a ranked list is shown.

use serde::Serialize;

use crate::rank::worst_last;
use crate::FlightRecord;

/// Rows shown by a regular search unless `--limit` or `--all` is given.
pub const DEFAULT_LIMIT: usize = 10;

/// Rows shown by a quick search.
pub const QUICK_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The single fastest offer of the whole deduplicated set.
    Fastest,
    Top(usize),
    All,
}

impl ViewMode {
    /// `fastest` overrides `all`, which overrides the row limit.
    pub fn from_flags(fastest: bool, all: bool, limit: Option<usize>, default_limit: usize) -> Self {
        if fastest {
            ViewMode::Fastest
        } else if all {
            ViewMode::All
        } else {
            ViewMode::Top(limit.unwrap_or(default_limit))
        }
    }
}

/// Tells the presentation layer that rows were cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruncationNotice {
    pub shown: usize,
    pub total: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub flights: Vec<FlightRecord>,
    pub truncation: Option<TruncationNotice>,
}

/// Apply `mode` to a ranked list.
///
/// `deduped` is the full deduplicated set the ranking was computed from;
/// only [`ViewMode::Fastest`] looks at it, ignoring the ranked order.
pub fn select(deduped: &[FlightRecord], mut ranked: Vec<FlightRecord>, mode: ViewMode) -> Selection {
    match mode {
        ViewMode::Fastest => {
            // min_by_key returns the first of equal minima
            let fastest = deduped
                .iter()
                .min_by_key(|r| worst_last(r.duration_minutes()))
                .cloned();
            Selection {
                flights: fastest.into_iter().collect(),
                truncation: None,
            }
        }
        ViewMode::All => Selection {
            flights: ranked,
            truncation: None,
        },
        ViewMode::Top(limit) => {
            let total = ranked.len();
            if total <= limit {
                return Selection {
                    flights: ranked,
                    truncation: None,
                };
            }
            ranked.truncate(limit);
            Selection {
                flights: ranked,
                truncation: Some(TruncationNotice {
                    shown: limit,
                    total,
                    limit,
                }),
            }
        }
    }
}
