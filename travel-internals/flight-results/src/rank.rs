//! Flight Results
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

use serde::Serialize;

use crate::FlightRecord;

/// Ranking criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Price,
    Duration,
    /// Keep the order the service returned.
    AsReturned,
}

impl SortBy {
    /// Map a user-facing name to a criterion.
    ///
    /// Unknown names leave results in service order rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "price" => SortBy::Price,
            "duration" => SortBy::Duration,
            other => {
                tracing::warn!(
                    "Unknown sort criterion '{}', keeping results in service order",
                    other
                );
                SortBy::AsReturned
            }
        }
    }
}

/// Ascending key where unparseable values come after every parsed one.
pub(crate) fn worst_last<T: Copy + Default>(value: Option<T>) -> (bool, T) {
    (value.is_none(), value.unwrap_or_default())
}

/// Stable sort by the selected criterion.
pub fn rank(mut records: Vec<FlightRecord>, sort_by: SortBy) -> Vec<FlightRecord> {
    // sort_by_cached_key preserves the relative order of equal keys
    match sort_by {
        SortBy::Price => records.sort_by_cached_key(|r| worst_last(r.price_amount())),
        SortBy::Duration => records.sort_by_cached_key(|r| worst_last(r.duration_minutes())),
        SortBy::AsReturned => {}
    }
    records
}
