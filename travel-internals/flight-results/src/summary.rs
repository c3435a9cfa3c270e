//! Flight Results
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

use serde::Serialize;

use crate::FlightRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    fn widen(range: Option<Self>, amount: u64) -> Option<Self> {
        Some(match range {
            None => PriceRange {
                min: amount,
                max: amount,
            },
            Some(r) => PriceRange {
                min: r.min.min(amount),
                max: r.max.max(amount),
            },
        })
    }
}

/// Aggregate statistics over a result set.
///
/// `price_range` and `fastest_minutes` are `None` when no record has a
/// parseable value, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FlightSummary {
    pub total: usize,
    pub non_stop: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest_minutes: Option<u32>,
}

pub fn summarize(records: &[FlightRecord]) -> FlightSummary {
    FlightSummary {
        total: records.len(),
        non_stop: records.iter().filter(|r| r.is_non_stop()).count(),
        price_range: records
            .iter()
            .filter_map(FlightRecord::price_amount)
            .fold(None, PriceRange::widen),
        fastest_minutes: records
            .iter()
            .filter_map(FlightRecord::duration_minutes)
            .min(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(duration: &str, stops: u32, price: Option<&str>) -> FlightRecord {
        FlightRecord {
            airline: "Test Air".to_string(),
            departure: "dep".to_string(),
            arrival: "arr".to_string(),
            arrival_day_offset: None,
            duration: duration.to_string(),
            stops,
            price: price.map(str::to_string),
        }
    }

    #[test]
    fn test_summary_counts_and_range() {
        let records = vec![
            offer("2 hr", 0, Some("$100")),
            offer("3 hr 10 min", 1, Some("$200")),
            offer("1 hr 45 min", 0, None),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.non_stop, 2);
        assert_eq!(summary.price_range, Some(PriceRange { min: 100, max: 200 }));
        assert_eq!(summary.fastest_minutes, Some(105));
    }

    #[test]
    fn test_summary_omits_unparseable_aggregates() {
        let records = vec![offer("soon", 2, None), offer("later", 3, Some("call us"))];
        let summary = summarize(&records);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.non_stop, 0);
        assert_eq!(summary.price_range, None);
        assert_eq!(summary.fastest_minutes, None);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(summarize(&[]), FlightSummary::default());
    }

    #[test]
    fn test_summary_single_price() {
        let summary = summarize(&[offer("1 hr", 0, Some("₹4,321"))]);
        assert_eq!(summary.price_range, Some(PriceRange { min: 4321, max: 4321 }));
    }

    #[test]
    fn test_summary_json_skips_missing() {
        let value = serde_json::to_value(summarize(&[offer("x", 1, None)])).unwrap();
        assert_eq!(value["total"], 1);
        assert!(value.get("price_range").is_none());
        assert!(value.get("fastest_minutes").is_none());
    }
}
