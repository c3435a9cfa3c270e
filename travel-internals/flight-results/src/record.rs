//! Flight Results
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

use serde::{Deserialize, Deserializer, Serialize};

use crate::dedup::DedupKey;
use crate::parse::{is_unavailable_price, parse_duration_minutes, parse_price_amount};

/// One flight offer as returned by the flight service.
///
/// Wire names follow the service (`name`, `arrival_time_ahead`);
/// serialization uses the field names below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    #[serde(rename(deserialize = "name"), alias = "airline")]
    pub airline: String,
    pub departure: String,
    pub arrival: String,
    /// Display annotation such as `"+1 day"`, never parsed.
    #[serde(
        rename(deserialize = "arrival_time_ahead"),
        alias = "arrival_day_offset",
        default,
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub arrival_day_offset: Option<String>,
    pub duration: String,
    pub stops: u32,
    /// `None` when the service had no price for this offer.
    #[serde(default, deserialize_with = "quoted_price")]
    pub price: Option<String>,
}

impl FlightRecord {
    pub fn duration_minutes(&self) -> Option<u32> {
        parse_duration_minutes(&self.duration)
    }

    pub fn price_amount(&self) -> Option<u64> {
        self.price.as_deref().and_then(parse_price_amount)
    }

    pub fn is_non_stop(&self) -> bool {
        self.stops == 0
    }

    pub fn dedup_key(&self) -> DedupKey<'_> {
        DedupKey {
            airline: &self.airline,
            departure: &self.departure,
            arrival: &self.arrival,
        }
    }
}

fn non_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

fn quoted_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|p| !is_unavailable_price(p)))
}
