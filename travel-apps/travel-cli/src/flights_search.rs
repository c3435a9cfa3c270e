//!  Travel CLI
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Flight Search
//!
//! Fetch raw offers for a query and run them through the result pipeline.

use std::time::Instant;

use flight_results::{process, FlightRecord, FlightSummary, SortBy, TruncationNotice, ViewMode};
use serde::Serialize;

use crate::flights_service::FlightQueryService;
use crate::{FlightQuery, TravelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub sort_by: SortBy,
    pub view: ViewMode,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sort_by: SortBy::Price,
            view: ViewMode::Top(flight_results::DEFAULT_LIMIT),
        }
    }
}

impl SearchOptions {
    /// Date-range comparison lists every option, cheapest first.
    pub fn compare() -> Self {
        Self {
            sort_by: SortBy::Price,
            view: ViewMode::All,
        }
    }

    /// Quick search shows a short, cheapest-first shortlist.
    pub fn quick() -> Self {
        Self {
            sort_by: SortBy::Price,
            view: ViewMode::Top(flight_results::QUICK_LIMIT),
        }
    }
}

/// Everything the presentation layer needs for one search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub tool: &'static str,
    pub query: FlightQuery,
    pub sort_by: SortBy,
    pub flights: Vec<FlightRecord>,
    pub summary: FlightSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation: Option<TruncationNotice>,
}

pub async fn search<S: FlightQueryService>(
    service: &S,
    query: &FlightQuery,
    options: &SearchOptions,
) -> Result<SearchReport, TravelError> {
    let overall_start = Instant::now();
    tracing::info!(
        "Searching flights {} -> {} via {}",
        query.origin,
        query.destination,
        query.tool_name()
    );

    let raw = service.fetch_flights(query).await?;
    tracing::info!(
        "Flight service returned {} offers in {:?}",
        raw.len(),
        overall_start.elapsed()
    );

    let processed = process(&raw, options.sort_by, options.view);
    if processed.duplicates_dropped > 0 {
        tracing::debug!("Removed {} duplicate offers", processed.duplicates_dropped);
    }
    if processed.summary.price_range.is_none() && processed.summary.total > 0 {
        tracing::warn!("No offer had a parseable price, the price range is omitted");
    }

    Ok(SearchReport {
        tool: query.tool_name(),
        query: query.clone(),
        sort_by: options.sort_by,
        flights: processed.flights,
        summary: processed.summary,
        truncation: processed.truncation,
    })
}
