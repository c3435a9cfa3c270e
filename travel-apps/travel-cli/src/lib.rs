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

// Library for travel-cli
// Flight search through a Google Flights MCP tool server

mod error;
mod flights_query_builder;
mod flights_search;
mod flights_service;
pub mod render;

#[cfg(feature = "mcp")]
mod flights_mcp_client;

pub use error::TravelError;

pub use flights_query_builder::{
    parse_iso_date, parse_quick_route, FlightQuery, FlightQueryBuilder, TravelDates,
};

pub use flights_search::{search, SearchOptions, SearchReport};

pub use flights_service::{
    decode_flights_payload, decode_tool_response, FlightQueryService, ServiceConfig,
    DEFAULT_SERVER_COMMAND, DEFAULT_TIMEOUT_SECS,
};

#[cfg(feature = "mcp")]
pub use flights_mcp_client::McpFlightsClient;

// Re-export the result pipeline so callers need a single dependency
pub use flight_results::{
    FlightRecord, FlightSummary, PriceRange, SortBy, TruncationNotice, ViewMode, DEFAULT_LIMIT,
    QUICK_LIMIT,
};
