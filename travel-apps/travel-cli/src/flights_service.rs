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

//! # Flight Service
//!
//! The flight service is an MCP tool server. This module holds the seam the
//! search goes through ([`FlightQueryService`]), its configuration, and the
//! side-effect free decoding of tool responses.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::{FlightQuery, FlightRecord, TravelError};

pub const DEFAULT_SERVER_COMMAND: &str = "npx -y @nicholasareed/google-flights-mcp@latest";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Something that answers flight queries with raw records.
pub trait FlightQueryService {
    fn fetch_flights(
        &self,
        query: &FlightQuery,
    ) -> impl Future<Output = Result<Vec<FlightRecord>, TravelError>>;
}

/// How to launch and talk to the flight service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub program: String,
    pub args: Vec<String>,
    /// Upper bound for the handshake and for each tool call.
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_command_line(DEFAULT_SERVER_COMMAND, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .expect("default server command is not empty")
    }
}

impl ServiceConfig {
    /// Split a whitespace-separated command line such as
    /// `"npx -y @nicholasareed/google-flights-mcp@latest"`.
    pub fn from_command_line(command_line: &str, timeout: Duration) -> Result<Self, TravelError> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words
            .next()
            .ok_or_else(|| TravelError::validation("Flight service command is empty"))?;
        Ok(Self {
            program,
            args: words.collect(),
            timeout,
        })
    }
}

#[derive(Deserialize)]
struct FlightsPayload {
    flights: Vec<FlightRecord>,
}

/// Decode the JSON text a flight tool returns (`{"flights": [...]}`).
pub fn decode_flights_payload(text: &str) -> Result<Vec<FlightRecord>, TravelError> {
    let payload: FlightsPayload = serde_json::from_str(text)?;
    Ok(payload.flights)
}

fn first_text(response: &Value) -> Option<&str> {
    response
        .get("content")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
}

/// Decode a serialized MCP `CallToolResult`.
pub fn decode_tool_response(response: &Value) -> Result<Vec<FlightRecord>, TravelError> {
    let is_error = response
        .get("isError")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if is_error {
        let detail = first_text(response).unwrap_or("no details");
        return Err(TravelError::service(format!("tool reported an error: {detail}")));
    }

    let text = first_text(response)
        .ok_or_else(|| TravelError::service("tool response has no text content"))?;
    decode_flights_payload(text)
}
