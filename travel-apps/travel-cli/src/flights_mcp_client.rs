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

//! # MCP Flights Client
//!
//! Effectful (process, time) access to the flight service: spawns the MCP
//! tool server as a child process and calls its tools over stdio.
//! One client per command invocation; call [`McpFlightsClient::close`] when done.

use std::time::{Duration, Instant};

use rmcp::model::CallToolRequestParam;
use rmcp::service::{RoleClient, RunningService};
use rmcp::transport::TokioChildProcess;
use rmcp::ServiceExt;
use serde_json::json;
use tokio::process::Command;

use crate::flights_service::{decode_tool_response, FlightQueryService, ServiceConfig};
use crate::{FlightQuery, FlightRecord, TravelError};

pub struct McpFlightsClient {
    service: RunningService<RoleClient, ()>,
    timeout: Duration,
}

impl McpFlightsClient {
    pub async fn connect(config: &ServiceConfig) -> Result<Self, TravelError> {
        let start = Instant::now();
        tracing::debug!(
            "[connect] Spawning flight service: {} {}",
            config.program,
            config.args.join(" ")
        );

        let mut command = Command::new(&config.program);
        command.args(&config.args);
        let transport = TokioChildProcess::new(command).map_err(|e| {
            TravelError::service(format!("failed to start '{}': {e}", config.program))
        })?;

        let service = tokio::time::timeout(config.timeout, ().serve(transport))
            .await
            .map_err(|_| TravelError::Timeout(config.timeout))?
            .map_err(|e| TravelError::service(format!("MCP handshake failed: {e}")))?;

        tracing::debug!("[connect] Flight service ready in {:?}", start.elapsed());
        Ok(Self {
            service,
            timeout: config.timeout,
        })
    }

    /// Shut the server down and reap the child process.
    pub async fn close(self) -> Result<(), TravelError> {
        let reason = self
            .service
            .cancel()
            .await
            .map_err(|e| TravelError::service(format!("failed to stop flight service: {e}")))?;
        tracing::debug!("[close] Flight service stopped: {:?}", reason);
        Ok(())
    }
}

impl FlightQueryService for McpFlightsClient {
    async fn fetch_flights(&self, query: &FlightQuery) -> Result<Vec<FlightRecord>, TravelError> {
        let tool = query.tool_name();
        let request: CallToolRequestParam = serde_json::from_value(json!({
            "name": tool,
            "arguments": query.arguments()?,
        }))?;

        let start = Instant::now();
        tracing::trace!("[fetch_flights] Calling {} with {:?}", tool, request.arguments);
        let result = tokio::time::timeout(self.timeout, self.service.call_tool(request))
            .await
            .map_err(|_| TravelError::Timeout(self.timeout))?
            .map_err(|e| TravelError::service(format!("{tool} call failed: {e}")))?;
        tracing::debug!("[fetch_flights] {} answered in {:?}", tool, start.elapsed());

        decode_tool_response(&serde_json::to_value(&result)?)
    }
}
