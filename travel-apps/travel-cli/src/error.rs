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

//! # Errors
//!
//! Query-level failures. Unparseable prices and durations on individual
//! records are not errors; the result pipeline ranks them last instead.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TravelError {
    /// Bad user input, raised before the flight service is contacted.
    #[error("{0}")]
    Validation(String),
    #[error("flight service error: {0}")]
    Service(String),
    #[error("flight service did not answer within {0:?}")]
    Timeout(Duration),
    #[error("malformed flight service response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TravelError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
