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

//! # Flights Query Builder
//!
//! Side-effect free mapping from command parameters to flight service queries.
//! Each query targets one tool of the flight service and serializes to that
//! tool's argument object.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::TravelError;

static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// `<from>-<to> [date]`, separators may be dashes or spaces.
static QUICK_ROUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([^\s-]+)[\s-]+([^\s-]+)(?:[\s-]+(\S+))?").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TravelDates {
    OneWay {
        date: NaiveDate,
    },
    RoundTrip {
        departure_date: NaiveDate,
        return_date: NaiveDate,
    },
    /// Stay bounds are only sent when given; the service treats a missing
    /// bound differently from zero.
    DateRange {
        #[serde(rename = "start_date_str")]
        start: NaiveDate,
        #[serde(rename = "end_date_str")]
        end: NaiveDate,
        #[serde(skip_serializing_if = "Option::is_none")]
        min_stay_days: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_stay_days: Option<u32>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    #[serde(flatten)]
    pub dates: TravelDates,
    pub adults: u32,
    pub seat_type: String,
    #[serde(rename = "return_cheapest_only")]
    pub cheapest_only: bool,
}

impl FlightQuery {
    pub fn builder(
        origin: impl Into<String>,
        destination: impl Into<String>,
        dates: TravelDates,
    ) -> FlightQueryBuilder {
        FlightQueryBuilder {
            origin: origin.into(),
            destination: destination.into(),
            dates,
            adults: 1,
            seat_type: "economy".to_string(),
            cheapest_only: false,
        }
    }

    /// Name of the flight service tool answering this query.
    pub fn tool_name(&self) -> &'static str {
        match self.dates {
            TravelDates::OneWay { .. } => "get_flights_on_date",
            TravelDates::RoundTrip { .. } => "get_round_trip_flights",
            TravelDates::DateRange { .. } => "find_all_flights_in_range",
        }
    }

    /// Tool arguments as sent to the flight service.
    pub fn arguments(&self) -> Result<Map<String, Value>, TravelError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(TravelError::service(format!(
                "query serialized to a non-object: {other}"
            ))),
        }
    }

    fn validate(&self) -> Result<(), TravelError> {
        if self.origin.is_empty() {
            return Err(TravelError::validation("Origin airport is required"));
        }
        if self.destination.is_empty() {
            return Err(TravelError::validation("Destination airport is required"));
        }
        if self.adults == 0 {
            return Err(TravelError::validation("At least one passenger is required"));
        }

        match &self.dates {
            TravelDates::OneWay { .. } => {}
            TravelDates::RoundTrip {
                departure_date,
                return_date,
            } => {
                if return_date < departure_date {
                    return Err(TravelError::validation(format!(
                        "Return date {return_date} is before departure date {departure_date}"
                    )));
                }
            }
            TravelDates::DateRange {
                start,
                end,
                min_stay_days,
                max_stay_days,
            } => {
                if end < start {
                    return Err(TravelError::validation(format!(
                        "End of range {end} is before start {start}"
                    )));
                }
                if let (Some(min), Some(max)) = (min_stay_days, max_stay_days) {
                    if min > max {
                        return Err(TravelError::validation(format!(
                            "Minimum stay ({min} days) exceeds maximum stay ({max} days)"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FlightQueryBuilder {
    origin: String,
    destination: String,
    dates: TravelDates,
    adults: u32,
    seat_type: String,
    cheapest_only: bool,
}

impl FlightQueryBuilder {
    pub fn adults(mut self, adults: u32) -> Self {
        self.adults = adults;
        self
    }

    pub fn seat_type(mut self, seat_type: impl Into<String>) -> Self {
        self.seat_type = seat_type.into();
        self
    }

    pub fn cheapest_only(mut self, cheapest_only: bool) -> Self {
        self.cheapest_only = cheapest_only;
        self
    }

    pub fn build(self) -> Result<FlightQuery, TravelError> {
        let query = FlightQuery {
            origin: self.origin.trim().to_uppercase(),
            destination: self.destination.trim().to_uppercase(),
            dates: self.dates,
            adults: self.adults,
            seat_type: self.seat_type.trim().to_lowercase(),
            cheapest_only: self.cheapest_only,
        };
        query.validate()?;
        Ok(query)
    }
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_iso_date(token: &str) -> Result<NaiveDate, TravelError> {
    let token = token.trim();
    let invalid = || TravelError::validation(format!("Invalid date: {token}. Use YYYY-MM-DD format"));

    if !ISO_DATE_RE.is_match(token) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| invalid())
}

/// Parse a quick route such as `"blr-del tomorrow"`.
///
/// The date token defaults to `today`; `today` and `tomorrow` resolve against
/// the given date. Quick searches are one-way, one adult, economy.
pub fn parse_quick_route(route: &str, today: NaiveDate) -> Result<FlightQuery, TravelError> {
    let route = route.to_lowercase();
    let Some(caps) = QUICK_ROUTE_RE.captures(&route) else {
        return Err(TravelError::validation(
            "Usage: travel-cli quick <from>-<to> [date] (example: travel-cli quick blr-del tomorrow)",
        ));
    };

    let date = match caps.get(3).map_or("today", |m| m.as_str()) {
        "today" => today,
        "tomorrow" => today
            .succ_opt()
            .ok_or_else(|| TravelError::validation("Date out of range"))?,
        token => parse_iso_date(token).map_err(|_| {
            TravelError::validation("Invalid date. Use YYYY-MM-DD format or \"today\"/\"tomorrow\"")
        })?,
    };

    FlightQuery::builder(&caps[1], &caps[2], TravelDates::OneWay { date }).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_way_arguments() {
        let query = FlightQuery::builder(
            "blr",
            " sfo ",
            TravelDates::OneWay {
                date: ymd(2026, 11, 2),
            },
        )
        .adults(2)
        .seat_type("Business")
        .build()
        .unwrap();

        assert_eq!(query.tool_name(), "get_flights_on_date");
        let args = query.arguments().unwrap();
        assert_eq!(args["origin"], "BLR");
        assert_eq!(args["destination"], "SFO");
        assert_eq!(args["date"], "2026-11-02");
        assert_eq!(args["adults"], 2);
        assert_eq!(args["seat_type"], "business");
        assert_eq!(args["return_cheapest_only"], false);
        assert_eq!(args.len(), 6);
    }

    #[test]
    fn test_round_trip_arguments() {
        let query = FlightQuery::builder(
            "BLR",
            "DEL",
            TravelDates::RoundTrip {
                departure_date: ymd(2026, 12, 20),
                return_date: ymd(2027, 1, 3),
            },
        )
        .cheapest_only(true)
        .build()
        .unwrap();

        assert_eq!(query.tool_name(), "get_round_trip_flights");
        let args = query.arguments().unwrap();
        assert_eq!(args["departure_date"], "2026-12-20");
        assert_eq!(args["return_date"], "2027-01-03");
        assert_eq!(args["return_cheapest_only"], true);
        assert!(args.get("date").is_none());
    }

    #[test]
    fn test_range_stay_bounds_only_when_given() {
        let bare = FlightQuery::builder(
            "BLR",
            "GOI",
            TravelDates::DateRange {
                start: ymd(2026, 11, 1),
                end: ymd(2026, 11, 15),
                min_stay_days: None,
                max_stay_days: None,
            },
        )
        .build()
        .unwrap();
        let args = bare.arguments().unwrap();
        assert_eq!(bare.tool_name(), "find_all_flights_in_range");
        assert_eq!(args["start_date_str"], "2026-11-01");
        assert_eq!(args["end_date_str"], "2026-11-15");
        assert!(args.get("min_stay_days").is_none());
        assert!(args.get("max_stay_days").is_none());

        let zero_min = FlightQuery::builder(
            "BLR",
            "GOI",
            TravelDates::DateRange {
                start: ymd(2026, 11, 1),
                end: ymd(2026, 11, 15),
                min_stay_days: Some(0),
                max_stay_days: None,
            },
        )
        .build()
        .unwrap();
        let args = zero_min.arguments().unwrap();
        assert_eq!(args["min_stay_days"], 0);
        assert!(args.get("max_stay_days").is_none());
    }

    #[test]
    fn test_build_validation() {
        let one_way = TravelDates::OneWay {
            date: ymd(2026, 11, 2),
        };
        assert!(FlightQuery::builder("", "DEL", one_way.clone()).build().is_err());
        assert!(FlightQuery::builder("BLR", "  ", one_way.clone()).build().is_err());
        let err = FlightQuery::builder("BLR", "DEL", one_way)
            .adults(0)
            .build()
            .unwrap_err();
        assert!(err.is_validation());

        let backwards = TravelDates::RoundTrip {
            departure_date: ymd(2026, 11, 10),
            return_date: ymd(2026, 11, 2),
        };
        assert!(FlightQuery::builder("BLR", "DEL", backwards).build().is_err());

        let bad_stay = TravelDates::DateRange {
            start: ymd(2026, 11, 1),
            end: ymd(2026, 11, 30),
            min_stay_days: Some(9),
            max_stay_days: Some(3),
        };
        assert!(FlightQuery::builder("BLR", "DEL", bad_stay).build().is_err());
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2026-02-28").unwrap(), ymd(2026, 2, 28));
        assert_eq!(parse_iso_date(" 2026-02-28 ").unwrap(), ymd(2026, 2, 28));
        for bad in ["2026-2-28", "2026/02/28", "28-02-2026", "2026-02-30", "tomorrow", ""] {
            let err = parse_iso_date(bad).unwrap_err();
            assert!(err.is_validation(), "{bad} should be a validation error");
        }
    }

    #[test]
    fn test_quick_route_keywords() {
        let today = ymd(2026, 10, 19);

        let q = parse_quick_route("blr-del tomorrow", today).unwrap();
        assert_eq!(q.origin, "BLR");
        assert_eq!(q.destination, "DEL");
        assert_eq!(q.dates, TravelDates::OneWay { date: ymd(2026, 10, 20) });
        assert_eq!(q.adults, 1);
        assert_eq!(q.seat_type, "economy");
        assert!(!q.cheapest_only);

        let q = parse_quick_route("BLR DEL", today).unwrap();
        assert_eq!(q.dates, TravelDates::OneWay { date: today });

        let q = parse_quick_route("blr del today", today).unwrap();
        assert_eq!(q.dates, TravelDates::OneWay { date: today });
    }

    #[test]
    fn test_quick_route_iso_date() {
        let today = ymd(2026, 10, 19);
        for route in ["blr-del 2026-12-24", "blr-del-2026-12-24", "  blr   del   2026-12-24 "] {
            let q = parse_quick_route(route, today).unwrap();
            assert_eq!(q.dates, TravelDates::OneWay { date: ymd(2026, 12, 24) }, "{route}");
        }

        let q = parse_quick_route("blr-del 2026-12-31", ymd(2026, 12, 31)).unwrap();
        assert_eq!(q.dates, TravelDates::OneWay { date: ymd(2026, 12, 31) });
        let q = parse_quick_route("blr-del tomorrow", ymd(2026, 12, 31)).unwrap();
        assert_eq!(q.dates, TravelDates::OneWay { date: ymd(2027, 1, 1) });
    }

    #[test]
    fn test_quick_route_rejections() {
        let today = ymd(2026, 10, 19);
        for route in ["blr", "", "   ", "blr-"] {
            let err = parse_quick_route(route, today).unwrap_err();
            assert!(err.is_validation(), "{route:?} should be rejected");
            assert!(err.to_string().starts_with("Usage"));
        }
        for route in ["blr-del yesterday", "blr-del 24/12/2026", "blr-del 2026-13-01"] {
            let err = parse_quick_route(route, today).unwrap_err();
            assert!(err.to_string().starts_with("Invalid date"), "{route}");
        }
    }
}
