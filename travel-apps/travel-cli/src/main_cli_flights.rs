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

//! CLI for flight search through a Google Flights MCP tool server.
//!
//! # Examples
//!
//! ```bash
//! travel-cli search -f BLR -t DEL -d 2026-11-02 --sort duration --limit 5
//! travel-cli roundtrip -f BLR -t SFO -d 2026-12-20 -r 2027-01-03 --cheapest
//! travel-cli compare -f BLR -t GOI --start 2026-11-01 --end 2026-11-15 --min-stay 3
//! travel-cli quick "blr-del tomorrow"
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use travel_cli::{
    parse_iso_date, parse_quick_route, render, search, FlightQuery, McpFlightsClient, SearchOptions,
    SearchReport, ServiceConfig, SortBy, TravelDates, ViewMode, DEFAULT_LIMIT,
    DEFAULT_SERVER_COMMAND, DEFAULT_TIMEOUT_SECS,
};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "travel-cli")]
#[command(author, version, about = "CLI tool for searching flights using Google Flights MCP", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the search report as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Currency symbol used in the summary price range
    #[arg(long, global = true, default_value = "₹")]
    currency: String,

    /// Command line that starts the flight MCP server
    #[arg(long, global = true, env = "TRAVEL_CLI_MCP_SERVER", default_value = DEFAULT_SERVER_COMMAND)]
    server: String,

    /// Seconds to wait for the flight service to start and to answer
    #[arg(long, global = true, env = "TRAVEL_CLI_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for one-way flights
    Search(OneWayArgs),
    /// Search for round-trip flights
    Roundtrip(RoundTripArgs),
    /// Compare flights across a date range
    Compare(CompareArgs),
    /// Quick search for common routes (e.g., "blr-del tomorrow")
    Quick {
        /// <from>-<to> [today|tomorrow|YYYY-MM-DD]
        route: String,
    },
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Origin airport code (e.g., BLR)
    #[arg(short, long)]
    from: String,

    /// Destination airport code (e.g., SFO)
    #[arg(short, long)]
    to: String,

    /// Number of passengers
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    passengers: u32,

    /// Seat class (economy/business)
    #[arg(short, long = "class", default_value = "economy")]
    class: String,

    /// Ask the service for the cheapest options only
    #[arg(long)]
    cheapest: bool,
}

#[derive(Args, Debug)]
struct ListingArgs {
    /// Sort by (price/duration)
    #[arg(short, long, default_value = "price")]
    sort: String,

    /// Show all flights
    #[arg(short, long)]
    all: bool,

    /// Number of results to show
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,
}

#[derive(Args, Debug)]
struct OneWayArgs {
    #[command(flatten)]
    route: RouteArgs,

    /// Travel date (YYYY-MM-DD)
    #[arg(short, long)]
    date: String,

    #[command(flatten)]
    listing: ListingArgs,

    /// Show only the fastest flight
    #[arg(long)]
    fastest: bool,
}

#[derive(Args, Debug)]
struct RoundTripArgs {
    #[command(flatten)]
    route: RouteArgs,

    /// Departure date (YYYY-MM-DD)
    #[arg(short = 'd', long)]
    depart: String,

    /// Return date (YYYY-MM-DD)
    #[arg(short = 'r', long = "return")]
    return_date: String,

    #[command(flatten)]
    listing: ListingArgs,
}

#[derive(Args, Debug)]
struct CompareArgs {
    #[command(flatten)]
    route: RouteArgs,

    /// Start date of range (YYYY-MM-DD)
    #[arg(long)]
    start: String,

    /// End date of range (YYYY-MM-DD)
    #[arg(long)]
    end: String,

    /// Minimum stay duration in days
    #[arg(long)]
    min_stay: Option<u32>,

    /// Maximum stay duration in days
    #[arg(long)]
    max_stay: Option<u32>,
}

/// Configure logging based on verbosity level. Logs go to stderr, results to stdout.
fn setup_logging(verbose: bool) {
    let default_filter = if verbose {
        "travel_cli=debug,flight_results=debug,info"
    } else {
        "travel_cli=info,flight_results=info,warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

fn build_query(route: &RouteArgs, dates: TravelDates) -> Result<FlightQuery> {
    let query = FlightQuery::builder(&route.from, &route.to, dates)
        .adults(route.passengers)
        .seat_type(&route.class)
        .cheapest_only(route.cheapest)
        .build()?;
    Ok(query)
}

fn listing_options(listing: &ListingArgs, fastest: bool) -> SearchOptions {
    let limit = listing.limit.map(|l| l as usize);
    SearchOptions {
        sort_by: SortBy::from_name(&listing.sort),
        view: ViewMode::from_flags(fastest, listing.all, limit, DEFAULT_LIMIT),
    }
}

/// Validate the command into a query before anything is spawned.
fn plan(command: &Command) -> Result<(FlightQuery, SearchOptions)> {
    match command {
        Command::Search(args) => {
            let date = parse_iso_date(&args.date)?;
            let query = build_query(&args.route, TravelDates::OneWay { date })?;
            Ok((query, listing_options(&args.listing, args.fastest)))
        }
        Command::Roundtrip(args) => {
            let dates = TravelDates::RoundTrip {
                departure_date: parse_iso_date(&args.depart)?,
                return_date: parse_iso_date(&args.return_date)?,
            };
            let query = build_query(&args.route, dates)?;
            Ok((query, listing_options(&args.listing, false)))
        }
        Command::Compare(args) => {
            let dates = TravelDates::DateRange {
                start: parse_iso_date(&args.start)?,
                end: parse_iso_date(&args.end)?,
                min_stay_days: args.min_stay,
                max_stay_days: args.max_stay,
            };
            let query = build_query(&args.route, dates)?;
            Ok((query, SearchOptions::compare()))
        }
        Command::Quick { route } => {
            let today = chrono::Local::now().date_naive();
            let query = parse_quick_route(route, today)?;
            Ok((query, SearchOptions::quick()))
        }
    }
}

async fn run_search(
    config: &ServiceConfig,
    query: &FlightQuery,
    options: &SearchOptions,
) -> Result<SearchReport> {
    let client = McpFlightsClient::connect(config)
        .await
        .context("Failed to start flight service")?;

    let outcome = search(&client, query, options).await;

    if let Err(e) = client.close().await {
        tracing::warn!("Flight service did not shut down cleanly: {}", e);
    }

    outcome.context("Failed to search flights")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Usage errors share exit status 1 with every other failure
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };
    setup_logging(cli.verbose);

    tracing::debug!("Args: {:?}", cli);

    let (query, options) = plan(&cli.command).context("Invalid search")?;
    tracing::debug!(
        "Parsed request: {} -> {} ({:?}, {:?})",
        query.origin,
        query.destination,
        query.dates,
        options
    );

    let config = ServiceConfig::from_command_line(&cli.server, Duration::from_secs(cli.timeout))?;
    let report = run_search(&config, &query, &options).await?;

    tracing::info!(
        "Found {} flights, showing {}",
        report.summary.total,
        report.flights.len()
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print!(
            "{}",
            render::render_report(&report, &cli.currency, render::terminal_width())
        );
    }

    Ok(())
}
