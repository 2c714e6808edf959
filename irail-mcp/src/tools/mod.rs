//! Agent tools over iRail data.
//!
//! Station search answers from the bundled offline index; every other
//! tool goes through the cached iRail client. Handlers return plain text,
//! and failures come back as error-flagged text rather than aborting the
//! call.

mod args;
mod datetime;
mod definitions;
mod error;
pub mod format;
mod views;

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cache::CachedIrailClient;
use crate::irail::{BoardKind, TimeSelection};
use crate::stations::StationIndex;

pub use args::{ConnectionsArgs, DisturbancesArgs, LiveboardArgs, SearchStationsArgs, TrainInfoArgs};
pub use datetime::parse_datetime;
pub use definitions::{Tool, ToolDefinition, tool_definitions};
pub use error::ToolError;

/// Text result of a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Shared state for tool handlers.
#[derive(Clone)]
pub struct ToolContext {
    stations: Arc<StationIndex>,
    irail: Arc<CachedIrailClient>,
    clock: fn() -> NaiveDateTime,
}

impl ToolContext {
    pub fn new(stations: Arc<StationIndex>, irail: Arc<CachedIrailClient>) -> Self {
        Self {
            stations,
            irail,
            clock: local_now,
        }
    }

    /// Replace the source of "now" used for relative dates.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn stations(&self) -> &StationIndex {
        &self.stations
    }

    pub fn irail(&self) -> &CachedIrailClient {
        &self.irail
    }

    /// Run a tool by name.
    pub async fn call(&self, name: &str, arguments: Value) -> ToolOutput {
        let Some(tool) = Tool::from_name(name) else {
            tracing::warn!(tool = name, "unknown tool");
            return ToolOutput::error(ToolError::UnknownTool(name.to_string()).to_string());
        };

        match self.run(tool, arguments).await {
            Ok(text) => ToolOutput::text(text),
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool call failed");
                ToolOutput::error(describe_error(tool, &e))
            }
        }
    }

    async fn run(&self, tool: Tool, arguments: Value) -> Result<String, ToolError> {
        match tool {
            Tool::SearchStations => self.search_stations(parse_args(arguments)?),
            Tool::Liveboard => self.liveboard(parse_args(arguments)?).await,
            Tool::FindConnections => self.find_connections(parse_args(arguments)?).await,
            Tool::TrainInfo => self.train_info(parse_args(arguments)?).await,
            Tool::Disturbances => self.disturbances(parse_args(arguments)?).await,
        }
    }

    fn search_stations(&self, args: SearchStationsArgs) -> Result<String, ToolError> {
        if args.query.is_empty() {
            return Err(ToolError::MissingArgument("query"));
        }
        let matches = self.stations.search(&args.query);
        Ok(views::station_search(&args.query, &matches)?)
    }

    async fn liveboard(&self, args: LiveboardArgs) -> Result<String, ToolError> {
        if args.station.is_empty() {
            return Err(ToolError::MissingArgument("station"));
        }
        let when = parse_datetime(args.date.as_deref(), args.time.as_deref(), (self.clock)())?;
        let kind = if args.arrival {
            BoardKind::Arrivals
        } else {
            BoardKind::Departures
        };

        let board = self
            .irail
            .liveboard(&args.station, when, kind, &args.lang)
            .await?;
        Ok(views::liveboard(&board, kind, &args.station, when, &Local)?)
    }

    async fn find_connections(&self, args: ConnectionsArgs) -> Result<String, ToolError> {
        if args.from_station.is_empty() || args.to_station.is_empty() {
            return Err(ToolError::MissingStations);
        }
        let when = parse_datetime(args.date.as_deref(), args.time.as_deref(), (self.clock)())?;
        let selection = if args.arrival_time {
            TimeSelection::Arrive
        } else {
            TimeSelection::Depart
        };

        let result = self
            .irail
            .connections(&args.from_station, &args.to_station, when, selection, &args.lang)
            .await?;
        Ok(views::connections(
            &result,
            &args.from_station,
            &args.to_station,
            args.arrival_time,
            when,
            &Local,
        )?)
    }

    async fn train_info(&self, args: TrainInfoArgs) -> Result<String, ToolError> {
        if args.train_id.is_empty() {
            return Err(ToolError::MissingArgument("train_id"));
        }
        let date = parse_datetime(args.date.as_deref(), None, (self.clock)())?.date();

        let journey = self.irail.vehicle(&args.train_id, date, &args.lang).await?;
        Ok(views::train_info(&journey, &args.train_id, date, &Local)?)
    }

    async fn disturbances(&self, args: DisturbancesArgs) -> Result<String, ToolError> {
        let result = self.irail.disturbances(&args.lang).await?;
        Ok(views::disturbances(&result)?)
    }
}

/// Missing arguments are written `{}` (omitted) or `null` by some clients.
fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    Ok(serde_json::from_value(arguments)?)
}

fn describe_error(tool: Tool, error: &ToolError) -> String {
    match error {
        ToolError::MissingArgument(_)
        | ToolError::MissingStations
        | ToolError::InvalidArguments(_) => format!("Error: {error}"),
        _ => format!("{}: {error}", tool.error_context()),
    }
}
