//! Text responses, rendered from the templates in `templates/`.

use std::fmt::Display;

use askama::Template;
use chrono::{NaiveDate, NaiveDateTime, TimeZone};

use crate::irail::{BoardKind, Connections, Disturbance, Disturbances, Liveboard, VehicleJourney};
use crate::stations::StationRecord;

use super::format;

const MAX_STATIONS: usize = 10;
const MAX_BOARD_ENTRIES: usize = 15;
const MAX_CONNECTIONS: usize = 10;
const MAX_STOPS: usize = 20;
const MAX_NOTICES: usize = 5;

/// Format the first `max` items and count the rest.
fn capped<T>(items: &[T], max: usize, line: impl Fn(&T) -> String) -> (Vec<String>, usize) {
    let lines = items.iter().take(max).map(line).collect();
    (lines, items.len().saturating_sub(max))
}

fn render(template: &impl Template) -> askama::Result<String> {
    Ok(template.render()?.trim_end().to_string())
}

#[derive(Template)]
#[template(path = "station_search.txt", escape = "none")]
struct StationSearchView<'a> {
    query: &'a str,
    total: usize,
    lines: Vec<String>,
    more: usize,
}

#[derive(Template)]
#[template(path = "liveboard.txt", escape = "none")]
struct LiveboardView<'a> {
    label: &'static str,
    station: &'a str,
    when: String,
    lines: Vec<String>,
    more: usize,
}

#[derive(Template)]
#[template(path = "connections.txt", escape = "none")]
struct ConnectionsView<'a> {
    origin: &'a str,
    destination: &'a str,
    mode: &'static str,
    when: String,
    lines: Vec<String>,
    more: usize,
}

#[derive(Template)]
#[template(path = "train_info.txt", escape = "none")]
struct TrainInfoView<'a> {
    vehicle: &'a str,
    date: String,
    total: usize,
    lines: Vec<String>,
    more: usize,
}

struct Notice<'a> {
    title: &'a str,
    description: &'a str,
}

impl<'a> Notice<'a> {
    fn from_disturbance(d: &'a Disturbance) -> Self {
        Self {
            title: if d.title.is_empty() {
                "Unknown"
            } else {
                d.title.as_str()
            },
            description: d.description.trim(),
        }
    }
}

#[derive(Template)]
#[template(path = "disturbances.txt", escape = "none")]
struct DisturbancesView<'a> {
    disturbances: Vec<Notice<'a>>,
    works: Vec<Notice<'a>>,
}

/// Search results; `matches` is every match, in dataset order.
pub fn station_search(query: &str, matches: &[&StationRecord]) -> askama::Result<String> {
    if matches.is_empty() {
        return Ok(format!("No stations found matching '{query}'"));
    }
    let (lines, more) = capped(matches, MAX_STATIONS, |s| format::station_line(s));
    render(&StationSearchView {
        query,
        total: matches.len(),
        lines,
        more,
    })
}

/// A station's departures or arrivals. `requested` names the station when
/// the response does not.
pub fn liveboard<Tz>(
    board: &Liveboard,
    kind: BoardKind,
    requested: &str,
    when: NaiveDateTime,
    tz: &Tz,
) -> askama::Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (lines, more) = capped(board.entries(kind), MAX_BOARD_ENTRIES, |e| {
        format::board_line(e, tz)
    });
    render(&LiveboardView {
        label: kind.label(),
        station: board.station_name().unwrap_or(requested),
        when: when.format("%Y-%m-%d %H:%M").to_string(),
        lines,
        more,
    })
}

/// Route options between two stations.
pub fn connections<Tz>(
    result: &Connections,
    origin: &str,
    destination: &str,
    arriving: bool,
    when: NaiveDateTime,
    tz: &Tz,
) -> askama::Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (lines, more) = capped(&result.connection, MAX_CONNECTIONS, |c| {
        format::connection_line(c, tz)
    });
    render(&ConnectionsView {
        origin,
        destination,
        mode: if arriving { "arriving at" } else { "departing from" },
        when: when.format("%Y-%m-%d %H:%M").to_string(),
        lines,
        more,
    })
}

/// A train's stops. `requested` names the train when the response does not.
pub fn train_info<Tz>(
    journey: &VehicleJourney,
    requested: &str,
    date: NaiveDate,
    tz: &Tz,
) -> askama::Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let stops = journey.stops();
    let (lines, more) = capped(stops, MAX_STOPS, |s| format::stop_line(s, tz));
    let vehicle = if journey.vehicle.is_empty() {
        requested
    } else {
        &journey.vehicle
    };
    render(&TrainInfoView {
        vehicle,
        date: date.format("%Y-%m-%d").to_string(),
        total: stops.len(),
        lines,
        more,
    })
}

fn notices(items: Vec<&Disturbance>) -> Vec<Notice<'_>> {
    items
        .into_iter()
        .take(MAX_NOTICES)
        .map(Notice::from_disturbance)
        .collect()
}

/// Current disruptions, then planned works.
pub fn disturbances(result: &Disturbances) -> askama::Result<String> {
    render(&DisturbancesView {
        disturbances: notices(result.current()),
        works: notices(result.planned_works()),
    })
}
