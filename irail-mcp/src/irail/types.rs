//! iRail API response models.
//!
//! These map the JSON returned by the iRail v1 API. Every struct defaults
//! missing fields, since iRail omits fields freely, and numeric or boolean
//! values go through the lenient deserializers in `de`.

use serde::{Deserialize, Deserializer};

use super::de;
use super::request::BoardKind;

/// Station details embedded in most responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StationInfo {
    /// Display name in the requested language.
    #[serde(deserialize_with = "de::text")]
    pub name: String,

    /// Official (local language) name.
    #[serde(deserialize_with = "de::text")]
    pub standardname: String,

    /// iRail station ID, e.g. "BE.NMBS.008813003".
    #[serde(deserialize_with = "de::text")]
    pub id: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InfoOrName {
    Info(StationInfo),
    Name(String),
}

/// `stationinfo` is usually an object, occasionally just a name.
fn station_info<'de, D: Deserializer<'de>>(d: D) -> Result<Option<StationInfo>, D::Error> {
    Ok(match Option::<InfoOrName>::deserialize(d)? {
        Some(InfoOrName::Info(info)) => Some(info),
        Some(InfoOrName::Name(name)) => Some(StationInfo {
            name,
            ..Default::default()
        }),
        None => None,
    })
}

/// Prefer the structured name, then the bare station string.
fn display_name<'a>(info: Option<&'a StationInfo>, station: &'a str) -> Option<&'a str> {
    info.map(|i| i.name.as_str())
        .filter(|n| !n.is_empty())
        .or(Some(station).filter(|s| !s.is_empty()))
}

/// A train calling at a station: a liveboard entry or one end of a
/// connection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TimedStop {
    /// Station name (the destination, for liveboard entries).
    #[serde(deserialize_with = "de::text")]
    pub station: String,

    #[serde(deserialize_with = "station_info")]
    pub stationinfo: Option<StationInfo>,

    /// Scheduled time as a Unix timestamp.
    #[serde(deserialize_with = "de::int")]
    pub time: i64,

    /// Delay in seconds.
    #[serde(deserialize_with = "de::int")]
    pub delay: i64,

    #[serde(deserialize_with = "de::opt_text")]
    pub platform: Option<String>,

    #[serde(deserialize_with = "de::flag")]
    pub canceled: bool,

    /// Vehicle ID, e.g. "BE.NMBS.IC1832".
    #[serde(deserialize_with = "de::text")]
    pub vehicle: String,
}

impl TimedStop {
    pub fn station_name(&self) -> Option<&str> {
        display_name(self.stationinfo.as_ref(), &self.station)
    }

    /// Delay in whole minutes, rounded down.
    pub fn delay_minutes(&self) -> i64 {
        self.delay.div_euclid(60)
    }
}

/// Response of `/liveboard/`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Liveboard {
    #[serde(deserialize_with = "de::text")]
    pub station: String,

    #[serde(deserialize_with = "station_info")]
    pub stationinfo: Option<StationInfo>,

    pub departures: Option<DepartureList>,

    pub arrivals: Option<ArrivalList>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DepartureList {
    #[serde(deserialize_with = "de::one_or_many")]
    pub departure: Vec<TimedStop>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArrivalList {
    #[serde(deserialize_with = "de::one_or_many")]
    pub arrival: Vec<TimedStop>,
}

impl Liveboard {
    pub fn station_name(&self) -> Option<&str> {
        display_name(self.stationinfo.as_ref(), &self.station)
    }

    /// Entries for one side of the board.
    pub fn entries(&self, board: BoardKind) -> &[TimedStop] {
        match board {
            BoardKind::Departures => self
                .departures
                .as_ref()
                .map_or(&[][..], |d| d.departure.as_slice()),
            BoardKind::Arrivals => self
                .arrivals
                .as_ref()
                .map_or(&[][..], |a| a.arrival.as_slice()),
        }
    }
}

/// Response of `/connections/`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Connections {
    #[serde(deserialize_with = "de::one_or_many")]
    pub connection: Vec<Connection>,
}

/// One route option between two stations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Connection {
    pub departure: TimedStop,

    pub arrival: TimedStop,

    /// Total travel time in seconds.
    #[serde(deserialize_with = "de::int")]
    pub duration: i64,

    /// Transfers; absent for direct trains.
    pub vias: Option<Vias>,
}

impl Connection {
    /// Number of changes along the route.
    pub fn transfers(&self) -> usize {
        self.vias.as_ref().map_or(0, |v| {
            usize::try_from(v.number)
                .ok()
                .filter(|n| *n > 0)
                .unwrap_or(v.via.len())
        })
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration.div_euclid(60)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Vias {
    #[serde(deserialize_with = "de::int")]
    pub number: i64,

    #[serde(deserialize_with = "de::one_or_many")]
    pub via: Vec<Via>,
}

/// A transfer station within a connection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Via {
    #[serde(deserialize_with = "de::text")]
    pub station: String,

    #[serde(deserialize_with = "station_info")]
    pub stationinfo: Option<StationInfo>,

    pub arrival: TimedStop,

    pub departure: TimedStop,

    /// Transfer time in seconds.
    #[serde(deserialize_with = "de::int")]
    pub timebetween: i64,
}

/// Response of `/vehicle/`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VehicleJourney {
    /// Vehicle ID, e.g. "BE.NMBS.IC1832".
    #[serde(deserialize_with = "de::text")]
    pub vehicle: String,

    pub vehicleinfo: Option<VehicleInfo>,

    pub stops: Option<StopList>,
}

impl VehicleJourney {
    pub fn stops(&self) -> &[VehicleStop] {
        self.stops.as_ref().map_or(&[][..], |s| s.stop.as_slice())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VehicleInfo {
    #[serde(deserialize_with = "de::text")]
    pub name: String,

    #[serde(deserialize_with = "de::text")]
    pub shortname: String,

    #[serde(rename = "type", deserialize_with = "de::text")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StopList {
    #[serde(deserialize_with = "de::one_or_many")]
    pub stop: Vec<VehicleStop>,
}

/// One stop of a train's run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleStop {
    #[serde(deserialize_with = "de::text")]
    pub station: String,

    #[serde(deserialize_with = "station_info")]
    pub stationinfo: Option<StationInfo>,

    #[serde(deserialize_with = "de::int")]
    pub time: i64,

    #[serde(deserialize_with = "de::opt_text")]
    pub platform: Option<String>,

    #[serde(deserialize_with = "de::opt_int")]
    pub scheduled_departure_time: Option<i64>,

    #[serde(deserialize_with = "de::opt_int")]
    pub scheduled_arrival_time: Option<i64>,

    #[serde(deserialize_with = "de::opt_int")]
    pub departure_delay: Option<i64>,

    #[serde(deserialize_with = "de::opt_int")]
    pub arrival_delay: Option<i64>,

    #[serde(deserialize_with = "de::flag")]
    pub departure_canceled: bool,

    #[serde(deserialize_with = "de::flag")]
    pub arrival_canceled: bool,
}

impl VehicleStop {
    pub fn station_name(&self) -> Option<&str> {
        display_name(self.stationinfo.as_ref(), &self.station)
    }

    /// Scheduled arrival, falling back to the stop time. Zero means none.
    pub fn arrival_time(&self) -> i64 {
        self.scheduled_arrival_time.unwrap_or(self.time)
    }

    /// Scheduled departure, falling back to the stop time. Zero means none.
    pub fn departure_time(&self) -> i64 {
        self.scheduled_departure_time.unwrap_or(self.time)
    }

    /// Departure delay if known, else arrival delay, in whole minutes.
    pub fn delay_minutes(&self) -> i64 {
        self.departure_delay
            .or(self.arrival_delay)
            .unwrap_or(0)
            .div_euclid(60)
    }

    pub fn is_canceled(&self) -> bool {
        self.departure_canceled || self.arrival_canceled
    }
}

/// Response of `/disturbances/`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Disturbances {
    #[serde(deserialize_with = "de::one_or_many")]
    pub disturbance: Vec<Disturbance>,

    /// Some responses list planned works separately.
    #[serde(deserialize_with = "de::one_or_many")]
    pub planned: Vec<Disturbance>,
}

impl Disturbances {
    /// Unplanned disruptions.
    pub fn current(&self) -> Vec<&Disturbance> {
        self.disturbance
            .iter()
            .filter(|d| d.kind != DisturbanceKind::Planned)
            .collect()
    }

    /// Planned works, whichever list they came in.
    pub fn planned_works(&self) -> Vec<&Disturbance> {
        self.disturbance
            .iter()
            .filter(|d| d.kind == DisturbanceKind::Planned)
            .chain(self.planned.iter())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisturbanceKind {
    #[default]
    Disturbance,
    Planned,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Disturbance {
    #[serde(deserialize_with = "de::text")]
    pub title: String,

    #[serde(deserialize_with = "de::text")]
    pub description: String,

    #[serde(deserialize_with = "de::text")]
    pub link: String,

    #[serde(rename = "type")]
    pub kind: DisturbanceKind,

    /// Unix timestamp of the last update.
    #[serde(deserialize_with = "de::int")]
    pub timestamp: i64,
}
