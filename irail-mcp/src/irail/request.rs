//! iRail request descriptions.
//!
//! A request is an endpoint plus its query parameters. Keeping it as plain
//! data lets the cache key on exactly what would be sent.

use chrono::{NaiveDate, NaiveDateTime};

/// iRail API endpoints used by the tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Liveboard,
    Connections,
    Vehicle,
    Disturbances,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Liveboard => "/liveboard/",
            Endpoint::Connections => "/connections/",
            Endpoint::Vehicle => "/vehicle/",
            Endpoint::Disturbances => "/disturbances/",
        }
    }
}

/// Which side of a station's board to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardKind {
    #[default]
    Departures,
    Arrivals,
}

impl BoardKind {
    fn arrdep(self) -> &'static str {
        match self {
            BoardKind::Departures => "departure",
            BoardKind::Arrivals => "arrival",
        }
    }

    /// Heading used when displaying the board.
    pub fn label(self) -> &'static str {
        match self {
            BoardKind::Departures => "Departures",
            BoardKind::Arrivals => "Arrivals",
        }
    }
}

/// Whether a connection query time is a departure or an arrival time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSelection {
    #[default]
    Depart,
    Arrive,
}

impl TimeSelection {
    fn time_sel(self) -> &'static str {
        match self {
            TimeSelection::Depart => "depart",
            TimeSelection::Arrive => "arrive",
        }
    }
}

/// A fully specified iRail request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrailRequest {
    endpoint: Endpoint,
    params: Vec<(&'static str, String)>,
}

/// iRail dates are `ddmmyy`.
fn api_date(date: NaiveDate) -> String {
    date.format("%d%m%y").to_string()
}

/// iRail times are `HHMM`.
fn api_time(when: NaiveDateTime) -> String {
    when.format("%H%M").to_string()
}

impl IrailRequest {
    /// Departures or arrivals at a station around `when`.
    pub fn liveboard(station: &str, when: NaiveDateTime, board: BoardKind, lang: &str) -> Self {
        Self {
            endpoint: Endpoint::Liveboard,
            params: vec![
                ("station", station.to_string()),
                ("date", api_date(when.date())),
                ("time", api_time(when)),
                ("arrdep", board.arrdep().to_string()),
                ("lang", lang.to_string()),
            ],
        }
    }

    /// Routes between two stations around `when`.
    pub fn connections(
        from: &str,
        to: &str,
        when: NaiveDateTime,
        selection: TimeSelection,
        lang: &str,
    ) -> Self {
        Self {
            endpoint: Endpoint::Connections,
            params: vec![
                ("from", from.to_string()),
                ("to", to.to_string()),
                ("date", api_date(when.date())),
                ("time", api_time(when)),
                ("timeSel", selection.time_sel().to_string()),
                ("lang", lang.to_string()),
            ],
        }
    }

    /// Stops of one train on one day.
    pub fn vehicle(id: &str, date: NaiveDate, lang: &str) -> Self {
        Self {
            endpoint: Endpoint::Vehicle,
            params: vec![
                ("id", id.to_string()),
                ("date", api_date(date)),
                ("lang", lang.to_string()),
            ],
        }
    }

    /// Current disturbances and planned works.
    pub fn disturbances(lang: &str) -> Self {
        Self {
            endpoint: Endpoint::Disturbances,
            params: vec![("lang", lang.to_string())],
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Look up a parameter value by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Stable key identifying this request for caching.
    pub fn cache_key(&self) -> String {
        let query: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        format!("{}?{}", self.endpoint.path(), query.join("&"))
    }
}
