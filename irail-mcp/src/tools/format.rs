//! One-line renderings of iRail records.
//!
//! Clock times are shown in the time zone passed in, so callers choose
//! between local time and a fixed zone.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::irail::{Connection, TimedStop, VehicleStop};
use crate::stations::StationRecord;

/// "HH:MM" for a Unix timestamp.
pub fn clock<Tz>(timestamp: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.with_timezone(tz).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Like [`clock`], but zero means "no time".
fn optional_clock<Tz>(timestamp: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if timestamp == 0 {
        "--:--".to_string()
    } else {
        clock(timestamp, tz)
    }
}

fn delay_suffix(minutes: i64) -> String {
    if minutes != 0 {
        format!(" (+{minutes}min)")
    } else {
        String::new()
    }
}

fn canceled_suffix(canceled: bool) -> &'static str {
    if canceled { " [CANCELED]" } else { "" }
}

/// `• name (alternatives) - Coordinates: lat, lon`
///
/// Coordinates are printed as stored, so a record without them shows an
/// empty pair.
pub fn station_line(station: &StationRecord) -> String {
    let alternatives: Vec<&str> = station.alternative_names().collect();
    let alternatives = if alternatives.is_empty() {
        String::new()
    } else {
        format!(" ({})", alternatives.join(", "))
    };

    format!(
        "• {}{} - Coordinates: {}, {}",
        station.name,
        alternatives,
        station.latitude,
        station.longitude
    )
}

/// `HH:MM (+Nmin) to DEST (Platform P, VEHICLE) [CANCELED]`
pub fn board_line<Tz>(entry: &TimedStop, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}{} to {} (Platform {}, {}){}",
        clock(entry.time, tz),
        delay_suffix(entry.delay_minutes()),
        entry.station_name().unwrap_or("Unknown"),
        entry.platform.as_deref().unwrap_or("?"),
        entry.vehicle,
        canceled_suffix(entry.canceled)
    )
}

/// `HH:MM (+Nmin)→HH:MM (Dmin, Direct, Platform P, VEHICLE)`
pub fn connection_line<Tz>(connection: &Connection, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let transfers = match connection.transfers() {
        0 => "Direct".to_string(),
        n => format!("{n} transfer(s)"),
    };
    let departure = &connection.departure;

    format!(
        "{}{}→{} ({}min, {}, Platform {}, {})",
        clock(departure.time, tz),
        delay_suffix(departure.delay_minutes()),
        clock(connection.arrival.time, tz),
        connection.duration_minutes(),
        transfers,
        departure.platform.as_deref().unwrap_or("?"),
        departure.vehicle
    )
}

/// `• STATION: HH:MM→HH:MM (+Nmin) (Pl. P) [CANCELED]`
pub fn stop_line<Tz>(stop: &VehicleStop, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "• {}: {}→{}{} (Pl. {}){}",
        stop.station_name().unwrap_or("Unknown"),
        optional_clock(stop.arrival_time(), tz),
        optional_clock(stop.departure_time(), tz),
        delay_suffix(stop.delay_minutes()),
        stop.platform.as_deref().unwrap_or("?"),
        canceled_suffix(stop.is_canceled())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    // 2024-02-07 14:30:00 UTC
    const T: i64 = 1_707_316_200;

    fn stop(json: &str) -> TimedStop {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn clock_uses_time_zone() {
        assert_eq!(clock(T, &Utc), "14:30");
        let brussels_winter = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(clock(T, &brussels_winter), "15:30");
    }

    #[test]
    fn station_line_with_alternatives() {
        let station = StationRecord {
            name: "Brussels-Central".into(),
            alternative_fr: "Bruxelles-Central".into(),
            alternative_nl: "Brussel-Centraal".into(),
            latitude: "50.845658".into(),
            longitude: "4.356801".into(),
            ..Default::default()
        };
        assert_eq!(
            station_line(&station),
            "• Brussels-Central (Bruxelles-Central, Brussel-Centraal) - Coordinates: 50.845658, 4.356801"
        );
    }

    #[test]
    fn station_line_without_alternatives_or_coordinates() {
        let station = StationRecord {
            name: "Mol".into(),
            ..Default::default()
        };
        assert_eq!(station_line(&station), "• Mol - Coordinates: , ");
    }

    #[test]
    fn board_line_full() {
        let entry = stop(&format!(
            r#"{{"station": "Antwerpen-Centraal", "stationinfo": {{"name": "Antwerp-Central"}}, "time": "{T}", "delay": "300", "platform": "3", "vehicle": "BE.NMBS.IC1832", "canceled": "1"}}"#
        ));
        assert_eq!(
            board_line(&entry, &Utc),
            "14:30 (+5min) to Antwerp-Central (Platform 3, BE.NMBS.IC1832) [CANCELED]"
        );
    }

    #[test]
    fn board_line_defaults() {
        let entry = stop(&format!(r#"{{"time": "{T}", "vehicle": "BE.NMBS.L123"}}"#));
        assert_eq!(
            board_line(&entry, &Utc),
            "14:30 to Unknown (Platform ?, BE.NMBS.L123)"
        );
    }

    #[test]
    fn early_trains_round_down() {
        let entry = stop(&format!(
            r#"{{"time": "{T}", "delay": "-30", "platform": "2", "vehicle": "BE.NMBS.IC1"}}"#
        ));
        assert_eq!(entry.delay_minutes(), -1);
        assert_eq!(
            board_line(&entry, &Utc),
            "14:30 (+-1min) to Unknown (Platform 2, BE.NMBS.IC1)"
        );

        let stop: VehicleStop = serde_json::from_str(&format!(
            r#"{{"station": "Gent", "time": "{T}", "departureDelay": "-90"}}"#
        ))
        .unwrap();
        assert_eq!(stop_line(&stop, &Utc), "• Gent: 14:30→14:30 (+-2min) (Pl. ?)");
    }

    #[test]
    fn connection_lines() {
        let direct: Connection = serde_json::from_str(&format!(
            r#"{{"departure": {{"time": "{T}", "delay": "60", "platform": "2", "vehicle": "BE.NMBS.IC1832"}},
                "arrival": {{"time": "{}"}}, "duration": "2700"}}"#,
            T + 2700
        ))
        .unwrap();
        assert_eq!(
            connection_line(&direct, &Utc),
            "14:30 (+1min)→15:15 (45min, Direct, Platform 2, BE.NMBS.IC1832)"
        );

        let with_change: Connection = serde_json::from_str(&format!(
            r#"{{"departure": {{"time": "{T}", "vehicle": "BE.NMBS.IC1"}},
                "arrival": {{"time": "{}"}}, "duration": "5400",
                "vias": {{"number": "2", "via": []}}}}"#,
            T + 5400
        ))
        .unwrap();
        assert_eq!(
            connection_line(&with_change, &Utc),
            "14:30→16:00 (90min, 2 transfer(s), Platform ?, BE.NMBS.IC1)"
        );
    }

    #[test]
    fn stop_line_origin_has_no_arrival() {
        let origin: VehicleStop = serde_json::from_str(&format!(
            r#"{{"station": "Oostende", "time": "{T}", "scheduledArrivalTime": "0", "scheduledDepartureTime": "{T}", "platform": "6"}}"#
        ))
        .unwrap();
        assert_eq!(
            stop_line(&origin, &Utc),
            "• Oostende: --:--→14:30 (Pl. 6)"
        );
    }

    #[test]
    fn stop_line_delayed_and_canceled() {
        let stop: VehicleStop = serde_json::from_str(&format!(
            r#"{{"station": "Brugge", "time": "{T}", "arrivalDelay": "180", "arrivalCanceled": "1"}}"#
        ))
        .unwrap();
        assert_eq!(
            stop_line(&stop, &Utc),
            "• Brugge: 14:30→14:30 (+3min) (Pl. ?) [CANCELED]"
        );
    }
}
