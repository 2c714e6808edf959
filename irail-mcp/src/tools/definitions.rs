//! The tool catalogue advertised to clients.

use serde::Serialize;
use serde_json::{Value, json};

/// Tools this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    SearchStations,
    Liveboard,
    FindConnections,
    TrainInfo,
    Disturbances,
}

/// A tool as listed by `tools/list`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

fn lang_property() -> Value {
    json!({
        "type": "string",
        "description": "Language code (en, nl, fr, de, it)",
        "default": "en"
    })
}

fn date_property() -> Value {
    json!({
        "type": "string",
        "description": "Date in format YYYY-MM-DD or relative (today, tomorrow, +2 days)"
    })
}

fn time_property() -> Value {
    json!({
        "type": "string",
        "description": "Time in 24-hour format (e.g., '14:30')"
    })
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::SearchStations,
        Tool::Liveboard,
        Tool::FindConnections,
        Tool::TrainInfo,
        Tool::Disturbances,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::SearchStations => "search_stations",
            Tool::Liveboard => "get_liveboard",
            Tool::FindConnections => "find_connections",
            Tool::TrainInfo => "get_train_info",
            Tool::Disturbances => "get_disturbances",
        }
    }

    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Prefix for failures reported back to the caller.
    pub fn error_context(self) -> &'static str {
        match self {
            Tool::SearchStations => "Error",
            Tool::Liveboard => "Error fetching liveboard",
            Tool::FindConnections => "Error finding connections",
            Tool::TrainInfo => "Error fetching train info",
            Tool::Disturbances => "Error fetching disturbances",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::SearchStations => "Search for railway stations in Belgium by name",
            Tool::Liveboard => "Get real-time departures or arrivals from a station",
            Tool::FindConnections => "Find routes between two stations with connection details",
            Tool::TrainInfo => {
                "Get detailed information about a specific train including all stops and current delays"
            }
            Tool::Disturbances => "Get current network disruptions and planned maintenance works",
        }
    }

    /// JSON Schema for the tool's arguments.
    pub fn input_schema(self) -> Value {
        match self {
            Tool::SearchStations => json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Station name or partial name to search for (e.g., 'Brussels', 'Antwerp')"
                    },
                    "lang": lang_property()
                },
                "required": ["query"]
            }),
            Tool::Liveboard => json!({
                "type": "object",
                "properties": {
                    "station": {
                        "type": "string",
                        "description": "Station name or URI (e.g., 'Brussels Central', 'Gent-Sint-Pieters')"
                    },
                    "date": date_property(),
                    "time": time_property(),
                    "arrival": {
                        "type": "boolean",
                        "description": "If true, show arrivals; if false, show departures (default: false)",
                        "default": false
                    },
                    "lang": lang_property()
                },
                "required": ["station"]
            }),
            Tool::FindConnections => json!({
                "type": "object",
                "properties": {
                    "from_station": {
                        "type": "string",
                        "description": "Departure station name (e.g., 'Brussels')"
                    },
                    "to_station": {
                        "type": "string",
                        "description": "Destination station name (e.g., 'Antwerp')"
                    },
                    "date": date_property(),
                    "time": time_property(),
                    "arrival_time": {
                        "type": "boolean",
                        "description": "If true, time is arrival time; if false, time is departure time (default: false)",
                        "default": false
                    },
                    "lang": lang_property()
                },
                "required": ["from_station", "to_station"]
            }),
            Tool::TrainInfo => json!({
                "type": "object",
                "properties": {
                    "train_id": {
                        "type": "string",
                        "description": "Train ID from liveboard results (e.g., 'IC1234' or 'BE.NMBS.IC1234')"
                    },
                    "date": {
                        "type": "string",
                        "description": "Date in format YYYY-MM-DD (default: today)"
                    },
                    "lang": lang_property()
                },
                "required": ["train_id"]
            }),
            Tool::Disturbances => json!({
                "type": "object",
                "properties": {
                    "lang": lang_property()
                }
            }),
        }
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition {
            name: self.name(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }
}

/// Definitions of every tool, in listing order.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    Tool::ALL.into_iter().map(Tool::definition).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(Tool::from_name("get_weather"), None);
    }

    #[test]
    fn definitions_serialize_camel_case() {
        let defs = serde_json::to_value(tool_definitions()).unwrap();
        let names: Vec<&str> = defs
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "search_stations",
                "get_liveboard",
                "find_connections",
                "get_train_info",
                "get_disturbances"
            ]
        );
        assert_eq!(defs[0]["inputSchema"]["required"], json!(["query"]));
        assert_eq!(
            defs[2]["inputSchema"]["required"],
            json!(["from_station", "to_station"])
        );
    }

    #[test]
    fn every_schema_is_an_object() {
        for tool in Tool::ALL {
            let schema = tool.input_schema();
            assert_eq!(schema["type"], "object", "{}", tool.name());
            assert_eq!(schema["properties"]["lang"]["default"], "en");
        }
    }
}
