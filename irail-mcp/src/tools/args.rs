//! Typed tool arguments.
//!
//! Unknown keys are ignored and optional keys take their schema defaults.

use serde::Deserialize;

fn default_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchStationsArgs {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiveboardArgs {
    #[serde(default)]
    pub station: String,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(default)]
    pub arrival: bool,
    #[serde(default = "default_lang")]
    pub lang: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionsArgs {
    #[serde(default)]
    pub from_station: String,
    #[serde(default)]
    pub to_station: String,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(default)]
    pub arrival_time: bool,
    #[serde(default = "default_lang")]
    pub lang: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrainInfoArgs {
    #[serde(default)]
    pub train_id: String,
    pub date: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisturbancesArgs {
    #[serde(default = "default_lang")]
    pub lang: String,
}
