//! Agent tool server for Belgian railway data.
//!
//! Exposes iRail (<https://api.irail.be>) live departures, connections,
//! train runs and disruptions as MCP tools, plus a station search that
//! runs entirely offline against a bundled dataset.

pub mod cache;
pub mod config;
pub mod irail;
pub mod mcp;
pub mod stations;
pub mod tools;
