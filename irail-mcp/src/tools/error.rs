//! Tool error types.

use crate::irail::IrailError;

/// Errors raised while handling a tool call.
///
/// None of these abort the server; the dispatcher turns them into an
/// error result for the caller.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// A required argument is absent or empty
    #[error("'{0}' parameter is required")]
    MissingArgument(&'static str),

    /// Either end of a connection query is absent
    #[error("'from_station' and 'to_station' parameters are required")]
    MissingStations,

    /// Arguments do not match the tool's input schema
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    /// A relative date such as "+x days" could not be read
    #[error("invalid relative date '{0}', expected e.g. '+2 days'")]
    InvalidDate(String),

    #[error(transparent)]
    Irail(#[from] IrailError),

    #[error("failed to render response: {0}")]
    Render(#[from] askama::Error),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            ToolError::MissingArgument("query").to_string(),
            "'query' parameter is required"
        );
        assert_eq!(
            ToolError::UnknownTool("get_weather".into()).to_string(),
            "Unknown tool: get_weather"
        );
        assert_eq!(
            ToolError::Irail(IrailError::NotFound).to_string(),
            "Station or resource not found."
        );
    }
}
