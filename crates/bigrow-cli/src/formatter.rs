//! Output formatters for encoded messages.

use clap::ValueEnum;
use serde_json::json;

use bigrow_core::proto::codec;
use bigrow_core::{proto, RowFilter};

/// Output format for encoded messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Protobuf bytes as lower-case hex
    Hex,
    /// Rust debug rendering of the wire message
    Debug,
    /// Filter description as JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Hex => write!(f, "hex"),
            OutputFormat::Debug => write!(f, "debug"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Format a filter on its own.
pub fn format_filter(
    filter: &RowFilter,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Hex => Ok(hex::encode(filter.to_bytes())),
        OutputFormat::Debug => Ok(format!("{:#?}", filter.to_pb())),
        OutputFormat::Json => serde_json::to_string_pretty(filter),
    }
}

/// Format a read request.
///
/// `json` renders the request fields with the row key as hex and the filter
/// in its description form.
pub fn format_request(
    request: &proto::ReadRowsRequest,
    filter: Option<&RowFilter>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Hex => Ok(hex::encode(codec::encode(request))),
        OutputFormat::Debug => Ok(format!("{:#?}", request)),
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "table_name": request.table_name,
            "row_key": hex::encode(&request.row_key),
            "filter": filter,
            "num_rows_limit": request.num_rows_limit,
        })),
    }
}
