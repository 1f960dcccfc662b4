//! bigrow command-line tool
//!
//! Reads a row filter described as JSON and prints its wire encoding, or the
//! encoding of a single-row read request that carries it. Nothing is sent to
//! the service.

mod formatter;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use formatter::OutputFormat;
use thiserror::Error;
use tracing::debug;

use bigrow_core::{Row, RowFilter, RowKey, TableConfig};

/// bigrow row-filter encoder
#[derive(Parser, Debug)]
#[command(name = "bigrow")]
#[command(version, about = "Encode row filters and read requests")]
pub struct Args {
    /// JSON file with the filter description ("-" reads stdin)
    #[arg(short = 'f', long)]
    pub filter: Option<PathBuf>,

    /// Fully-qualified table name; builds a read request when set
    #[arg(short = 't', long, requires = "row_key")]
    pub table: Option<String>,

    /// Row key as a JSON value: a string or an array of bytes
    #[arg(short = 'k', long, requires = "table")]
    pub row_key: Option<String>,

    /// Output format
    #[arg(long, default_value = "hex", value_enum)]
    pub format: OutputFormat,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] bigrow_core::Error),

    #[error("nothing to encode: pass --filter and/or --table with --row-key")]
    NothingToEncode,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bigrow=info,bigrow_core=info")),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<String, CliError> {
    let filter = args.filter.as_deref().map(read_filter).transpose()?;

    match (args.table.as_deref(), args.row_key.as_deref()) {
        (Some(table), Some(row_key)) => {
            let table = TableConfig::parse(table)?;
            let row_key = RowKey::from_json(&serde_json::from_str(row_key)?)?;
            let row = Row::new(row_key, table)?;
            let request = row.read_request(filter.as_ref());
            Ok(formatter::format_request(&request, filter.as_ref(), args.format)?)
        }
        _ => {
            let filter = filter.ok_or(CliError::NothingToEncode)?;
            Ok(formatter::format_filter(&filter, args.format)?)
        }
    }
}

fn read_filter(path: &Path) -> Result<RowFilter, CliError> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    let filter: RowFilter = serde_json::from_str(&content)?;
    debug!(path = %path.display(), depth = filter.depth(), "loaded filter");
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigrow_core::proto::{self, codec};
    use std::io::Write;

    const TABLE: &str = "projects/p/zones/z/clusters/c/tables/t";

    fn args(filter: Option<PathBuf>, table: Option<&str>, row_key: Option<&str>) -> Args {
        Args {
            filter,
            table: table.map(String::from),
            row_key: row_key.map(String::from),
            format: OutputFormat::Hex,
        }
    }

    fn filter_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_run_filter_only() {
        let file = filter_file(r#"{ "cells_row_limit": 5 }"#);
        let output = run(args(Some(file.path().to_path_buf()), None, None)).unwrap();

        let decoded: proto::RowFilter = codec::decode(&hex::decode(output).unwrap()).unwrap();
        assert_eq!(decoded, RowFilter::cells_row_limit(5).to_pb());
    }

    #[test]
    fn test_run_read_request() {
        let file = filter_file(r#"{ "row_key_regex": "user#.*" }"#);
        let output = run(args(
            Some(file.path().to_path_buf()),
            Some(TABLE),
            Some(r#""user#1""#),
        ))
        .unwrap();

        let request: proto::ReadRowsRequest =
            codec::decode(&hex::decode(output).unwrap()).unwrap();
        assert_eq!(request.table_name, TABLE);
        assert_eq!(request.row_key, b"user#1".to_vec());
        assert_eq!(request.filter, Some(RowFilter::row_key_regex("user#.*").to_pb()));
    }

    #[test]
    fn test_run_read_request_byte_key_no_filter() {
        let output = run(args(None, Some(TABLE), Some("[0, 255]"))).unwrap();

        let request: proto::ReadRowsRequest =
            codec::decode(&hex::decode(output).unwrap()).unwrap();
        assert_eq!(request.row_key, vec![0u8, 255]);
        assert!(request.filter.is_none());
    }

    #[test]
    fn test_run_read_request_json() {
        let mut args = args(None, Some(TABLE), Some(r#""k""#));
        args.format = OutputFormat::Json;
        let output = run(args).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["table_name"], TABLE);
        assert_eq!(value["row_key"], "6b");
    }

    #[test]
    fn test_run_rejects_numeric_row_key() {
        let err = run(args(None, Some(TABLE), Some("42"))).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(bigrow_core::Error::TypeConstraint { .. })
        ));
    }

    #[test]
    fn test_run_rejects_bad_table() {
        let err = run(args(None, Some("tables/t"), Some(r#""k""#))).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(bigrow_core::Error::InvalidTableName(_))
        ));
    }

    #[test]
    fn test_run_nothing_to_encode() {
        let err = run(args(None, None, None)).unwrap_err();
        assert!(matches!(err, CliError::NothingToEncode));
    }
}
