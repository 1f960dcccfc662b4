//! bigrow core - row filter value model and wire encoder.
//!
//! This crate lets callers describe which cells of a row to read (by family,
//! qualifier, timestamp, value, cell counts, labels and boolean composition)
//! and turns that description into the service's protobuf messages.
//!
//! # Quick Start
//!
//! ```ignore
//! use bigrow_core::{ColumnRange, Row, RowFilter, TableConfig};
//!
//! let table = TableConfig::new("my-project", "us-central1-c", "my-cluster", "users");
//! let row = Row::new("user#42", table)?;
//!
//! let filter = RowFilter::chain(vec![
//!     RowFilter::column_range(
//!         ColumnRange::builder("profile")
//!             .start_column("a")
//!             .inclusive_start(false)
//!             .build()?,
//!     ),
//!     RowFilter::cells_column_limit(1),
//! ]);
//!
//! let request = row.read_request(Some(&filter));
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod key;
pub mod range;
pub mod row;
mod text_bytes;
pub mod timestamp;

pub use config::TableConfig;
pub use error::{Error, Result};
pub use filter::{ConditionalFilter, RowFilter};
pub use key::RowKey;
pub use range::{ColumnRange, ColumnRangeBuilder, ValueRange, ValueRangeBuilder};
pub use row::Row;
pub use timestamp::TimestampRange;

/// Re-export protocol types.
pub use bigrow_proto as proto;
