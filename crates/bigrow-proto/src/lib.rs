//! bigrow wire types.
//!
//! This crate defines the protobuf messages that the storage service's
//! row-read API accepts, using prost for encoding.
//!
//! # Modules
//!
//! - [`data`] - Row filter, column/value range and timestamp range messages
//! - [`request`] - Read request envelope
//! - [`codec`] - Encode/decode helpers
//! - [`error`] - Protocol error types

pub mod codec;
pub mod data;
pub mod error;
pub mod request;

pub use error::Error;

// Re-export commonly used types at crate root
pub use data::{
    column_range, row_filter, value_range, ColumnRange, RowFilter, TimestampRange, ValueRange,
};
pub use request::ReadRowsRequest;
