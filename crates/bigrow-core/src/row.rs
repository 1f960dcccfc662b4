//! Rows and single-row read requests.

use tracing::{debug, instrument};

use bigrow_proto as proto;

use crate::config::TableConfig;
use crate::error::Result;
use crate::filter::RowFilter;
use crate::key::RowKey;

/// Row limit sent with single-row reads; 0 means unlimited.
pub const DEFAULT_ROWS_LIMIT: i64 = 0;

/// A row of a table, addressed by its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    row_key: RowKey,
    table: TableConfig,
}

impl Row {
    /// Create a row handle. The table configuration is validated here.
    pub fn new(row_key: impl Into<RowKey>, table: TableConfig) -> Result<Self> {
        table.validate()?;
        Ok(Self {
            row_key: row_key.into(),
            table,
        })
    }

    pub fn row_key(&self) -> &RowKey {
        &self.row_key
    }

    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    /// Build the request that reads this row, optionally filtered.
    ///
    /// The request is only built, never sent.
    #[instrument(skip(self, filter), fields(row_key = ?self.row_key))]
    pub fn read_request(&self, filter: Option<&RowFilter>) -> proto::ReadRowsRequest {
        let request = proto::ReadRowsRequest {
            table_name: self.table.table_name(),
            row_key: self.row_key.to_vec(),
            filter: filter.map(RowFilter::to_pb),
            num_rows_limit: DEFAULT_ROWS_LIMIT,
        };

        debug!(
            table_name = %request.table_name,
            filtered = filter.is_some(),
            filter_depth = filter.map(RowFilter::depth).unwrap_or(0),
            "built read request"
        );

        request
    }
}
