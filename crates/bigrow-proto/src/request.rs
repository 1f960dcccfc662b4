//! Read request envelope.

use crate::data::RowFilter;

/// Request to read the contents of one row.
///
/// Only the single-row target is modelled; row ranges are not.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadRowsRequest {
    /// Fully-qualified name of the table to read from.
    #[prost(string, tag = "1")]
    pub table_name: String,
    /// Key of the single row to read.
    #[prost(bytes = "vec", tag = "2")]
    pub row_key: Vec<u8>,
    /// Filter applied to the row's cells. Unset means every cell is returned.
    #[prost(message, optional, tag = "5")]
    pub filter: Option<RowFilter>,
    /// Maximum number of rows to return; 0 means no limit.
    #[prost(int64, tag = "7")]
    pub num_rows_limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::row_filter::Filter;
    use prost::Message;

    #[test]
    fn test_request_without_filter() {
        let request = ReadRowsRequest {
            table_name: "projects/p/zones/z/clusters/c/tables/t".into(),
            row_key: b"row-key".to_vec(),
            filter: None,
            num_rows_limit: 0,
        };

        let decoded = ReadRowsRequest::decode(request.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, request);
        assert!(decoded.filter.is_none());
    }

    #[test]
    fn test_request_carries_filter() {
        let request = ReadRowsRequest {
            table_name: "t".into(),
            row_key: b"k".to_vec(),
            filter: Some(RowFilter::from(Filter::CellsPerRowLimitFilter(1))),
            num_rows_limit: 1,
        };

        let decoded = ReadRowsRequest::decode(request.encode_to_vec().as_slice()).unwrap();
        assert_eq!(
            decoded.filter.and_then(|f| f.filter),
            Some(Filter::CellsPerRowLimitFilter(1))
        );
    }
}
