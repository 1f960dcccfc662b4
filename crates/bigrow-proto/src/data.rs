//! Row filter messages understood by the storage service's read API.
//!
//! The structs here mirror the service's protocol definition field-for-field
//! (names and tags). They are written by hand rather than generated so the
//! crate builds without `protoc`.

/// Takes a row as input and produces an alternate view of the row based on
/// the filter it describes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RowFilter {
    #[prost(
        oneof = "row_filter::Filter",
        tags = "1, 2, 3, 16, 17, 18, 4, 14, 5, 6, 7, 8, 9, 15, 10, 11, 12, 13, 19"
    )]
    pub filter: Option<row_filter::Filter>,
}

/// Nested message and enum types in `RowFilter`.
pub mod row_filter {
    /// Sends the row through each filter in turn.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Chain {
        #[prost(message, repeated, tag = "1")]
        pub filters: Vec<super::RowFilter>,
    }

    /// Sends a copy of the row through every filter and merges the outputs.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Interleave {
        #[prost(message, repeated, tag = "1")]
        pub filters: Vec<super::RowFilter>,
    }

    /// Applies `true_filter` if `predicate_filter` outputs any cells,
    /// `false_filter` otherwise.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Condition {
        #[prost(message, optional, boxed, tag = "1")]
        pub predicate_filter: Option<Box<super::RowFilter>>,
        #[prost(message, optional, boxed, tag = "2")]
        pub true_filter: Option<Box<super::RowFilter>>,
        #[prost(message, optional, boxed, tag = "3")]
        pub false_filter: Option<Box<super::RowFilter>>,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Filter {
        #[prost(message, tag = "1")]
        Chain(Chain),
        #[prost(message, tag = "2")]
        Interleave(Interleave),
        #[prost(message, tag = "3")]
        Condition(Box<Condition>),
        #[prost(bool, tag = "16")]
        Sink(bool),
        #[prost(bool, tag = "17")]
        PassAllFilter(bool),
        #[prost(bool, tag = "18")]
        BlockAllFilter(bool),
        #[prost(bytes, tag = "4")]
        RowKeyRegexFilter(Vec<u8>),
        #[prost(double, tag = "14")]
        RowSampleFilter(f64),
        #[prost(string, tag = "5")]
        FamilyNameRegexFilter(String),
        #[prost(bytes, tag = "6")]
        ColumnQualifierRegexFilter(Vec<u8>),
        #[prost(message, tag = "7")]
        ColumnRangeFilter(super::ColumnRange),
        #[prost(message, tag = "8")]
        TimestampRangeFilter(super::TimestampRange),
        #[prost(bytes, tag = "9")]
        ValueRegexFilter(Vec<u8>),
        #[prost(message, tag = "15")]
        ValueRangeFilter(super::ValueRange),
        #[prost(int32, tag = "10")]
        CellsPerRowOffsetFilter(i32),
        #[prost(int32, tag = "11")]
        CellsPerRowLimitFilter(i32),
        #[prost(int32, tag = "12")]
        CellsPerColumnLimitFilter(i32),
        #[prost(bool, tag = "13")]
        StripValueTransformer(bool),
        #[prost(string, tag = "19")]
        ApplyLabelTransformer(String),
    }
}

/// A contiguous range of column qualifiers within a single family.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ColumnRange {
    #[prost(string, tag = "1")]
    pub family_name: String,
    #[prost(oneof = "column_range::StartQualifier", tags = "2, 3")]
    pub start_qualifier: Option<column_range::StartQualifier>,
    #[prost(oneof = "column_range::EndQualifier", tags = "4, 5")]
    pub end_qualifier: Option<column_range::EndQualifier>,
}

/// Nested message and enum types in `ColumnRange`.
pub mod column_range {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum StartQualifier {
        #[prost(bytes, tag = "2")]
        StartQualifierInclusive(Vec<u8>),
        #[prost(bytes, tag = "3")]
        StartQualifierExclusive(Vec<u8>),
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum EndQualifier {
        #[prost(bytes, tag = "4")]
        EndQualifierInclusive(Vec<u8>),
        #[prost(bytes, tag = "5")]
        EndQualifierExclusive(Vec<u8>),
    }
}

/// A range of cell timestamps, in microseconds since the Unix epoch.
///
/// Both bounds are `optional` on the wire: an unset bound is omitted, which
/// the service reads as unbounded. It is never sent as zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct TimestampRange {
    #[prost(int64, optional, tag = "1")]
    pub start_timestamp_micros: Option<i64>,
    #[prost(int64, optional, tag = "2")]
    pub end_timestamp_micros: Option<i64>,
}

/// A contiguous range of raw cell values.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValueRange {
    #[prost(oneof = "value_range::StartValue", tags = "1, 2")]
    pub start_value: Option<value_range::StartValue>,
    #[prost(oneof = "value_range::EndValue", tags = "3, 4")]
    pub end_value: Option<value_range::EndValue>,
}

/// Nested message and enum types in `ValueRange`.
pub mod value_range {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum StartValue {
        #[prost(bytes, tag = "1")]
        StartValueInclusive(Vec<u8>),
        #[prost(bytes, tag = "2")]
        StartValueExclusive(Vec<u8>),
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum EndValue {
        #[prost(bytes, tag = "3")]
        EndValueInclusive(Vec<u8>),
        #[prost(bytes, tag = "4")]
        EndValueExclusive(Vec<u8>),
    }
}

impl From<row_filter::Filter> for RowFilter {
    fn from(filter: row_filter::Filter) -> Self {
        Self {
            filter: Some(filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_empty_timestamp_range_encodes_nothing() {
        let range = TimestampRange::default();
        assert!(range.encode_to_vec().is_empty());
    }

    #[test]
    fn test_zero_timestamp_bound_is_still_sent() {
        let range = TimestampRange {
            start_timestamp_micros: Some(0),
            end_timestamp_micros: None,
        };
        let bytes = range.encode_to_vec();
        assert!(!bytes.is_empty());

        let decoded = TimestampRange::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded.start_timestamp_micros, Some(0));
        assert_eq!(decoded.end_timestamp_micros, None);
    }

    #[test]
    fn test_sink_field_tag() {
        let filter = RowFilter::from(row_filter::Filter::Sink(true));
        // field 16, varint wire type => key 0x80 0x01, value 1
        assert_eq!(filter.encode_to_vec(), vec![0x80, 0x01, 0x01]);
    }

    #[test]
    fn test_cells_per_column_limit_field_tag() {
        let filter = RowFilter::from(row_filter::Filter::CellsPerColumnLimitFilter(10));
        // field 12, varint wire type => key 0x60
        assert_eq!(filter.encode_to_vec(), vec![0x60, 0x0A]);
    }

    #[test]
    fn test_condition_nests_filters() {
        let condition = row_filter::Condition {
            predicate_filter: Some(Box::new(RowFilter::from(
                row_filter::Filter::PassAllFilter(true),
            ))),
            true_filter: None,
            false_filter: Some(Box::new(RowFilter::from(
                row_filter::Filter::BlockAllFilter(true),
            ))),
        };
        let filter = RowFilter::from(row_filter::Filter::Condition(Box::new(condition)));

        let decoded = RowFilter::decode(filter.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, filter);
    }

    #[test]
    fn test_column_range_keeps_exclusive_bound() {
        let range = ColumnRange {
            family_name: "cf".into(),
            start_qualifier: Some(column_range::StartQualifier::StartQualifierExclusive(
                b"c".to_vec(),
            )),
            end_qualifier: None,
        };

        let decoded = ColumnRange::decode(range.encode_to_vec().as_slice()).unwrap();
        assert_eq!(
            decoded.start_qualifier,
            Some(column_range::StartQualifier::StartQualifierExclusive(
                b"c".to_vec()
            ))
        );
        assert!(decoded.end_qualifier.is_none());
    }
}
