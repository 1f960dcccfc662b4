//! Row filters.
//!
//! A [`RowFilter`] describes which cells of a row the service returns and how
//! they are transformed. Filters are immutable values: they compare
//! structurally, can be shared across threads, and are converted to their
//! wire form on demand with [`RowFilter::to_pb`].
//!
//! ```ignore
//! use bigrow_core::{ColumnRange, RowFilter};
//!
//! let filter = RowFilter::chain(vec![
//!     RowFilter::family_name_regex("stats"),
//!     RowFilter::column_range(ColumnRange::builder("stats").start_column("c").build()?),
//!     RowFilter::cells_column_limit(1),
//! ]);
//! let pb = filter.to_pb();
//! ```

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::trace;

use bigrow_proto::row_filter::{self, Filter};
use bigrow_proto as proto;

use crate::range::{ColumnRange, ValueRange};
use crate::timestamp::TimestampRange;

/// A filter over the cells of a row.
///
/// Flag, pattern and count payloads are carried verbatim. Regex syntax, sample
/// fractions and cell counts are validated by the service, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowFilter {
    /// Outputs all cells directly to the result, bypassing the rest of the
    /// enclosing chain or interleave.
    Sink(bool),
    /// Matches every cell.
    PassAll(bool),
    /// Matches no cell.
    BlockAll(bool),
    /// Matches rows whose key matches the pattern.
    #[serde(deserialize_with = "crate::text_bytes::deserialize")]
    RowKeyRegex(Vec<u8>),
    /// Matches a random sample of rows with the given probability.
    RowSample(f64),
    /// Matches cells whose family name matches the pattern.
    FamilyNameRegex(String),
    /// Matches cells whose column qualifier matches the pattern.
    #[serde(deserialize_with = "crate::text_bytes::deserialize")]
    ColumnQualifierRegex(Vec<u8>),
    /// Matches cells within a column-qualifier range of one family.
    ColumnRange(ColumnRange),
    /// Matches cells whose value matches the pattern.
    #[serde(deserialize_with = "crate::text_bytes::deserialize")]
    ValueRegex(Vec<u8>),
    /// Matches cells whose value lies in the range.
    ValueRange(ValueRange),
    /// Matches cells whose timestamp lies in the range.
    TimestampRange(TimestampRange),
    /// Skips the first N cells of each row.
    CellsRowOffset(i32),
    /// Keeps only the first N cells of each row.
    CellsRowLimit(i32),
    /// Keeps only the most recent N cells of each column.
    CellsColumnLimit(i32),
    /// Replaces every cell value with the empty string.
    StripValueTransformer(bool),
    /// Labels every cell with the given label.
    ApplyLabel(String),
    /// Applies each filter to the output of the previous one.
    Chain(Vec<RowFilter>),
    /// Applies every filter to the input and merges the outputs.
    Interleave(Vec<RowFilter>),
    /// Picks a branch depending on whether the base filter matches.
    Condition(ConditionalFilter),
}

impl RowFilter {
    pub fn sink(flag: bool) -> Self {
        RowFilter::Sink(flag)
    }

    pub fn pass_all(flag: bool) -> Self {
        RowFilter::PassAll(flag)
    }

    pub fn block_all(flag: bool) -> Self {
        RowFilter::BlockAll(flag)
    }

    /// Text patterns are stored as their UTF-8 bytes.
    pub fn row_key_regex(regex: impl Into<Vec<u8>>) -> Self {
        RowFilter::RowKeyRegex(regex.into())
    }

    pub fn row_sample(sample: f64) -> Self {
        RowFilter::RowSample(sample)
    }

    pub fn family_name_regex(regex: impl Into<String>) -> Self {
        RowFilter::FamilyNameRegex(regex.into())
    }

    pub fn column_qualifier_regex(regex: impl Into<Vec<u8>>) -> Self {
        RowFilter::ColumnQualifierRegex(regex.into())
    }

    pub fn column_range(range: ColumnRange) -> Self {
        RowFilter::ColumnRange(range)
    }

    pub fn value_regex(regex: impl Into<Vec<u8>>) -> Self {
        RowFilter::ValueRegex(regex.into())
    }

    pub fn value_range(range: ValueRange) -> Self {
        RowFilter::ValueRange(range)
    }

    pub fn timestamp_range(range: TimestampRange) -> Self {
        RowFilter::TimestampRange(range)
    }

    pub fn cells_row_offset(num_cells: i32) -> Self {
        RowFilter::CellsRowOffset(num_cells)
    }

    pub fn cells_row_limit(num_cells: i32) -> Self {
        RowFilter::CellsRowLimit(num_cells)
    }

    pub fn cells_column_limit(num_cells: i32) -> Self {
        RowFilter::CellsColumnLimit(num_cells)
    }

    pub fn strip_value_transformer(flag: bool) -> Self {
        RowFilter::StripValueTransformer(flag)
    }

    pub fn apply_label(label: impl Into<String>) -> Self {
        RowFilter::ApplyLabel(label.into())
    }

    pub fn chain(filters: Vec<RowFilter>) -> Self {
        RowFilter::Chain(filters)
    }

    pub fn interleave(filters: Vec<RowFilter>) -> Self {
        RowFilter::Interleave(filters)
    }

    pub fn condition(condition: ConditionalFilter) -> Self {
        RowFilter::Condition(condition)
    }

    /// The flag of a boolean filter.
    pub fn flag(&self) -> Option<bool> {
        match self {
            RowFilter::Sink(flag)
            | RowFilter::PassAll(flag)
            | RowFilter::BlockAll(flag)
            | RowFilter::StripValueTransformer(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The pattern of a regex filter, as bytes.
    pub fn regex(&self) -> Option<&[u8]> {
        match self {
            RowFilter::RowKeyRegex(regex)
            | RowFilter::ColumnQualifierRegex(regex)
            | RowFilter::ValueRegex(regex) => Some(regex),
            RowFilter::FamilyNameRegex(regex) => Some(regex.as_bytes()),
            _ => None,
        }
    }

    /// The count of a cell-count filter.
    pub fn num_cells(&self) -> Option<i32> {
        match self {
            RowFilter::CellsRowOffset(n)
            | RowFilter::CellsRowLimit(n)
            | RowFilter::CellsColumnLimit(n) => Some(*n),
            _ => None,
        }
    }

    pub fn sample(&self) -> Option<f64> {
        match self {
            RowFilter::RowSample(sample) => Some(*sample),
            _ => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            RowFilter::ApplyLabel(label) => Some(label),
            _ => None,
        }
    }

    /// Children of a chain or interleave, in order.
    pub fn filters(&self) -> Option<&[RowFilter]> {
        match self {
            RowFilter::Chain(filters) | RowFilter::Interleave(filters) => Some(filters),
            _ => None,
        }
    }

    /// Height of the filter tree; a leaf filter has depth 1.
    pub fn depth(&self) -> usize {
        let children = match self {
            RowFilter::Chain(filters) | RowFilter::Interleave(filters) => {
                filters.iter().map(RowFilter::depth).max().unwrap_or(0)
            }
            RowFilter::Condition(condition) => {
                condition.branches().map(RowFilter::depth).max().unwrap_or(0)
            }
            _ => 0,
        };
        children + 1
    }

    /// Convert to the wire message, recursing into composite filters.
    pub fn to_pb(&self) -> proto::RowFilter {
        let filter = match self {
            RowFilter::Sink(flag) => Filter::Sink(*flag),
            RowFilter::PassAll(flag) => Filter::PassAllFilter(*flag),
            RowFilter::BlockAll(flag) => Filter::BlockAllFilter(*flag),
            RowFilter::RowKeyRegex(regex) => Filter::RowKeyRegexFilter(regex.clone()),
            RowFilter::RowSample(sample) => Filter::RowSampleFilter(*sample),
            RowFilter::FamilyNameRegex(regex) => Filter::FamilyNameRegexFilter(regex.clone()),
            RowFilter::ColumnQualifierRegex(regex) => {
                Filter::ColumnQualifierRegexFilter(regex.clone())
            }
            RowFilter::ColumnRange(range) => Filter::ColumnRangeFilter(range.to_pb()),
            RowFilter::ValueRegex(regex) => Filter::ValueRegexFilter(regex.clone()),
            RowFilter::ValueRange(range) => Filter::ValueRangeFilter(range.to_pb()),
            RowFilter::TimestampRange(range) => Filter::TimestampRangeFilter(range.to_pb()),
            RowFilter::CellsRowOffset(n) => Filter::CellsPerRowOffsetFilter(*n),
            RowFilter::CellsRowLimit(n) => Filter::CellsPerRowLimitFilter(*n),
            RowFilter::CellsColumnLimit(n) => Filter::CellsPerColumnLimitFilter(*n),
            RowFilter::StripValueTransformer(flag) => Filter::StripValueTransformer(*flag),
            RowFilter::ApplyLabel(label) => Filter::ApplyLabelTransformer(label.clone()),
            RowFilter::Chain(filters) => Filter::Chain(row_filter::Chain {
                filters: filters.iter().map(RowFilter::to_pb).collect(),
            }),
            RowFilter::Interleave(filters) => Filter::Interleave(row_filter::Interleave {
                filters: filters.iter().map(RowFilter::to_pb).collect(),
            }),
            RowFilter::Condition(condition) => Filter::Condition(Box::new(condition.to_pb())),
        };
        proto::RowFilter::from(filter)
    }

    /// Protobuf encoding of [`RowFilter::to_pb`].
    pub fn to_bytes(&self) -> Bytes {
        let bytes = bigrow_proto::codec::encode(&self.to_pb());
        trace!(depth = self.depth(), encoded_len = bytes.len(), "encoded row filter");
        bytes
    }
}

/// A predicate filter with optional branches.
///
/// When `base` outputs any cell the `true_filter` branch is applied to the
/// row, otherwise the `false_filter` branch. A missing branch outputs nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalFilter {
    base: Box<RowFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    true_filter: Option<Box<RowFilter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    false_filter: Option<Box<RowFilter>>,
}

impl ConditionalFilter {
    pub fn new(
        base: RowFilter,
        true_filter: Option<RowFilter>,
        false_filter: Option<RowFilter>,
    ) -> Self {
        Self {
            base: Box::new(base),
            true_filter: true_filter.map(Box::new),
            false_filter: false_filter.map(Box::new),
        }
    }

    pub fn base(&self) -> &RowFilter {
        &self.base
    }

    pub fn true_filter(&self) -> Option<&RowFilter> {
        self.true_filter.as_deref()
    }

    pub fn false_filter(&self) -> Option<&RowFilter> {
        self.false_filter.as_deref()
    }

    /// Base filter followed by whichever branches are present.
    fn branches(&self) -> impl Iterator<Item = &RowFilter> {
        std::iter::once(self.base())
            .chain(self.true_filter())
            .chain(self.false_filter())
    }

    /// Convert to the wire message. Absent branches stay unset.
    pub fn to_pb(&self) -> row_filter::Condition {
        row_filter::Condition {
            predicate_filter: Some(Box::new(self.base.to_pb())),
            true_filter: self.true_filter.as_ref().map(|f| Box::new(f.to_pb())),
            false_filter: self.false_filter.as_ref().map(|f| Box::new(f.to_pb())),
        }
    }
}
