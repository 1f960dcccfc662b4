//! Column-qualifier and value ranges.
//!
//! Both ranges carry an optional start and end bound plus an inclusivity flag
//! per side. A flag only means something next to its bound, so the builders
//! reject a flag that is set while the matching bound is absent. Unspecified
//! flags default to inclusive.

use serde::{Deserialize, Serialize};

use bigrow_proto::{column_range, value_range};
use bigrow_proto as proto;

use crate::error::{Error, Result};

/// Resolve the inclusivity of one side of a range.
fn resolve_inclusive(
    bound: &'static str,
    value: Option<&[u8]>,
    flag: Option<bool>,
) -> Result<bool> {
    match (value, flag) {
        (None, Some(_)) => Err(Error::InvalidRange {
            bound,
            reason: "inclusivity flag given without a bound",
        }),
        (_, flag) => Ok(flag.unwrap_or(true)),
    }
}

/// Flag to persist for one side of a range: only recorded next to a bound.
fn explicit_flag(value: Option<&[u8]>, inclusive: bool) -> Option<bool> {
    value.map(|_| inclusive)
}

/// A range of column qualifiers within one column family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ColumnRangeBuilder", try_from = "ColumnRangeBuilder")]
pub struct ColumnRange {
    family_id: String,
    start_column: Option<Vec<u8>>,
    end_column: Option<Vec<u8>>,
    inclusive_start: bool,
    inclusive_end: bool,
}

impl ColumnRange {
    /// Every column in the family.
    pub fn new(family_id: impl Into<String>) -> Self {
        Self {
            family_id: family_id.into(),
            start_column: None,
            end_column: None,
            inclusive_start: true,
            inclusive_end: true,
        }
    }

    /// Start building a bounded range over `family_id`.
    pub fn builder(family_id: impl Into<String>) -> ColumnRangeBuilder {
        ColumnRangeBuilder::new(family_id)
    }

    pub fn family_id(&self) -> &str {
        &self.family_id
    }

    pub fn start_column(&self) -> Option<&[u8]> {
        self.start_column.as_deref()
    }

    pub fn end_column(&self) -> Option<&[u8]> {
        self.end_column.as_deref()
    }

    pub fn inclusive_start(&self) -> bool {
        self.inclusive_start
    }

    pub fn inclusive_end(&self) -> bool {
        self.inclusive_end
    }

    /// Convert to the wire message.
    pub fn to_pb(&self) -> proto::ColumnRange {
        let start_qualifier = self.start_column.clone().map(|column| {
            if self.inclusive_start {
                column_range::StartQualifier::StartQualifierInclusive(column)
            } else {
                column_range::StartQualifier::StartQualifierExclusive(column)
            }
        });
        let end_qualifier = self.end_column.clone().map(|column| {
            if self.inclusive_end {
                column_range::EndQualifier::EndQualifierInclusive(column)
            } else {
                column_range::EndQualifier::EndQualifierExclusive(column)
            }
        });

        proto::ColumnRange {
            family_name: self.family_id.clone(),
            start_qualifier,
            end_qualifier,
        }
    }
}

/// Builder for [`ColumnRange`]. Also the serialized form of a column range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRangeBuilder {
    family_id: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::text_bytes::deserialize_option"
    )]
    start_column: Option<Vec<u8>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::text_bytes::deserialize_option"
    )]
    end_column: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inclusive_start: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inclusive_end: Option<bool>,
}

impl ColumnRangeBuilder {
    pub fn new(family_id: impl Into<String>) -> Self {
        Self {
            family_id: family_id.into(),
            ..Default::default()
        }
    }

    /// Set the first qualifier of the range.
    pub fn start_column(mut self, column: impl Into<Vec<u8>>) -> Self {
        self.start_column = Some(column.into());
        self
    }

    /// Set the last qualifier of the range.
    pub fn end_column(mut self, column: impl Into<Vec<u8>>) -> Self {
        self.end_column = Some(column.into());
        self
    }

    /// Whether the start qualifier itself is part of the range.
    pub fn inclusive_start(mut self, inclusive: bool) -> Self {
        self.inclusive_start = Some(inclusive);
        self
    }

    /// Whether the end qualifier itself is part of the range.
    pub fn inclusive_end(mut self, inclusive: bool) -> Self {
        self.inclusive_end = Some(inclusive);
        self
    }

    /// Validate and build the range.
    pub fn build(self) -> Result<ColumnRange> {
        let inclusive_start =
            resolve_inclusive("start", self.start_column.as_deref(), self.inclusive_start)?;
        let inclusive_end =
            resolve_inclusive("end", self.end_column.as_deref(), self.inclusive_end)?;

        Ok(ColumnRange {
            family_id: self.family_id,
            start_column: self.start_column,
            end_column: self.end_column,
            inclusive_start,
            inclusive_end,
        })
    }
}

impl From<ColumnRange> for ColumnRangeBuilder {
    fn from(range: ColumnRange) -> Self {
        Self {
            inclusive_start: explicit_flag(range.start_column.as_deref(), range.inclusive_start),
            inclusive_end: explicit_flag(range.end_column.as_deref(), range.inclusive_end),
            family_id: range.family_id,
            start_column: range.start_column,
            end_column: range.end_column,
        }
    }
}

impl TryFrom<ColumnRangeBuilder> for ColumnRange {
    type Error = Error;

    fn try_from(builder: ColumnRangeBuilder) -> Result<Self> {
        builder.build()
    }
}

/// A range of raw cell values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ValueRangeBuilder", try_from = "ValueRangeBuilder")]
pub struct ValueRange {
    start_value: Option<Vec<u8>>,
    end_value: Option<Vec<u8>>,
    inclusive_start: bool,
    inclusive_end: bool,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            start_value: None,
            end_value: None,
            inclusive_start: true,
            inclusive_end: true,
        }
    }
}

impl ValueRange {
    /// Every value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a bounded value range.
    pub fn builder() -> ValueRangeBuilder {
        ValueRangeBuilder::default()
    }

    pub fn start_value(&self) -> Option<&[u8]> {
        self.start_value.as_deref()
    }

    pub fn end_value(&self) -> Option<&[u8]> {
        self.end_value.as_deref()
    }

    pub fn inclusive_start(&self) -> bool {
        self.inclusive_start
    }

    pub fn inclusive_end(&self) -> bool {
        self.inclusive_end
    }

    /// Convert to the wire message.
    pub fn to_pb(&self) -> proto::ValueRange {
        let start_value = self.start_value.clone().map(|value| {
            if self.inclusive_start {
                value_range::StartValue::StartValueInclusive(value)
            } else {
                value_range::StartValue::StartValueExclusive(value)
            }
        });
        let end_value = self.end_value.clone().map(|value| {
            if self.inclusive_end {
                value_range::EndValue::EndValueInclusive(value)
            } else {
                value_range::EndValue::EndValueExclusive(value)
            }
        });

        proto::ValueRange {
            start_value,
            end_value,
        }
    }
}

/// Builder for [`ValueRange`]. Also the serialized form of a value range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRangeBuilder {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::text_bytes::deserialize_option"
    )]
    start_value: Option<Vec<u8>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::text_bytes::deserialize_option"
    )]
    end_value: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inclusive_start: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inclusive_end: Option<bool>,
}

impl ValueRangeBuilder {
    pub fn start_value(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.start_value = Some(value.into());
        self
    }

    pub fn end_value(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.end_value = Some(value.into());
        self
    }

    pub fn inclusive_start(mut self, inclusive: bool) -> Self {
        self.inclusive_start = Some(inclusive);
        self
    }

    pub fn inclusive_end(mut self, inclusive: bool) -> Self {
        self.inclusive_end = Some(inclusive);
        self
    }

    /// Validate and build the range.
    pub fn build(self) -> Result<ValueRange> {
        let inclusive_start =
            resolve_inclusive("start", self.start_value.as_deref(), self.inclusive_start)?;
        let inclusive_end =
            resolve_inclusive("end", self.end_value.as_deref(), self.inclusive_end)?;

        Ok(ValueRange {
            start_value: self.start_value,
            end_value: self.end_value,
            inclusive_start,
            inclusive_end,
        })
    }
}

impl From<ValueRange> for ValueRangeBuilder {
    fn from(range: ValueRange) -> Self {
        Self {
            inclusive_start: explicit_flag(range.start_value.as_deref(), range.inclusive_start),
            inclusive_end: explicit_flag(range.end_value.as_deref(), range.inclusive_end),
            start_value: range.start_value,
            end_value: range.end_value,
        }
    }
}

impl TryFrom<ValueRangeBuilder> for ValueRange {
    type Error = Error;

    fn try_from(builder: ValueRangeBuilder) -> Result<Self> {
        builder.build()
    }
}
