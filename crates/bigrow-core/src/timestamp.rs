//! Cell timestamp ranges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bigrow_proto as proto;

/// A range of cell timestamps.
///
/// Either bound may be absent, leaving that side of the range open. The
/// service interprets the start as inclusive and the end as exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimestampRange {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl TimestampRange {
    /// Create a range from optional bounds.
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// A range with both bounds set.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// A range open at the end.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self::new(Some(start), None)
    }

    /// A range open at the start.
    pub fn ending_at(end: DateTime<Utc>) -> Self {
        Self::new(None, Some(end))
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Convert to the wire message. Absent bounds are left unset.
    pub fn to_pb(&self) -> proto::TimestampRange {
        proto::TimestampRange {
            start_timestamp_micros: self.start.map(|ts| ts.timestamp_micros()),
            end_timestamp_micros: self.end.map(|ts| ts.timestamp_micros()),
        }
    }
}
