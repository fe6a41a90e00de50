//! Error types for chart construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the chart-construction pipeline.
///
/// `InvalidMoment` is user-correctable. The other two variants report
/// internal table-consistency defects: the build aborts rather than produce
/// a silently wrong chart, and callers should treat them as bug reports.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Moment outside the supported calendar range or malformed.
    InvalidMoment(&'static str),
    /// A pillar could not be located in any Xun/Yuan slot.
    PillarNotInPeriod(&'static str),
    /// A required stem is missing from a built plate.
    DegenerateChart(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMoment(msg) => write!(f, "invalid moment: {msg}"),
            Self::PillarNotInPeriod(msg) => write!(f, "pillar outside period tables: {msg}"),
            Self::DegenerateChart(msg) => write!(f, "degenerate chart: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl ChartError {
    /// Whether the error indicates an internal defect rather than bad input.
    pub const fn is_internal(&self) -> bool {
        !matches!(self, Self::InvalidMoment(_))
    }
}
