/// Failure of a single aggregation call.
///
/// Errors are local to the call that produced them. Aggregations are
/// deterministic, so retrying with the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The statistic is undefined for zero elements.
    #[display("{statistic} is undefined for empty input")]
    EmptyInput { statistic: &'static str },
    /// A denominator vanished (e.g. zero variance in one of the fields).
    #[display("{statistic} is undefined: {reason}")]
    DegenerateInput {
        statistic: &'static str,
        reason: &'static str,
    },
}

impl StatsError {
    pub(crate) fn empty(statistic: &'static str) -> Self {
        Self::EmptyInput { statistic }
    }

    pub(crate) fn degenerate(statistic: &'static str, reason: &'static str) -> Self {
        Self::DegenerateInput { statistic, reason }
    }
}
