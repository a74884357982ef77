use crate::status::BuildStatus;

/// Aggregate view over a whole status board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateState {
    /// Systems up to and including the last reported one
    pub active_count: usize,
    /// True when nothing in the active range is failing
    pub all_pass: bool,
}

/// Evaluate the aggregate for a board
///
/// The active range ends at the last non-`None` system; gaps inside it
/// still count as active slots. An empty board is vacuously all-pass.
pub fn evaluate(statuses: &[BuildStatus]) -> AggregateState {
    let active_count = statuses
        .iter()
        .rposition(|status| *status != BuildStatus::None)
        .map_or(0, |last| last + 1);
    let all_pass = statuses[..active_count]
        .iter()
        .all(|status| !status.is_failing());

    AggregateState {
        active_count,
        all_pass,
    }
}
