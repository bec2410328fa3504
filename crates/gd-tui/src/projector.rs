//! Pure projections from display state to renderable records.

use crate::state::DashboardState;

/// Shown in the Last Consensus card when no round has completed yet.
pub const LAST_CONSENSUS_PLACEHOLDER: &str = "-";

/// One bar of the reputation chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ReputationEntry {
    pub peer: String,
    pub score: f64,
}

/// One record per peer, in map iteration order. The order carries no
/// meaning; it is only stable so the chart doesn't jitter between frames.
pub fn reputation_entries(state: &DashboardState) -> Vec<ReputationEntry> {
    state
        .reputation
        .iter()
        .map(|(peer, score)| ReputationEntry {
            peer: peer.clone(),
            score: *score,
        })
        .collect()
}

/// The most recent consensus result, or the placeholder when the history
/// is empty.
pub fn last_consensus(state: &DashboardState) -> String {
    state
        .consensus_history
        .last()
        .map(ToString::to_string)
        .unwrap_or_else(|| LAST_CONSENSUS_PLACEHOLDER.to_string())
}

/// The full history as display labels, oldest first.
pub fn history_labels(state: &DashboardState) -> Vec<String> {
    state
        .consensus_history
        .iter()
        .map(ToString::to_string)
        .collect()
}
