//! Display state and the merge step that folds snapshots into it.

use std::collections::BTreeMap;

use gd_api_types::{ConsensusValue, MetricsSnapshot};

/// Everything the dashboard renders. Created zero-valued when the app
/// starts, mutated only by [`merge_snapshot`], discarded on exit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub tasks_completed: u64,
    pub consensus_history: Vec<ConsensusValue>,
    pub reputation: BTreeMap<String, f64>,
    pub active_peers: Vec<String>,
}

/// Right-biased shallow merge: every field present in `snapshot` replaces
/// the corresponding field of `prev` wholesale (sequences and maps are
/// swapped out, never appended or unioned); absent fields keep their
/// previous value. Pure — neither input is mutated.
pub fn merge_snapshot(prev: &DashboardState, snapshot: MetricsSnapshot) -> DashboardState {
    DashboardState {
        tasks_completed: snapshot.tasks_completed.unwrap_or(prev.tasks_completed),
        consensus_history: snapshot
            .consensus_history
            .unwrap_or_else(|| prev.consensus_history.clone()),
        reputation: snapshot
            .reputation
            .unwrap_or_else(|| prev.reputation.clone()),
        active_peers: snapshot
            .active_peers
            .unwrap_or_else(|| prev.active_peers.clone()),
    }
}

/// Canned state for `--offline` mode and render tests.
pub fn demo_state() -> DashboardState {
    DashboardState {
        tasks_completed: 12,
        consensus_history: vec![3.into(), 7.into(), 3.into(), 1.into(), 4.into()],
        reputation: BTreeMap::from([
            ("peer-alpha".to_string(), 14.0),
            ("peer-bravo".to_string(), 9.0),
            ("peer-charlie".to_string(), 21.0),
        ]),
        active_peers: vec![
            "peer-alpha".to_string(),
            "peer-bravo".to_string(),
            "peer-charlie".to_string(),
        ],
    }
}
