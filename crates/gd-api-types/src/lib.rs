//! Wire types for the gradient-swarm metrics endpoint.
//!
//! The metrics server exposes a single JSON object at `/metrics`. Every key
//! is optional: a snapshot may carry any subset of the fields, and the
//! dashboard only overwrites what is actually present. That is why each
//! field here is an `Option` rather than relying on `#[serde(default)]`
//! zero values — an absent key must stay distinguishable from an empty one.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One decoded body of `GET /metrics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Total tasks the swarm has completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_completed: Option<u64>,
    /// Ordered consensus results, oldest first. The server appends; the
    /// client always replaces the whole sequence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consensus_history: Option<Vec<ConsensusValue>>,
    /// Peer id → reputation score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputation: Option<BTreeMap<String, f64>>,
    /// Peer ids currently registered with the coordinator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_peers: Option<Vec<String>>,
}

impl MetricsSnapshot {
    /// True when the snapshot carries no fields at all (`{}` body).
    pub fn is_empty(&self) -> bool {
        self.tasks_completed.is_none()
            && self.consensus_history.is_none()
            && self.reputation.is_none()
            && self.active_peers.is_none()
    }
}

/// A single consensus result. The server reports whatever the swarm agreed
/// on — typically a digit, but the dashboard treats it as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConsensusValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ConsensusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsensusValue::Integer(n) => write!(f, "{n}"),
            ConsensusValue::Float(x) => write!(f, "{x}"),
            ConsensusValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ConsensusValue {
    fn from(n: i64) -> Self {
        ConsensusValue::Integer(n)
    }
}

impl From<&str> for ConsensusValue {
    fn from(s: &str) -> Self {
        ConsensusValue::Text(s.to_string())
    }
}
