use serde::{Deserialize, Serialize};

use crate::column::ColumnId;

/// Whether a task's local placement is known to match the remote store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SyncState {
    #[default]
    Synced,
    /// Moved locally, remote update still in flight.
    Pending { origin: ColumnId },
    /// Remote update failed; local placement diverges from the store.
    Unsynced { origin: ColumnId, reason: String },
}

impl SyncState {
    pub fn is_synced(&self) -> bool {
        matches!(self, Self::Synced)
    }

    pub fn is_unsynced(&self) -> bool {
        matches!(self, Self::Unsynced { .. })
    }

    pub fn origin(&self) -> Option<ColumnId> {
        match self {
            Self::Synced => None,
            Self::Pending { origin } | Self::Unsynced { origin, .. } => Some(*origin),
        }
    }
}
