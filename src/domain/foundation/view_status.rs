//! ViewStatus enum for tracking the lifecycle of a data-backed view.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a directory or community view.
///
/// `Uninitialized -> Loading -> Ready`. Deactivating the view from any
/// other state returns it to `Uninitialized`; a view only reloads after it
/// has been deactivated and activated again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

impl ViewStatus {
    /// Returns true once the canonical list is available for filtering and edits.
    pub fn is_ready(&self) -> bool {
        matches!(self, ViewStatus::Ready)
    }

    /// Returns true while the loading indicator should be shown.
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewStatus::Loading)
    }
}

impl StateMachine for ViewStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ViewStatus::*;
        matches!(
            (self, target),
            (Uninitialized, Loading)
                | (Loading, Ready)
                | (Loading, Uninitialized)
                | (Ready, Uninitialized)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ViewStatus::*;
        match self {
            Uninitialized => vec![Loading],
            Loading => vec![Ready, Uninitialized],
            Ready => vec![Uninitialized],
        }
    }
}

impl fmt::Display for ViewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewStatus::Uninitialized => "Uninitialized",
            ViewStatus::Loading => "Loading",
            ViewStatus::Ready => "Ready",
        };
        write!(f, "{}", s)
    }
}
