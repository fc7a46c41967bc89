//! Identity of the signed-in user, supplied by the external session provider.

use serde::{Deserialize, Serialize};

/// The part of the signed-in user the community needs: who to credit posts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    #[serde(default)]
    pub full_name: Option<String>,
    /// Role chosen at registration, e.g. "parent" or "therapist".
    pub role: String,
}

impl SessionIdentity {
    pub fn new(full_name: Option<String>, role: impl Into<String>) -> Self {
        Self {
            full_name,
            role: role.into(),
        }
    }

    /// Name shown as post author: the full name, or the role when no name is set.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.role)
    }
}
