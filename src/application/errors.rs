//! View-level error types.

use thiserror::Error;

use crate::domain::foundation::{ValidationError, ViewStatus};

/// Errors returned by view operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    /// Mutation attempted before the view finished loading.
    #[error("view is {status}, mutations require ready")]
    NotReady { status: ViewStatus },

    /// Submitted input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ViewError {
    pub fn not_ready(status: ViewStatus) -> Self {
        ViewError::NotReady { status }
    }
}
