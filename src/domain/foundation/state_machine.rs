//! Transition rules for lifecycle status enums.

use std::fmt;

use super::ValidationError;

/// A status enum with a fixed set of allowed moves.
pub trait StateMachine: Sized + Copy + PartialEq + fmt::Display {
    /// Whether `self -> target` is an allowed move.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Every status reachable from `self` in one move.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns `target` if the move is allowed.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` on the `status` field, naming both ends of the move.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(&target) {
            return Err(ValidationError::invalid_format(
                "status",
                format!("{} cannot move to {}", self, target),
            ));
        }
        Ok(target)
    }
}
