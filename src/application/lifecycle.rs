//! Activation bookkeeping shared by the views.

use super::ViewError;
use crate::domain::foundation::{StateMachine, ViewStatus};

/// Proof that a load was started by a particular activation.
///
/// A ticket from an earlier activation is rejected by `finish_load`, so a
/// fetch that outlives its view never lands in a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Status plus activation generation of one view.
#[derive(Debug, Clone)]
pub(crate) struct ViewLifecycle {
    view: &'static str,
    status: ViewStatus,
    generation: u64,
}

impl ViewLifecycle {
    pub(crate) fn new(view: &'static str) -> Self {
        Self {
            view,
            status: ViewStatus::default(),
            generation: 0,
        }
    }

    pub(crate) fn status(&self) -> ViewStatus {
        self.status
    }

    /// Starts a new activation, implicitly deactivating a live one.
    pub(crate) fn begin(&mut self) -> LoadTicket {
        self.reset();
        self.generation += 1;
        self.advance(ViewStatus::Loading);
        LoadTicket {
            generation: self.generation,
        }
    }

    /// True if `ticket` belongs to the activation still waiting for data.
    pub(crate) fn accepts(&self, ticket: LoadTicket) -> bool {
        self.status.is_loading() && ticket.generation == self.generation
    }

    pub(crate) fn complete(&mut self) {
        self.advance(ViewStatus::Ready);
    }

    /// Returns to `Uninitialized`; outstanding tickets become stale.
    pub(crate) fn reset(&mut self) {
        if self.status != ViewStatus::Uninitialized {
            self.generation += 1;
            self.advance(ViewStatus::Uninitialized);
        }
    }

    pub(crate) fn require_ready(&self) -> Result<(), ViewError> {
        if self.status.is_ready() {
            Ok(())
        } else {
            Err(ViewError::not_ready(self.status))
        }
    }

    /// Moves to `next` if the status machine allows it; otherwise logs and stays put.
    fn advance(&mut self, next: ViewStatus) {
        match self.status.transition_to(next) {
            Ok(next) => {
                tracing::info!(view = self.view, from = %self.status, to = %next, "View status changed");
                self.status = next;
            }
            Err(error) => {
                tracing::error!(view = self.view, %error, "Rejected view status change");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_is_accepted_until_completion() {
        let mut lifecycle = ViewLifecycle::new("test");
        let ticket = lifecycle.begin();

        assert!(lifecycle.accepts(ticket));
        lifecycle.complete();
        assert!(!lifecycle.accepts(ticket));
    }

    #[test]
    fn reset_invalidates_outstanding_ticket() {
        let mut lifecycle = ViewLifecycle::new("test");
        let ticket = lifecycle.begin();

        lifecycle.reset();

        assert_eq!(lifecycle.status(), ViewStatus::Uninitialized);
        assert!(!lifecycle.accepts(ticket));
    }

    #[test]
    fn reactivation_supersedes_previous_ticket() {
        let mut lifecycle = ViewLifecycle::new("test");
        let first = lifecycle.begin();
        let second = lifecycle.begin();

        assert!(!lifecycle.accepts(first));
        assert!(lifecycle.accepts(second));
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn completing_without_a_load_keeps_status() {
        let mut lifecycle = ViewLifecycle::new("test");

        lifecycle.complete();

        assert_eq!(lifecycle.status(), ViewStatus::Uninitialized);
        assert!(lifecycle.require_ready().is_err());
    }

    #[test]
    fn completing_twice_stays_ready() {
        let mut lifecycle = ViewLifecycle::new("test");
        lifecycle.begin();
        lifecycle.complete();

        lifecycle.complete();

        assert_eq!(lifecycle.status(), ViewStatus::Ready);
    }

    #[test]
    fn require_ready_reports_current_status() {
        let mut lifecycle = ViewLifecycle::new("test");
        assert_eq!(
            lifecycle.require_ready(),
            Err(ViewError::not_ready(ViewStatus::Uninitialized))
        );

        lifecycle.begin();
        lifecycle.complete();
        assert!(lifecycle.require_ready().is_ok());
    }
}
