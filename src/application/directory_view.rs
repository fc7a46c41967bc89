//! DirectoryView - the therapist search screen.
//!
//! Owns the canonical therapist list of one activation and derives the
//! displayed list from it. Any change to the records or the criteria
//! recomputes the displayed list from scratch.

use std::time::Duration;

use super::lifecycle::{LoadTicket, ViewLifecycle};
use crate::adapters::{FallbackLoader, LoadOutcome};
use crate::domain::directory::{self, booking_link, DisorderFilter, FilterCriteria, TherapistRecord};
use crate::domain::foundation::{TherapistId, ViewStatus};
use crate::ports::SourceInfo;

/// Therapist directory with its search criteria.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    lifecycle: ViewLifecycle,
    therapists: Vec<TherapistRecord>,
    criteria: FilterCriteria,
    displayed: Vec<TherapistRecord>,
    served_by: Option<SourceInfo>,
    min_loading_delay: Duration,
}

impl Default for DirectoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryView {
    pub fn new() -> Self {
        Self {
            lifecycle: ViewLifecycle::new("directory"),
            therapists: Vec::new(),
            criteria: FilterCriteria::default(),
            displayed: Vec::new(),
            served_by: None,
            min_loading_delay: Duration::ZERO,
        }
    }

    /// Keeps the view in `Loading` for `delay` after the chain resolves.
    pub fn with_min_loading_delay(mut self, delay: Duration) -> Self {
        self.min_loading_delay = delay;
        self
    }

    pub fn status(&self) -> ViewStatus {
        self.lifecycle.status()
    }

    /// Loads the canonical list through `loader` and becomes ready.
    ///
    /// Re-activating a ready view reloads it. Returns false if the outcome
    /// was discarded.
    pub async fn activate(&mut self, loader: &FallbackLoader<Vec<TherapistRecord>>) -> bool {
        let ticket = self.begin_load();
        let outcome = loader.load().await;
        if !self.min_loading_delay.is_zero() {
            tokio::time::sleep(self.min_loading_delay).await;
        }
        self.finish_load(ticket, outcome)
    }

    /// Enters `Loading` and returns the ticket the load must present.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.therapists.clear();
        self.served_by = None;
        let ticket = self.lifecycle.begin();
        self.refresh();
        ticket
    }

    /// Installs a load outcome unless `ticket` is stale.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        outcome: LoadOutcome<Vec<TherapistRecord>>,
    ) -> bool {
        if !self.lifecycle.accepts(ticket) {
            tracing::debug!(
                generation = ticket.generation(),
                source = %outcome.served_by,
                "Discarding stale directory load"
            );
            return false;
        }

        tracing::debug!(
            count = outcome.records.len(),
            source = %outcome.served_by,
            "Directory records loaded"
        );
        self.therapists = outcome.records;
        self.served_by = Some(outcome.served_by);
        self.lifecycle.complete();
        self.refresh();
        true
    }

    /// Drops the canonical list. Pending loads become stale.
    pub fn deactivate(&mut self) {
        self.lifecycle.reset();
        self.therapists.clear();
        self.served_by = None;
        self.refresh();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.criteria.city = city.into();
        self.refresh();
    }

    pub fn set_pincode(&mut self, pincode: impl Into<String>) {
        self.criteria.pincode = pincode.into();
        self.refresh();
    }

    pub fn set_disorder(&mut self, disorder: DisorderFilter) {
        self.criteria.disorder = disorder;
        self.refresh();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    /// All loaded therapists, unfiltered.
    pub fn therapists(&self) -> &[TherapistRecord] {
        &self.therapists
    }

    /// Therapists matching the current criteria, in canonical order.
    pub fn displayed(&self) -> &[TherapistRecord] {
        &self.displayed
    }

    /// True when a ready view has nothing to show for the current criteria.
    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }

    /// Results counter, e.g. `"Found 2 therapists"`.
    pub fn results_summary(&self) -> String {
        let count = self.displayed.len();
        let noun = if count == 1 { "therapist" } else { "therapists" };
        format!("Found {} {}", count, noun)
    }

    /// Stage that served the current records.
    pub fn served_by(&self) -> Option<&SourceInfo> {
        self.served_by.as_ref()
    }

    /// WhatsApp booking link for a loaded therapist.
    pub fn booking_link_for(&self, id: TherapistId) -> Option<String> {
        self.therapists
            .iter()
            .find(|therapist| therapist.id == id)
            .map(booking_link)
    }

    fn refresh(&mut self) {
        self.displayed = if self.lifecycle.status().is_ready() {
            directory::apply(&self.therapists, &self.criteria)
        } else {
            Vec::new()
        };
    }
}
