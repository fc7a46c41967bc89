//! Filter engine for the therapist directory.
//!
//! The displayed list is always recomputed from the canonical list; there
//! is no incremental maintenance. A record is shown when the city, postal
//! code, and disorder criteria all match.

use serde::{Deserialize, Serialize};

use super::{DisorderFilter, TherapistRecord};

/// User-entered search criteria. The default matches every record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the location. Empty matches all.
    #[serde(default)]
    pub city: String,
    /// Case-sensitive substring of the location. Empty matches all.
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub disorder: DisorderFilter,
}

impl FilterCriteria {
    /// Creates criteria that match every record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_pincode(mut self, pincode: impl Into<String>) -> Self {
        self.pincode = pincode.into();
        self
    }

    pub fn with_disorder(mut self, disorder: DisorderFilter) -> Self {
        self.disorder = disorder;
        self
    }

    /// Returns true if no criterion narrows the list.
    pub fn is_wildcard(&self) -> bool {
        self.city.is_empty() && self.pincode.is_empty() && self.disorder == DisorderFilter::All
    }

    /// Returns true if `record` satisfies every criterion.
    pub fn matches(&self, record: &TherapistRecord) -> bool {
        let city_match = self.city.is_empty() || record.location_contains_ignore_case(&self.city);
        let pincode_match = self.pincode.is_empty() || record.location_contains(&self.pincode);
        let disorder_match = self.disorder.matches(&record.disorder_focus);

        city_match && pincode_match && disorder_match
    }
}

/// Derives the displayed list from the canonical list.
///
/// Pure and order-preserving; always returns a fresh list.
pub fn apply(records: &[TherapistRecord], criteria: &FilterCriteria) -> Vec<TherapistRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
