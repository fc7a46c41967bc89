//! Directory module - Therapist records and the search filter engine.

mod booking;
mod disorder;
mod filter;
mod therapist;

pub use booking::{booking_link, booking_message};
pub use disorder::{DisorderFilter, DisorderFocus, ALL_DISORDERS};
pub use filter::{apply, FilterCriteria};
pub use therapist::{TherapistRecord, DEFAULT_LANGUAGE};
