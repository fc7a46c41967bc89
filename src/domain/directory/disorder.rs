//! Disorder focus categories and the directory's disorder filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the wildcard disorder filter.
pub const ALL_DISORDERS: &str = "All Disorders";

/// Primary condition a therapist works with.
///
/// The known categories mirror the choices offered by the search form.
/// Anything else a source sends is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisorderFocus {
    Adhd,
    AutismSpectrum,
    SpeechDelay,
    LearningDisabilities,
    AnxietyDisorders,
    Other(String),
}

impl DisorderFocus {
    /// The categories offered as filter choices, in display order.
    pub const KNOWN: [DisorderFocus; 5] = [
        DisorderFocus::Adhd,
        DisorderFocus::AutismSpectrum,
        DisorderFocus::SpeechDelay,
        DisorderFocus::LearningDisabilities,
        DisorderFocus::AnxietyDisorders,
    ];

    /// Returns the display label, which is also the wire value.
    pub fn label(&self) -> &str {
        match self {
            DisorderFocus::Adhd => "ADHD",
            DisorderFocus::AutismSpectrum => "Autism Spectrum Disorder",
            DisorderFocus::SpeechDelay => "Speech Delay",
            DisorderFocus::LearningDisabilities => "Learning Disabilities",
            DisorderFocus::AnxietyDisorders => "Anxiety Disorders",
            DisorderFocus::Other(label) => label,
        }
    }

    /// Maps a label to a category. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|known| known.label() == label)
            .cloned()
            .unwrap_or_else(|| DisorderFocus::Other(label.to_string()))
    }
}

impl From<String> for DisorderFocus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<DisorderFocus> for String {
    fn from(focus: DisorderFocus) -> Self {
        focus.label().to_string()
    }
}

impl fmt::Display for DisorderFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Disorder criterion of the directory search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisorderFilter {
    /// Matches every record.
    #[default]
    All,
    /// Matches records whose focus label equals this one exactly.
    Only(DisorderFocus),
}

impl DisorderFilter {
    /// Returns true if a record with `focus` passes this filter.
    pub fn matches(&self, focus: &DisorderFocus) -> bool {
        match self {
            DisorderFilter::All => true,
            DisorderFilter::Only(wanted) => wanted.label() == focus.label(),
        }
    }

    /// Returns the label shown in the filter selector.
    pub fn label(&self) -> &str {
        match self {
            DisorderFilter::All => ALL_DISORDERS,
            DisorderFilter::Only(focus) => focus.label(),
        }
    }
}

impl FromStr for DisorderFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for DisorderFilter {
    fn from(label: String) -> Self {
        if label == ALL_DISORDERS {
            DisorderFilter::All
        } else {
            DisorderFilter::Only(DisorderFocus::from(label))
        }
    }
}

impl From<DisorderFilter> for String {
    fn from(filter: DisorderFilter) -> Self {
        filter.label().to_string()
    }
}

impl fmt::Display for DisorderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
