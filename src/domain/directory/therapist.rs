//! Therapist records as shown in the directory.
//!
//! Records are decoded through [`TherapistWire`], which absorbs the shape
//! differences between the API, the bundled snapshot, and the output of the
//! CSV import tool (separate `city`/`pincode` columns, numeric fees, a
//! comma-separated `languages` string, `ratings` instead of `rating`).

use serde::{Deserialize, Serialize};

use super::DisorderFocus;
use crate::domain::foundation::{Rating, TherapistId, ValidationError};

/// Language shown when a source omits the language list.
pub const DEFAULT_LANGUAGE: &str = "English";

/// A therapist listed in the directory. Never modified after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TherapistWire")]
pub struct TherapistRecord {
    pub id: TherapistId,
    pub name: String,
    pub specialization: String,
    pub disorder_focus: DisorderFocus,
    /// City and postal code, e.g. `"Mumbai, 400001"`.
    pub location: String,
    /// Never empty.
    pub languages: Vec<String>,
    /// Currency-prefixed fee, e.g. `"₹1500 per session"`.
    pub fee: String,
    pub rating: Rating,
    /// Phone number used for WhatsApp bookings.
    #[serde(rename = "whatsapp")]
    pub contact_handle: String,
}

impl TherapistRecord {
    /// Returns true if the location contains `city`, ignoring case.
    pub fn location_contains_ignore_case(&self, city: &str) -> bool {
        self.location.to_lowercase().contains(&city.to_lowercase())
    }

    /// Returns true if the location contains `fragment` verbatim.
    pub fn location_contains(&self, fragment: &str) -> bool {
        self.location.contains(fragment)
    }
}

/// Permissive wire shape accepted from every therapist source.
#[derive(Debug, Deserialize)]
struct TherapistWire {
    id: TherapistId,
    name: String,
    #[serde(default)]
    specialization: String,
    #[serde(default, alias = "disorder")]
    disorder_focus: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    pincode: Option<String>,
    #[serde(default)]
    languages: Option<LanguagesWire>,
    #[serde(default)]
    fee: Option<FeeWire>,
    #[serde(default, alias = "ratings")]
    rating: Option<f32>,
    #[serde(default)]
    whatsapp: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LanguagesWire {
    List(Vec<String>),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeeWire {
    Amount(u64),
    Text(String),
}

impl TryFrom<TherapistWire> for TherapistRecord {
    type Error = ValidationError;

    fn try_from(wire: TherapistWire) -> Result<Self, Self::Error> {
        let name = wire.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let location = match wire.location {
            Some(location) => location,
            None => compose_location(wire.city.as_deref(), wire.pincode.as_deref()),
        };

        Ok(Self {
            id: wire.id,
            name,
            specialization: wire.specialization,
            disorder_focus: DisorderFocus::from_label(
                wire.disorder_focus.as_deref().unwrap_or_default(),
            ),
            location,
            languages: normalize_languages(wire.languages),
            fee: match wire.fee {
                Some(FeeWire::Amount(amount)) => format!("₹{} per session", amount),
                Some(FeeWire::Text(text)) => text,
                None => String::new(),
            },
            rating: Rating::try_new(wire.rating.unwrap_or(0.0))?,
            contact_handle: wire.whatsapp,
        })
    }
}

fn compose_location(city: Option<&str>, pincode: Option<&str>) -> String {
    [city, pincode]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn normalize_languages(languages: Option<LanguagesWire>) -> Vec<String> {
    let list: Vec<String> = match languages {
        Some(LanguagesWire::List(list)) => list,
        Some(LanguagesWire::Text(text)) => text.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    };

    let list: Vec<String> = list
        .into_iter()
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
        .collect();

    if list.is_empty() {
        vec![DEFAULT_LANGUAGE.to_string()]
    } else {
        list
    }
}
