//! Rating value object for therapist reviews (0.0 to 5.0 stars).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Average review score on a five-star scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(f32);

impl Rating {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 5.0;

    /// Creates a Rating, returning error if outside 0.0..=5.0 or not a number.
    pub fn try_new(value: f32) -> Result<Self, ValidationError> {
        if value.is_nan() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "rating",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Rating {
    type Error = ValidationError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_bounds() {
        assert_eq!(Rating::try_new(0.0).unwrap().value(), 0.0);
        assert_eq!(Rating::try_new(5.0).unwrap().value(), 5.0);
        assert_eq!(Rating::try_new(4.8).unwrap().value(), 4.8);
    }

    #[test]
    fn rating_rejects_out_of_range_values() {
        assert!(Rating::try_new(-0.1).is_err());
        assert!(Rating::try_new(5.1).is_err());
        assert!(Rating::try_new(f32::NAN).is_err());
    }

    #[test]
    fn rating_displays_one_decimal() {
        assert_eq!(Rating::try_new(4.0).unwrap().to_string(), "4.0");
        assert_eq!(Rating::try_new(4.76).unwrap().to_string(), "4.8");
    }

    #[test]
    fn rating_deserializes_from_number() {
        let rating: Rating = serde_json::from_str("4.6").unwrap();
        assert_eq!(rating.value(), 4.6);
    }

    #[test]
    fn rating_deserialization_rejects_invalid_value() {
        let result: Result<Rating, _> = serde_json::from_str("9.0");
        assert!(result.is_err());
    }
}
