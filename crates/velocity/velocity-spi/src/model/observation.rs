//! Sprint velocity observation model

use serde::{Deserialize, Serialize};

/// A single sprint's velocity.
///
/// Invalid observations (cancelled sprints, holidays, team changes and the
/// like) are still recorded so they can be reported, but they never take part
/// in the mean or confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Observation {
    /// Velocity that counts towards forecasting
    Valid(f64),
    /// Velocity that is recorded but excluded from forecasting
    Invalid(f64),
}

impl Observation {
    /// Decode the signed inline notation: a negative number marks an invalid
    /// observation whose true velocity is its magnitude.
    ///
    /// Negative zero (`-0.0`) decodes to `Invalid(0.0)`. Returns `None` for
    /// NaN and infinities.
    pub fn from_signed(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value.is_sign_negative() {
            Some(Self::Invalid(value.abs()))
        } else {
            Some(Self::Valid(value))
        }
    }

    /// Encode back into the signed inline notation.
    pub fn to_signed(self) -> f64 {
        match self {
            Self::Valid(v) => v,
            Self::Invalid(v) => -v,
        }
    }

    /// True velocity, regardless of validity.
    pub fn value(self) -> f64 {
        match self {
            Self::Valid(v) | Self::Invalid(v) => v,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Velocity if this observation counts towards forecasting.
    pub fn valid_value(self) -> Option<f64> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signed_positive_is_valid() {
        assert_eq!(Observation::from_signed(28.0), Some(Observation::Valid(28.0)));
        assert_eq!(Observation::from_signed(0.0), Some(Observation::Valid(0.0)));
    }

    #[test]
    fn test_from_signed_negative_is_invalid_magnitude() {
        assert_eq!(Observation::from_signed(-22.0), Some(Observation::Invalid(22.0)));
        assert_eq!(Observation::from_signed(-0.01), Some(Observation::Invalid(0.01)));
    }

    #[test]
    fn test_negative_zero_is_invalid_zero() {
        let obs = Observation::from_signed(-0.0).unwrap();
        assert_eq!(obs, Observation::Invalid(0.0));
        assert!(!obs.is_valid());
        assert!(obs.to_signed().is_sign_negative());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Observation::from_signed(f64::NAN).is_none());
        assert!(Observation::from_signed(f64::INFINITY).is_none());
        assert!(Observation::from_signed(f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn test_accessors() {
        let valid = Observation::Valid(20.0);
        let invalid = Observation::Invalid(2.0);

        assert_eq!(valid.value(), 20.0);
        assert_eq!(invalid.value(), 2.0);
        assert_eq!(valid.valid_value(), Some(20.0));
        assert_eq!(invalid.valid_value(), None);
        assert_eq!(invalid.to_signed(), -2.0);
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&Observation::Invalid(53.0)).unwrap();
        assert_eq!(json, r#"{"status":"invalid","value":53.0}"#);

        let back: Observation = serde_json::from_str(r#"{"status":"valid","value":19}"#).unwrap();
        assert_eq!(back, Observation::Valid(19.0));
    }
}
