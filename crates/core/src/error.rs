//! Error types for evapolux

use thiserror::Error;

/// Main error type for evapolux operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Out-of-domain meteorological or geometric input
    #[error("Invalid input: {name} = {value} ({reason})")]
    InvalidInput {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Illumination correction is undefined with the sun at or below the horizon
    #[error("Sun at or below the horizon (elevation {elevation_deg}°), illumination correction undefined")]
    SunBelowHorizon { elevation_deg: f64 },

    /// The solar geometry provider could not compute a sun position
    #[error("Solar geometry unavailable: {0}")]
    GeometryUnavailable(String),

    /// The atmospheric correction engine rejected the request or failed to converge
    #[error("Atmospheric model error: {0}")]
    AtmosphericModel(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`]
    pub fn invalid_input(name: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for evapolux operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reject NaN and infinities with [`Error::InvalidInput`].
pub fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_input(name, value, "must be finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("x", 1.5), Ok(1.5));
        assert!(matches!(
            require_finite("x", f64::NAN),
            Err(Error::InvalidInput { name: "x", .. })
        ));
        assert!(require_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        let err = Error::invalid_input("rh_mean", 120.0, "must be within [0, 100]");
        assert_eq!(err.to_string(), "Invalid input: rh_mean = 120 (must be within [0, 100])");

        let err = Error::SunBelowHorizon { elevation_deg: -3.0 };
        assert!(err.to_string().contains("-3"));
    }
}
