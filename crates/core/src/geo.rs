//! Ground locations and observation instants

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{require_finite, Error, Result};

/// Absolute instant with an explicit UTC offset.
///
/// A naive local time cannot be represented; use [`parse_timestamp`] to
/// build one from text.
pub type Timestamp = DateTime<FixedOffset>;

/// Parse an RFC 3339 timestamp such as `2023-07-04T12:00:00+00:00`.
///
/// Strings without an offset (`2023-07-04T12:00:00`) are ambiguous and
/// rejected with [`Error::InvalidInput`].
pub fn parse_timestamp(text: &str) -> Result<Timestamp> {
    DateTime::parse_from_rfc3339(text.trim())
        .map_err(|e| Error::invalid_input("timestamp", text, format!("expected RFC 3339 with offset: {e}")))
}

/// Geographic location in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a point, checking latitude in [-90, 90] and longitude in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let latitude = require_finite("latitude", latitude)?;
        let longitude = require_finite("longitude", longitude)?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::invalid_input("latitude", latitude, "must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::invalid_input("longitude", longitude, "must be within [-180, 180]"));
        }

        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = Error;

    fn try_from(raw: RawGeoPoint) -> Result<Self> {
        GeoPoint::new(raw.latitude, raw.longitude)
    }
}
