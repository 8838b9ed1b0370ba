//! # evapolux Core
//!
//! Core types, errors and traits for the evapolux library.
//!
//! This crate provides:
//! - `GeoPoint` / `Timestamp`: where and when a correction is requested
//! - `SolarGeometry` / `ViewGeometry`: sun and sensor directions
//! - `SpectralBand`: band identification by wavelength
//! - `MeteorologicalObservation`: daily inputs to reference ET
//! - `Algorithm` trait for a consistent API

pub mod error;
pub mod geo;
pub mod meteo;
pub mod solar;
pub mod spectral;

pub use error::{Error, Result};
pub use geo::{parse_timestamp, GeoPoint, Timestamp};
pub use meteo::MeteorologicalObservation;
pub use solar::{SolarGeometry, ViewGeometry};
pub use spectral::SpectralBand;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geo::{parse_timestamp, GeoPoint, Timestamp};
    pub use crate::meteo::MeteorologicalObservation;
    pub use crate::solar::{SolarGeometry, ViewGeometry};
    pub use crate::spectral::SpectralBand;
    pub use crate::Algorithm;
}

/// Common interface of the correction and estimation algorithms.
///
/// Implementations hold no state: the same input and parameters always give
/// the same output.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
