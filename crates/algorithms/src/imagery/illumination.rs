//! Solar illumination (cosine-law) correction
//!
//! Normalizes an atmospherically-corrected reflectance to an overhead sun by
//! dividing by the cosine of the solar zenith angle.

use ndarray::Array2;
use crate::maybe_rayon::*;
use evapolux_core::error::require_finite;
use evapolux_core::{Algorithm, Error, Result};

/// Illumination correction algorithm
#[derive(Debug, Clone, Default)]
pub struct IlluminationCorrection;

/// Parameters for illumination correction
#[derive(Debug, Clone)]
pub struct IlluminationParams {
    /// Sun elevation in degrees above horizon
    pub solar_elevation_deg: f64,
}

impl Default for IlluminationParams {
    fn default() -> Self {
        Self {
            solar_elevation_deg: 90.0, // overhead sun, identity correction
        }
    }
}

impl Algorithm for IlluminationCorrection {
    type Input = f64;
    type Output = f64;
    type Params = IlluminationParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "IlluminationCorrection"
    }

    fn description(&self) -> &'static str {
        "Cosine-law correction of reflectance for solar elevation"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        illumination_correction(input, params.solar_elevation_deg)
    }
}

/// Cosine of the solar zenith for a given elevation, rejecting a sun at or
/// below the horizon.
///
/// Elevations of 180° and beyond put the sun back at or below the opposite
/// horizon (200° is a sun at -20°).
fn cos_zenith(solar_elevation_deg: f64) -> Result<f64> {
    let elevation = require_finite("solar_elevation_deg", solar_elevation_deg)?;
    if elevation <= 0.0 || elevation >= 180.0 {
        return Err(Error::SunBelowHorizon {
            elevation_deg: elevation,
        });
    }
    Ok((90.0 - elevation).to_radians().cos())
}

/// Correct a reflectance value for solar illumination.
///
/// `corrected = reflectance / cos(90° - solar_elevation)`
///
/// The reflectance itself is not range-checked.
///
/// # Errors
/// * [`Error::SunBelowHorizon`] if `solar_elevation_deg <= 0` or `>= 180`
/// * [`Error::InvalidInput`] if the elevation is not finite
pub fn illumination_correction(reflectance: f64, solar_elevation_deg: f64) -> Result<f64> {
    let cos_z = cos_zenith(solar_elevation_deg)?;
    Ok(reflectance / cos_z)
}

/// Apply [`illumination_correction`] to every cell of a reflectance grid.
///
/// NaN cells (nodata) stay NaN. A below-horizon sun fails for the whole grid.
pub fn illumination_correction_grid(
    reflectance: &Array2<f64>,
    solar_elevation_deg: f64,
) -> Result<Array2<f64>> {
    let cos_z = cos_zenith(solar_elevation_deg)?;
    let (rows, cols) = reflectance.dim();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![f64::NAN; cols];
            for col in 0..cols {
                let r = reflectance[[row, col]];
                if r.is_nan() {
                    continue;
                }
                row_data[col] = r / cos_z;
            }
            row_data
        })
        .collect();

    Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))
}
