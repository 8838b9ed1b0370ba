//! Reflectance correction pipeline
//!
//! location + instant → sun position → atmospheric correction (nadir view)
//! → illumination correction.

use serde::{Deserialize, Serialize};
use crate::imagery::illumination_correction;
use crate::maybe_rayon::*;
use evapolux_core::{GeoPoint, Result, SolarGeometry, SpectralBand, Timestamp, ViewGeometry};
use tracing::{debug, debug_span};

use super::collaborators::{
    AerosolProfile, AtmosphereProfile, AtmosphericCorrectionEngine, AtmosphericRequest,
    SolarGeometryProvider,
};

/// Parameters for the correction pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    /// Standard atmosphere passed to the radiative-transfer model
    pub atmosphere: AtmosphereProfile,
    /// Aerosol model passed to the radiative-transfer model
    pub aerosol: AerosolProfile,
}

/// Every product of one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub geometry: SolarGeometry,
    /// Reflectance after atmospheric correction only
    pub atmospheric_reflectance: f64,
    /// Reflectance after atmospheric and illumination correction
    pub reflectance: f64,
}

/// Composition of a solar geometry provider, an atmospheric correction
/// engine and the illumination correction.
///
/// Holds no state between runs; a single pipeline can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct CorrectionPipeline<P, A> {
    provider: P,
    engine: A,
    params: PipelineParams,
}

impl<P, A> CorrectionPipeline<P, A>
where
    P: SolarGeometryProvider,
    A: AtmosphericCorrectionEngine,
{
    pub fn new(provider: P, engine: A) -> Self {
        Self::with_params(provider, engine, PipelineParams::default())
    }

    pub fn with_params(provider: P, engine: A, params: PipelineParams) -> Self {
        Self {
            provider,
            engine,
            params,
        }
    }

    /// Corrected reflectance for `band` at `point` and `time`.
    ///
    /// # Errors
    /// * the provider's error (e.g. `GeometryUnavailable`), unchanged; the
    ///   engine is not called
    /// * the engine's error (e.g. `AtmosphericModel`), unchanged
    /// * `SunBelowHorizon` when the sun elevation is `<= 0` or `>= 180`
    pub fn run(&self, point: &GeoPoint, time: &Timestamp, band: SpectralBand) -> Result<f64> {
        self.run_detailed(point, time, band).map(|out| out.reflectance)
    }

    /// Same as [`run`](Self::run), also returning the sun position and the
    /// atmospherically-corrected reflectance.
    pub fn run_detailed(
        &self,
        point: &GeoPoint,
        time: &Timestamp,
        band: SpectralBand,
    ) -> Result<PipelineOutput> {
        let span = debug_span!(
            "correction_pipeline",
            lat = point.latitude(),
            lon = point.longitude(),
            wavelength_um = band.wavelength_um(),
        );
        let _enter = span.enter();

        let geometry = self.provider.solar_geometry(point, time)?;
        debug!(
            elevation_deg = geometry.elevation_deg,
            azimuth_deg = geometry.azimuth_deg,
            "solar geometry"
        );

        let view = ViewGeometry::NADIR;
        let request = AtmosphericRequest {
            solar_zenith_deg: geometry.zenith_deg(),
            solar_azimuth_deg: geometry.azimuth_deg,
            view_zenith_deg: view.zenith_deg,
            view_azimuth_deg: view.azimuth_deg,
            wavelength_um: band.wavelength_um(),
            atmosphere: self.params.atmosphere,
            aerosol: self.params.aerosol,
        };
        let atmospheric_reflectance = self.engine.correct_reflectance(&request)?;
        debug!(atmospheric_reflectance, "atmospheric correction");

        let reflectance = illumination_correction(atmospheric_reflectance, geometry.elevation_deg)?;
        debug!(reflectance, "illumination correction");

        Ok(PipelineOutput {
            geometry,
            atmospheric_reflectance,
            reflectance,
        })
    }

    /// Run the pipeline for many points at the same instant.
    ///
    /// Points are independent; one result per point, in input order.
    pub fn run_many(
        &self,
        points: &[GeoPoint],
        time: &Timestamp,
        band: SpectralBand,
    ) -> Vec<Result<f64>> {
        points
            .par_iter()
            .map(|point| self.run(point, time, band))
            .collect()
    }
}

/// Corrected reflectance for one band at one location and instant.
///
/// Convenience over [`CorrectionPipeline`] with default parameters.
pub fn correct_reflectance_pipeline<P, A>(
    provider: &P,
    engine: &A,
    point: &GeoPoint,
    time: &Timestamp,
    band: SpectralBand,
) -> Result<f64>
where
    P: SolarGeometryProvider + ?Sized,
    A: AtmosphericCorrectionEngine + ?Sized,
{
    CorrectionPipeline::new(provider, engine).run(point, time, band)
}
