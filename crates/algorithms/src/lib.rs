//! # evapolux Algorithms
//!
//! Reflectance correction and reference evapotranspiration.
//!
//! ## Available Algorithm Categories
//!
//! - **imagery**: Solar illumination (cosine-law) correction
//! - **meteorology**: Vapour pressure terms, FAO-56 Penman-Monteith reference ET
//! - **pipeline**: Sun position → atmospheric correction → illumination correction
//!
//! The two entry points most callers need are [`correct_reflectance_pipeline`]
//! and [`estimate_et`].

pub mod imagery;
pub mod meteorology;
pub mod pipeline;

mod maybe_rayon;

pub use meteorology::reference_et as estimate_et;
pub use pipeline::correct_reflectance_pipeline;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::imagery::{
        illumination_correction, illumination_correction_grid, IlluminationCorrection,
        IlluminationParams,
    };
    pub use crate::meteorology::{
        reference_et, reference_et_series, ReferenceEvapotranspiration,
    };
    pub use crate::pipeline::{
        correct_reflectance_pipeline, AerosolProfile, AtmosphereProfile,
        AtmosphericCorrectionEngine, AtmosphericRequest, CorrectionPipeline,
        FixedSolarGeometry, PipelineOutput, PipelineParams, SolarGeometryProvider,
    };
    pub use crate::estimate_et;
    pub use evapolux_core::prelude::*;
}
