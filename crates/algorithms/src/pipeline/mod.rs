//! Reflectance correction pipeline and its external collaborators

mod collaborators;
mod correction;

pub use collaborators::{
    AerosolProfile, AtmosphereProfile, AtmosphericCorrectionEngine, AtmosphericRequest,
    FixedSolarGeometry, SolarGeometryProvider,
};
pub use correction::{
    correct_reflectance_pipeline, CorrectionPipeline, PipelineOutput, PipelineParams,
};
