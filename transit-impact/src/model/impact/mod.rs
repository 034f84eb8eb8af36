pub mod distribution_ops;
mod footprint;
mod impact_error;
pub mod impact_ops;
mod impact_result;
pub mod spatial_ops;

pub use footprint::{DevelopmentFootprint, ImpactRequest};
pub use impact_error::ImpactError;
pub use impact_result::ImpactResult;
