use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImpactError {
    #[error("development footprint has no boundary points")]
    EmptyBoundary,
    #[error("matched {0} '{1}' missing from the working copy; matching and write-back disagree")]
    MissingFacilityOnWriteBack(String, String),
}
