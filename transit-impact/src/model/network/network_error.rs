use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("failure reading dataset file {0}: {1}")]
    DatasetIoError(String, String),
    #[error("failure decoding dataset file {0}: {1}")]
    DatasetFormatError(String, String),
    #[error("lane count {0} outside the lane capacity table")]
    UnknownLaneCount(u64),
    #[error("speed limit {0} outside the speed factor table")]
    UnknownSpeedLimit(u64),
    #[error("{0}")]
    InternalError(String),
}
