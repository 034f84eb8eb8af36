use crate::model::impact::ImpactError;
use crate::model::network::NetworkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure building baseline network: {source}")]
    NetworkError {
        #[from]
        source: NetworkError,
    },
    #[error("failure computing impact: {source}")]
    ImpactError {
        #[from]
        source: ImpactError,
    },
    #[error("failure reading or writing a file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
