use crate::app::CliError;
use serde::{Deserialize, Serialize};

/// the single reporting period of the ridership dataset used to seed
/// baseline station loads.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub year: i32,
    pub quarter: String,
}

impl Default for ReportingPeriod {
    fn default() -> Self {
        Self {
            year: 2024,
            quarter: String::from("I квартал"),
        }
    }
}

/// defines behaviors for a transit network import.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct NetworkImportConfiguration {
    #[serde(default)]
    pub reporting_period: ReportingPeriod,
}

impl TryFrom<&String> for NetworkImportConfiguration {
    type Error = CliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| CliError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s)
                .map_err(|e| CliError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| CliError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s)
                .map_err(|e| CliError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else {
            Err(CliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
