mod cli_error;
pub mod impact_app;

pub use cli_error::CliError;
pub use impact_app::{App, ImpactAppArguments};
