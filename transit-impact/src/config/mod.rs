mod network_import;

pub use network_import::{NetworkImportConfiguration, ReportingPeriod};
