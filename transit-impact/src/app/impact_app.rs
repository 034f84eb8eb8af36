use crate::app::CliError;
use crate::config::NetworkImportConfiguration;
use crate::model::impact::{impact_ops, ImpactRequest};
use crate::model::network::NetworkRepository;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ImpactAppArguments {
    #[command(subcommand)]
    pub app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// estimate the transit load added by a batch of development footprints
    Calculate {
        #[arg(long, help = "path to the station boundary points JSON file")]
        stations_file: String,
        #[arg(long, help = "path to the quarterly station ridership CSV file")]
        ridership_file: String,
        #[arg(long, help = "path to the road features GeoJSON file")]
        roads_file: String,
        #[arg(long, help = "path to a file with network import parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "path to a JSON file with development footprints to evaluate")]
        request_file: String,
        #[arg(long, help = "output path for the impact result, stdout when omitted")]
        output_file: Option<String>,
    },
}

pub fn run(app: &App) -> Result<(), CliError> {
    match app {
        App::Calculate {
            stations_file,
            ridership_file,
            roads_file,
            configuration_file,
            request_file,
            output_file,
        } => {
            let conf = match configuration_file {
                None => Ok(NetworkImportConfiguration::default()),
                Some(f) => {
                    log::info!("reading network import configuration from {f}");
                    NetworkImportConfiguration::try_from(f)
                }
            }?;
            let repository = NetworkRepository::from_files(
                Path::new(stations_file),
                Path::new(ridership_file),
                Path::new(roads_file),
                &conf,
            )?;

            let request_str = std::fs::read_to_string(request_file)?;
            let request: ImpactRequest = serde_json::from_str(&request_str)?;
            log::info!(
                "evaluating {} development footprints",
                request.projects.len()
            );

            let result = impact_ops::compute_impact(&repository, &request.projects)?;
            log::info!(
                "impact touches {} stations and {} road segments",
                result.station_loads.len(),
                result.road_loads.len()
            );

            let encoded = serde_json::to_string_pretty(&result)?;
            match output_file {
                Some(f) => std::fs::write(f, encoded)?,
                None => println!("{encoded}"),
            }
            Ok(())
        }
    }
}
