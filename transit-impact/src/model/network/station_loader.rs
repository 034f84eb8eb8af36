use super::{MetroStation, NetworkError};
use crate::config::ReportingPeriod;
use geo::Coord;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// one row of the station boundary dataset. coordinates arrive as strings
/// and are parsed per-record.
#[derive(Debug, Deserialize)]
pub struct StationBoundaryRecord {
    #[serde(rename = "NameOfStation")]
    pub name: String,
    #[serde(rename = "Latitude_WGS84")]
    pub latitude: String,
    #[serde(rename = "Longitude_WGS84")]
    pub longitude: String,
}

/// one row of the quarterly ridership dataset.
#[derive(Debug, Deserialize)]
pub struct RidershipRecord {
    #[serde(rename = "NameOfStation")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Quarter")]
    pub quarter: String,
    #[serde(rename = "IncomingPassengers")]
    pub incoming_passengers: String,
    #[serde(rename = "OutgoingPassengers")]
    pub outgoing_passengers: String,
}

pub fn read_station_boundaries(path: &Path) -> Result<Vec<StationBoundaryRecord>, NetworkError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| NetworkError::DatasetIoError(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&contents)
        .map_err(|e| NetworkError::DatasetFormatError(path.display().to_string(), e.to_string()))
}

/// reads the semicolon-delimited ridership CSV.
pub fn read_ridership(path: &Path) -> Result<Vec<RidershipRecord>, NetworkError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .map_err(|e| NetworkError::DatasetIoError(path.display().to_string(), e.to_string()))?;
    reader
        .deserialize()
        .collect::<Result<Vec<RidershipRecord>, _>>()
        .map_err(|e| NetworkError::DatasetFormatError(path.display().to_string(), e.to_string()))
}

/// builds the baseline station collection. boundary points are grouped by
/// station name and averaged into one representative point per station;
/// each station receives its baseline load from the ridership dataset at the
/// given reporting period. stations without a ridership match are not
/// constructed, which keeps the positive-load invariant.
pub fn build_stations(
    boundaries: &[StationBoundaryRecord],
    ridership: &[RidershipRecord],
    period: &ReportingPeriod,
) -> Vec<MetroStation> {
    // group boundary points by name, preserving first-seen order so repeated
    // imports produce the same collection order
    let mut order: Vec<String> = vec![];
    let mut grouped: HashMap<String, Vec<Coord<f64>>> = HashMap::new();
    for record in boundaries {
        let parsed = (
            record.latitude.trim().parse::<f64>(),
            record.longitude.trim().parse::<f64>(),
        );
        let (lat, lon) = match parsed {
            (Ok(lat), Ok(lon)) => (lat, lon),
            _ => {
                log::warn!(
                    "skipping boundary point for station '{}': coordinates '{}'/'{}' are not numeric",
                    record.name,
                    record.latitude,
                    record.longitude
                );
                continue;
            }
        };
        grouped
            .entry(record.name.clone())
            .or_insert_with(|| {
                order.push(record.name.clone());
                vec![]
            })
            .push(Coord { x: lat, y: lon });
    }

    let loads = period_loads(ridership, period);

    let mut stations = vec![];
    for name in order {
        let load = match loads.get(&name) {
            Some(load) => *load,
            None => continue,
        };
        let points = &grouped[&name];
        let n = points.len() as f64;
        let point = Coord {
            x: points.iter().map(|p| p.x).sum::<f64>() / n,
            y: points.iter().map(|p| p.y).sum::<f64>() / n,
        };
        stations.push(MetroStation::new(name, point, load));
    }
    stations
}

/// baseline loads by station name for one reporting period. the quarterly
/// incoming and outgoing totals are each normalized to a per-1000 daily rate
/// over the 90 days of the quarter. rows with zero incoming passengers are
/// dropped; rows with non-numeric counts are skipped with a warning.
fn period_loads(ridership: &[RidershipRecord], period: &ReportingPeriod) -> HashMap<String, f64> {
    let mut loads: HashMap<String, f64> = HashMap::new();
    for record in ridership {
        let parsed = (
            record.year.trim().parse::<i32>(),
            record.incoming_passengers.trim().parse::<i64>(),
            record.outgoing_passengers.trim().parse::<i64>(),
        );
        let (year, incoming, outgoing) = match parsed {
            (Ok(year), Ok(incoming), Ok(outgoing)) => (year, incoming, outgoing),
            _ => {
                log::warn!(
                    "skipping ridership row for station '{}': non-numeric year or passenger count",
                    record.name
                );
                continue;
            }
        };
        if incoming == 0 {
            continue;
        }
        if year != period.year || record.quarter != period.quarter {
            continue;
        }
        let load = incoming as f64 / 90.0 / 1000.0 + outgoing as f64 / 90.0 / 1000.0;
        loads.insert(record.name.clone(), load);
    }
    loads
}
