use super::{road_loader, station_loader, MetroStation, NetworkError, RoadSegment};
use crate::config::NetworkImportConfiguration;
use std::path::Path;

/// the immutable baseline transit network, built once at process start.
///
/// the repository is read-only after construction. every impact computation
/// takes its own [`NetworkSnapshot`], so concurrent or sequential
/// computations never observe each other's partial updates.
#[derive(Debug)]
pub struct NetworkRepository {
    stations: Vec<MetroStation>,
    roads: Vec<RoadSegment>,
}

/// a deep copy of the baseline collections, owned by one impact computation
/// and discarded with it.
#[derive(Debug, Clone)]
pub struct NetworkSnapshot {
    pub stations: Vec<MetroStation>,
    pub roads: Vec<RoadSegment>,
}

impl NetworkRepository {
    pub fn new(stations: Vec<MetroStation>, roads: Vec<RoadSegment>) -> NetworkRepository {
        NetworkRepository { stations, roads }
    }

    /// builds the baseline network from the three reference datasets: station
    /// boundary points, quarterly ridership, and road geometries. a file that
    /// cannot be read or decoded is fatal; per-record problems are logged and
    /// skipped by the loaders.
    pub fn from_files(
        stations_file: &Path,
        ridership_file: &Path,
        roads_file: &Path,
        configuration: &NetworkImportConfiguration,
    ) -> Result<NetworkRepository, NetworkError> {
        let boundaries = station_loader::read_station_boundaries(stations_file)?;
        let ridership = station_loader::read_ridership(ridership_file)?;
        let stations = station_loader::build_stations(
            &boundaries,
            &ridership,
            &configuration.reporting_period,
        );
        if stations.is_empty() {
            log::warn!(
                "no stations carry ridership for {} '{}'",
                configuration.reporting_period.year,
                configuration.reporting_period.quarter
            );
        }
        let features = road_loader::read_road_features(roads_file)?;
        let roads = road_loader::build_roads(&features)?;
        log::info!(
            "baseline network loaded: {} stations, {} road segments",
            stations.len(),
            roads.len()
        );
        Ok(NetworkRepository::new(stations, roads))
    }

    pub fn stations(&self) -> &[MetroStation] {
        &self.stations
    }

    pub fn roads(&self) -> &[RoadSegment] {
        &self.roads
    }

    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            stations: self.stations.clone(),
            roads: self.roads.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NetworkRepository;
    use crate::config::NetworkImportConfiguration;
    use std::path::Path;

    #[test]
    fn builds_from_fixture_datasets() {
        let repository = NetworkRepository::from_files(
            Path::new("src/model/network/test/stations.json"),
            Path::new("src/model/network/test/ridership.csv"),
            Path::new("src/model/network/test/roads.geojson"),
            &NetworkImportConfiguration::default(),
        )
        .expect("fixtures should load");
        assert_eq!(repository.stations().len(), 2);
        assert_eq!(repository.roads().len(), 2);
    }

    #[test]
    fn snapshot_is_independent_of_the_baseline() {
        let repository = NetworkRepository::from_files(
            Path::new("src/model/network/test/stations.json"),
            Path::new("src/model/network/test/ridership.csv"),
            Path::new("src/model/network/test/roads.geojson"),
            &NetworkImportConfiguration::default(),
        )
        .expect("fixtures should load");
        let mut snapshot = repository.snapshot();
        snapshot.stations[0].load_pkh += 100.0;
        snapshot.roads[0].matched = true;
        assert!((repository.stations()[0].load_pkh - 15.0).abs() < 1e-9);
        assert!(!repository.roads()[0].matched);
    }
}
