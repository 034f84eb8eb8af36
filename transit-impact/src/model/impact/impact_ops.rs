use super::{distribution_ops, spatial_ops, DevelopmentFootprint, ImpactError, ImpactResult};
use crate::model::network::{MetroStation, NetworkRepository, RoadSegment};

/// evaluates a batch of development footprints against a fresh snapshot of
/// the baseline network.
///
/// footprints are processed strictly in input order: each one matches
/// against the working copies as already modified by its predecessors, so
/// redistribution is cumulative across the batch. all mutation is confined
/// to this invocation's snapshot; the baseline repository is never written.
pub fn compute_impact(
    repository: &NetworkRepository,
    footprints: &[DevelopmentFootprint],
) -> Result<ImpactResult, ImpactError> {
    let mut snapshot = repository.snapshot();

    for footprint in footprints {
        let boundary = footprint.boundary();
        let (outbound, inbound) = footprint.midday_trips();

        let station_keys = spatial_ops::match_stations(&boundary, &mut snapshot.stations)?;
        let matched_stations = collect_stations(&snapshot.stations, &station_keys)?;
        let updated = distribution_ops::distribute_metro_trips(matched_stations, outbound, inbound);
        for station in &updated {
            write_back_station(&mut snapshot.stations, station)?;
        }

        let road_keys = spatial_ops::match_roads(&boundary, &mut snapshot.roads)?;
        let matched_roads = collect_roads(&snapshot.roads, &road_keys)?;
        let updated = distribution_ops::distribute_road_trips(matched_roads, outbound, inbound);
        for road in &updated {
            write_back_road(&mut snapshot.roads, road)?;
        }
    }

    Ok(ImpactResult {
        station_loads: snapshot.stations.into_iter().filter(|s| s.matched).collect(),
        road_loads: snapshot.roads.into_iter().filter(|r| r.matched).collect(),
    })
}

/// clones the matched records out of the working copy. distribution operates
/// on these owned values, never on aliases into the working copy, and the
/// results are merged back by identity key.
fn collect_stations(
    working: &[MetroStation],
    keys: &[String],
) -> Result<Vec<MetroStation>, ImpactError> {
    keys.iter()
        .map(|key| {
            working
                .iter()
                .find(|s| &s.title == key)
                .cloned()
                .ok_or_else(|| missing("station", key))
        })
        .collect()
}

fn collect_roads(working: &[RoadSegment], keys: &[String]) -> Result<Vec<RoadSegment>, ImpactError> {
    keys.iter()
        .map(|key| {
            working
                .iter()
                .find(|r| &r.name == key)
                .cloned()
                .ok_or_else(|| missing("road", key))
        })
        .collect()
}

fn write_back_station(
    working: &mut [MetroStation],
    updated: &MetroStation,
) -> Result<(), ImpactError> {
    let slot = working
        .iter_mut()
        .find(|s| s.title == updated.title)
        .ok_or_else(|| missing("station", &updated.title))?;
    slot.load_pkh = updated.load_pkh;
    slot.load_increase = updated.load_increase;
    Ok(())
}

fn write_back_road(working: &mut [RoadSegment], updated: &RoadSegment) -> Result<(), ImpactError> {
    let slot = working
        .iter_mut()
        .find(|r| r.name == updated.name)
        .ok_or_else(|| missing("road", &updated.name))?;
    slot.current_flow = updated.current_flow;
    Ok(())
}

// the matched keys come from the working copy itself, so a miss here is a
// logic defect, not bad input
fn missing(kind: &str, key: &str) -> ImpactError {
    ImpactError::MissingFacilityOnWriteBack(kind.to_string(), key.to_string())
}
