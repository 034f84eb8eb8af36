use crate::model::network::{MetroStation, RoadSegment};

/// apportions a footprint's mid-day trips across the matched stations in
/// proportion to each station's *current* load, so heavier-loaded stations
/// absorb more of each new footprint's demand. records the percent increase
/// and updates the running load. an empty set, or a zero total load, is a
/// no-op.
///
/// note the asymmetry with [`distribute_road_trips`]: stations apportion by
/// current load, roads by fixed capacity. this is an intentional modeling
/// choice, not an accident.
pub fn distribute_metro_trips(
    mut stations: Vec<MetroStation>,
    outbound: f64,
    inbound: f64,
) -> Vec<MetroStation> {
    let total_load: f64 = stations.iter().map(|s| s.load_pkh).sum();
    if total_load <= 0.0 {
        return stations;
    }
    let trips = (outbound + inbound) / 1000.0 * 0.8;
    for station in stations.iter_mut() {
        let share = station.load_pkh / total_load;
        let added = trips * share;
        station.load_increase = added * 100.0 / station.load_pkh;
        station.load_pkh += added;
    }
    stations
}

/// apportions a footprint's mid-day vehicle trips across the matched roads
/// in proportion to fixed capacity. an empty set, or a zero total capacity,
/// is a no-op.
pub fn distribute_road_trips(
    mut roads: Vec<RoadSegment>,
    outbound: f64,
    inbound: f64,
) -> Vec<RoadSegment> {
    let total_capacity: f64 = roads.iter().map(|r| r.max_flow).sum();
    if total_capacity <= 0.0 {
        return roads;
    }
    let trips = (outbound + inbound) * 0.2 / 1.8;
    for road in roads.iter_mut() {
        let share = road.max_flow / total_capacity;
        road.current_flow += trips * share;
    }
    roads
}
