use crate::model::network::{MetroStation, RoadSegment};
use serde::{Deserialize, Serialize};

/// the facilities touched by at least one footprint in a batch, with their
/// post-batch load figures. facilities no footprint matched are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactResult {
    #[serde(rename = "stationLoads")]
    pub station_loads: Vec<MetroStation>,
    #[serde(rename = "roadLoads")]
    pub road_loads: Vec<RoadSegment>,
}
