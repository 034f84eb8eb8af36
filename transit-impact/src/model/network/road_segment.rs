use crate::util::geo_serde;
use geo::Coord;
use serde::{Deserialize, Serialize};

/// a named road with a merged polyline and a running vehicle flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadSegment {
    /// unique road name, the identity key for lookups and write-backs.
    pub name: String,
    pub lanes: u64,
    /// ordered path points, latitude first. pieces sharing a name are
    /// concatenated here when their endpoints coincide.
    #[serde(with = "geo_serde::coord_seq")]
    pub line: Vec<Coord<f64>>,
    /// current vehicle-equivalent flow, seeded at ambient utilization of
    /// capacity and only ever increased.
    pub current_flow: f64,
    /// effective hourly capacity, fixed at load time and never recomputed.
    pub max_flow: f64,
    /// identifier from the raw geographic dataset. carried through for
    /// traceability, unused in any computation.
    pub osm_id: i64,
    /// true once any footprint in the current batch has selected this road.
    #[serde(default)]
    pub matched: bool,
}
