use crate::util::geo_serde;
use geo::Coord;
use serde::{Deserialize, Serialize};

/// a metro station with a representative point and a running passenger load.
///
/// `point` stores latitude in `x` and longitude in `y`, matching the axis
/// order of the station boundary dataset. all geometric operations applied
/// to station points are symmetric in the two axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetroStation {
    /// unique station name, the identity key for lookups and write-backs.
    pub title: String,
    /// mean of all raw boundary points sharing this station's name.
    #[serde(with = "geo_serde::coord")]
    pub point: Coord<f64>,
    /// baseline passengers-per-hour figure at load time, then the running
    /// load as footprints are applied. always positive for a loaded station.
    #[serde(rename = "loadPKH")]
    pub load_pkh: f64,
    /// percent increase applied by the most recent apportionment. diagnostic
    /// output only.
    #[serde(rename = "loadIncrease", default)]
    pub load_increase: f64,
    /// true once any footprint in the current batch has selected this station.
    #[serde(default)]
    pub matched: bool,
}

impl MetroStation {
    pub fn new(title: String, point: Coord<f64>, load_pkh: f64) -> MetroStation {
        MetroStation {
            title,
            point,
            load_pkh,
            load_increase: 0.0,
            matched: false,
        }
    }
}
