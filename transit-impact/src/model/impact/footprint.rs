use geo::Coord;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// square meters of living floor area per generated outbound person-trip.
pub const LIVING_DENSITY: f64 = 45.0;
/// square meters of working floor area per generated inbound person-trip.
pub const WORKING_DENSITY: f64 = 35.0;

/// fraction of outbound trips falling in the mid-day window.
pub const MIDDAY_OUTBOUND_SHARE: f64 = 0.05;
/// fraction of inbound trips falling in the mid-day window.
pub const MIDDAY_INBOUND_SHARE: f64 = 0.1;

/// a proposed development: a closed boundary polygon plus the living and
/// working floor areas driving trip generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevelopmentFootprint {
    /// boundary vertices as (latitude, longitude) pairs.
    pub points: Vec<(f64, f64)>,
    /// residential floor area in square meters.
    #[serde(rename = "livingSquare")]
    pub living_square: f64,
    /// commercial floor area in square meters.
    #[serde(rename = "workingSquare")]
    pub working_square: f64,
}

/// an ordered batch of footprints to evaluate against the baseline network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactRequest {
    pub projects: Vec<DevelopmentFootprint>,
}

impl DevelopmentFootprint {
    pub fn boundary(&self) -> Vec<Coord<f64>> {
        self.points
            .iter()
            .map(|(x, y)| Coord { x: *x, y: *y })
            .collect_vec()
    }

    /// person-trips originating from the residential floor area.
    pub fn outbound_trips(&self) -> f64 {
        self.living_square / LIVING_DENSITY
    }

    /// person-trips destined to the commercial floor area.
    pub fn inbound_trips(&self) -> f64 {
        self.working_square / WORKING_DENSITY
    }

    /// the (outbound, inbound) trip figures for the mid-day window, the one
    /// time window the model evaluates.
    pub fn midday_trips(&self) -> (f64, f64) {
        (
            self.outbound_trips() * MIDDAY_OUTBOUND_SHARE,
            self.inbound_trips() * MIDDAY_INBOUND_SHARE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::DevelopmentFootprint;

    #[test]
    fn trip_generation_from_floor_area() {
        let footprint = DevelopmentFootprint {
            points: vec![(55.7, 37.6)],
            living_square: 4500.0,
            working_square: 3500.0,
        };
        assert!((footprint.outbound_trips() - 100.0).abs() < 1e-9);
        assert!((footprint.inbound_trips() - 100.0).abs() < 1e-9);
        let (outbound, inbound) = footprint.midday_trips();
        assert!((outbound - 5.0).abs() < 1e-9);
        assert!((inbound - 10.0).abs() < 1e-9);
    }

    #[test]
    fn decodes_request_shape() {
        let json = r#"{
            "projects": [
                {"points": [[55.7, 37.6], [55.701, 37.6], [55.701, 37.601]],
                 "livingSquare": 4500, "workingSquare": 3500}
            ]
        }"#;
        let request: super::ImpactRequest = serde_json::from_str(json).expect("should decode");
        assert_eq!(request.projects.len(), 1);
        assert_eq!(request.projects[0].points.len(), 3);
        assert!((request.projects[0].living_square - 4500.0).abs() < 1e-9);
    }
}
