use super::ImpactError;
use crate::model::network::{MetroStation, RoadSegment};
use geo::Coord;

/// station match radius around a footprint centroid, in scaled distance units.
pub const STATION_MATCH_RADIUS: f64 = 1.5;
/// coarse centroid-to-centroid cutoff for road candidates.
pub const ROAD_CENTROID_RADIUS: f64 = 2.0;
/// a road edge within this distance of a boundary probe point selects the road.
pub const ROAD_EDGE_THRESHOLD: f64 = 0.10;
/// sentinel distance returned for a degenerate (zero-length) road edge.
pub const DEGENERATE_EDGE_DISTANCE: f64 = 200.0;

/// planar distance between two coordinates, scaled by 6371/100. a flat-earth
/// approximation calibrated for a dense urban core, not a geodesic; the
/// matching thresholds are calibrated against it as-is and both would need
/// recalibration together outside that context.
pub fn distance(a: &Coord<f64>, b: &Coord<f64>) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt() * 6371.0 / 100.0
}

/// unweighted mean of a point list. note this is a vertex mean, not an
/// area-weighted centroid. None for an empty list.
pub fn vertex_mean(points: &[Coord<f64>]) -> Option<Coord<f64>> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    Some(Coord {
        x: points.iter().map(|p| p.x).sum::<f64>() / n,
        y: points.iter().map(|p| p.y).sum::<f64>() / n,
    })
}

/// distance from `point` to the segment `(a, b)`, clamping the projection to
/// the segment endpoints when it falls outside them. a zero-length segment
/// cannot be projected onto and yields [`DEGENERATE_EDGE_DISTANCE`].
pub fn point_to_edge_distance(a: &Coord<f64>, b: &Coord<f64>, point: &Coord<f64>) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return DEGENERATE_EDGE_DISTANCE;
    }
    let u = ((point.x - a.x) * dx + (point.y - a.y) * dy) / length_sq;
    let closest = if u < 0.0 {
        *a
    } else if u > 1.0 {
        *b
    } else {
        Coord {
            x: a.x + u * dx,
            y: a.y + u * dy,
        }
    };
    distance(&closest, point)
}

/// selects stations within [`STATION_MATCH_RADIUS`] of the footprint
/// centroid, marks each as matched in the working copy, and returns their
/// identity keys in working-copy order.
pub fn match_stations(
    boundary: &[Coord<f64>],
    stations: &mut [MetroStation],
) -> Result<Vec<String>, ImpactError> {
    let center = vertex_mean(boundary).ok_or(ImpactError::EmptyBoundary)?;
    let mut selected = vec![];
    for station in stations.iter_mut() {
        if distance(&center, &station.point) <= STATION_MATCH_RADIUS {
            station.matched = true;
            selected.push(station.title.clone());
        }
    }
    Ok(selected)
}

/// selects roads considered connected to the footprint. a coarse
/// centroid-to-centroid filter keeps the edge probing from running over the
/// whole network; a road passing the filter is selected when any of its edges
/// comes within [`ROAD_EDGE_THRESHOLD`] of a boundary probe point, first hit
/// wins. the O(edges x vertices) probing is acceptable because polylines and
/// boundaries are tens of points at most.
pub fn match_roads(
    boundary: &[Coord<f64>],
    roads: &mut [RoadSegment],
) -> Result<Vec<String>, ImpactError> {
    let center = vertex_mean(boundary).ok_or(ImpactError::EmptyBoundary)?;
    let mut selected = vec![];
    for road in roads.iter_mut() {
        let road_center = match vertex_mean(&road.line) {
            Some(c) => c,
            None => continue,
        };
        if distance(&center, &road_center) > ROAD_CENTROID_RADIUS {
            continue;
        }
        if boundary_touches_road(boundary, &road.line) {
            road.matched = true;
            selected.push(road.name.clone());
        }
    }
    Ok(selected)
}

/// probes every road edge against every boundary vertex index. quirk: the
/// wrap branch below never fires for an in-range index, so the probe edge
/// always closes back to the first vertex rather than the successor vertex.
/// matched sets are calibrated against this pairing, so it stays.
fn boundary_touches_road(boundary: &[Coord<f64>], line: &[Coord<f64>]) -> bool {
    for edge in line.windows(2) {
        for p_idx in 0..boundary.len() {
            let left = boundary[p_idx];
            let right = if boundary.len() < p_idx + 1 {
                boundary[p_idx + 1]
            } else {
                boundary[0]
            };
            let probe = Coord {
                x: (left.x + right.x) / 2.0,
                y: (left.y + right.y) / 2.0,
            };
            if point_to_edge_distance(&edge[0], &edge[1], &probe) <= ROAD_EDGE_THRESHOLD {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::model::network::{MetroStation, RoadSegment};
    use geo::Coord;

    fn station(title: &str, x: f64, y: f64, load: f64) -> MetroStation {
        MetroStation::new(title.to_string(), Coord { x, y }, load)
    }

    fn road(name: &str, line: Vec<Coord<f64>>) -> RoadSegment {
        RoadSegment {
            name: name.to_string(),
            lanes: 2,
            line,
            current_flow: 1152.0,
            max_flow: 2880.0,
            osm_id: 1,
            matched: false,
        }
    }

    #[test]
    fn distance_is_scaled_planar() {
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 0.03, y: 0.04 };
        // sqrt(0.0009 + 0.0016) * 63.71
        assert!((super::distance(&a, &b) - 0.05 * 63.71).abs() < 1e-9);
    }

    #[test]
    fn vertex_mean_is_unweighted() {
        let points = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 2.0, y: 0.0 },
            Coord { x: 2.0, y: 2.0 },
        ];
        let mean = super::vertex_mean(&points).expect("non-empty");
        assert!((mean.x - 4.0 / 3.0).abs() < 1e-9);
        assert!((mean.y - 2.0 / 3.0).abs() < 1e-9);
        assert!(super::vertex_mean(&[]).is_none());
    }

    #[test]
    fn degenerate_edge_is_a_non_match() {
        let a = Coord { x: 1.0, y: 1.0 };
        let point = Coord { x: 1.0, y: 1.0 };
        let d = super::point_to_edge_distance(&a, &a, &point);
        assert_eq!(d, super::DEGENERATE_EDGE_DISTANCE);
        assert!(d > super::ROAD_EDGE_THRESHOLD);
    }

    #[test]
    fn projection_clamps_to_endpoints() {
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 0.01, y: 0.0 };
        // beyond b: closest point is b itself
        let beyond = Coord { x: 0.02, y: 0.0 };
        let expected = super::distance(&b, &beyond);
        assert!((super::point_to_edge_distance(&a, &b, &beyond) - expected).abs() < 1e-9);
        // interior: perpendicular foot
        let above = Coord { x: 0.005, y: 0.001 };
        let foot = Coord { x: 0.005, y: 0.0 };
        let expected = super::distance(&foot, &above);
        assert!((super::point_to_edge_distance(&a, &b, &above) - expected).abs() < 1e-9);
    }

    #[test]
    fn stations_within_radius_match_and_are_marked() {
        let boundary = vec![
            Coord { x: 55.699, y: 37.599 },
            Coord { x: 55.701, y: 37.599 },
            Coord { x: 55.701, y: 37.601 },
            Coord { x: 55.699, y: 37.601 },
        ];
        let mut stations = vec![
            station("Near", 55.705, 37.602, 10.0),
            station("Far", 55.750, 37.700, 30.0),
        ];
        let keys = super::match_stations(&boundary, &mut stations).expect("boundary non-empty");
        assert_eq!(keys, vec!["Near"]);
        assert!(stations[0].matched);
        assert!(!stations[1].matched);
    }

    #[test]
    fn empty_boundary_is_an_error() {
        let mut stations = vec![station("Near", 55.705, 37.602, 10.0)];
        assert!(super::match_stations(&[], &mut stations).is_err());
        let mut roads = vec![];
        assert!(super::match_roads(&[], &mut roads).is_err());
    }

    #[test]
    fn road_crossing_the_boundary_matches() {
        // the first boundary vertex sits exactly on the road line, so the
        // probe for that vertex has distance zero
        let boundary = vec![
            Coord { x: 55.7005, y: 37.6025 },
            Coord { x: 55.7005, y: 37.6015 },
            Coord { x: 55.6995, y: 37.6015 },
            Coord { x: 55.6995, y: 37.6025 },
        ];
        let mut roads = vec![road(
            "Sadovaya ulitsa",
            vec![
                Coord { x: 55.700, y: 37.600 },
                Coord { x: 55.701, y: 37.605 },
            ],
        )];
        let keys = super::match_roads(&boundary, &mut roads).expect("boundary non-empty");
        assert_eq!(keys, vec!["Sadovaya ulitsa"]);
        assert!(roads[0].matched);
    }

    #[test]
    fn coarse_filter_rejects_distant_road_centroids() {
        let boundary = vec![
            Coord { x: 55.7005, y: 37.6025 },
            Coord { x: 55.6995, y: 37.6015 },
        ];
        // nearly on the boundary but centered a degree away: never probed
        let mut roads = vec![road(
            "Far centroid",
            vec![
                Coord { x: 55.700, y: 37.602 },
                Coord { x: 55.700, y: 38.602 },
            ],
        )];
        let keys = super::match_roads(&boundary, &mut roads).expect("boundary non-empty");
        assert!(keys.is_empty());
        assert!(!roads[0].matched);
    }

    #[test]
    fn near_miss_outside_edge_threshold_does_not_match() {
        let boundary = vec![
            Coord { x: 55.7005, y: 37.6025 },
            Coord { x: 55.7005, y: 37.6015 },
            Coord { x: 55.6995, y: 37.6015 },
            Coord { x: 55.6995, y: 37.6025 },
        ];
        // parallel to the boundary, ~0.32 units away: passes the coarse
        // filter but never comes within the edge threshold
        let mut roads = vec![road(
            "Parallel",
            vec![
                Coord { x: 55.705, y: 37.600 },
                Coord { x: 55.705, y: 37.605 },
            ],
        )];
        let keys = super::match_roads(&boundary, &mut roads).expect("boundary non-empty");
        assert!(keys.is_empty());
    }
}
