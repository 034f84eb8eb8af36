use super::{capacity, NetworkError, RoadSegment};
use geo::Coord;
use geojson::{Feature, FeatureCollection, GeoJson};
use serde_json::Value;
use std::path::Path;

pub fn read_road_features(path: &Path) -> Result<FeatureCollection, NetworkError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| NetworkError::DatasetIoError(path.display().to_string(), e.to_string()))?;
    let geojson = contents
        .parse::<GeoJson>()
        .map_err(|e| NetworkError::DatasetFormatError(path.display().to_string(), e.to_string()))?;
    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        _ => Err(NetworkError::DatasetFormatError(
            path.display().to_string(),
            String::from("expected a FeatureCollection"),
        )),
    }
}

/// builds the baseline road collection from the named LineString features of
/// the road dataset.
///
/// features sharing a name are merged into one polyline, but only when the
/// accumulated polyline ends exactly where the new piece starts; a
/// non-contiguous piece is dropped and the first registration wins. lane
/// count defaults to 2. a lane count or resolved speed limit outside the
/// capacity tables fails the load.
pub fn build_roads(collection: &FeatureCollection) -> Result<Vec<RoadSegment>, NetworkError> {
    let mut roads: Vec<RoadSegment> = vec![];
    for feature in &collection.features {
        let Some(name) = feature_name(feature) else {
            continue;
        };
        let Some(line) = feature_line(feature) else {
            log::warn!("skipping road feature '{name}': geometry is not a usable LineString");
            continue;
        };

        if let Some(existing) = roads.iter_mut().find(|r| r.name == name) {
            if existing.line.last() == line.first() {
                existing.line.extend(line);
            }
            continue;
        }

        let Some(lanes) = feature_lanes(feature) else {
            log::warn!("skipping road feature '{name}': lane count is not numeric");
            continue;
        };
        let Some(speed_limit) = feature_speed_limit(feature) else {
            log::warn!(
                "skipping road feature '{name}': speed limit is not a recognized category or number"
            );
            continue;
        };
        let Some(osm_id) = feature_osm_id(feature) else {
            log::warn!("skipping road feature '{name}': missing or non-numeric OSM_ID");
            continue;
        };

        let max_flow = capacity::road_capacity(lanes, speed_limit)?;
        roads.push(RoadSegment {
            name,
            lanes,
            line,
            current_flow: capacity::AMBIENT_UTILIZATION * max_flow,
            max_flow,
            osm_id,
            matched: false,
        });
    }
    Ok(roads)
}

fn property<'a>(feature: &'a Feature, key: &str) -> Option<&'a Value> {
    feature.properties.as_ref().and_then(|p| p.get(key))
}

fn feature_name(feature: &Feature) -> Option<String> {
    match property(feature, "NAME") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// road geometries arrive as GeoJSON `[lon, lat]` positions; points are
/// stored latitude-first to match the station dataset's axis order.
fn feature_line(feature: &Feature) -> Option<Vec<Coord<f64>>> {
    let positions = match feature.geometry.as_ref().map(|g| &g.value) {
        Some(geojson::Value::LineString(positions)) => positions,
        _ => return None,
    };
    let mut line = vec![];
    for position in positions {
        match position[..] {
            [lon, lat, ..] => line.push(Coord { x: lat, y: lon }),
            _ => return None,
        }
    }
    if line.is_empty() {
        return None;
    }
    Some(line)
}

fn feature_lanes(feature: &Feature) -> Option<u64> {
    match property(feature, "LANES") {
        None | Some(Value::Null) => Some(2),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(0) => Some(2),
            Some(lanes) => Some(lanes),
            None => None,
        },
        Some(Value::String(s)) if s.trim().is_empty() => Some(2),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

fn feature_speed_limit(feature: &Feature) -> Option<u64> {
    match property(feature, "MAXSPEED") {
        None | Some(Value::Null) => capacity::resolve_speed_limit(None),
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => capacity::resolve_speed_limit(Some(s)),
        _ => None,
    }
}

fn feature_osm_id(feature: &Feature) -> Option<i64> {
    match property(feature, "OSM_ID") {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
