use crate::model::network::NetworkError;

/// fraction of theoretical throughput treated as usable capacity.
const CAPACITY_DISCOUNT: f64 = 0.8;

/// fraction of capacity assumed already in use when a road is loaded.
pub const AMBIENT_UTILIZATION: f64 = 0.4;

/// hourly vehicle throughput by lane count.
pub fn lane_capacity(lanes: u64) -> Result<f64, NetworkError> {
    match lanes {
        1 => Ok(1800.0),
        2 => Ok(3600.0),
        3 => Ok(4000.0),
        4 => Ok(2200.0 * 3.6),
        5 => Ok(2200.0 * 4.5),
        6 => Ok(2300.0 * 5.4),
        7 => Ok(2300.0 * 6.3),
        8 => Ok(2300.0 * 7.2),
        _ => Err(NetworkError::UnknownLaneCount(lanes)),
    }
}

/// dimensionless factor modeling reduced effective capacity at low posted
/// speeds. keys are the discrete posted limits the dataset uses.
pub fn speed_factor(speed_limit: u64) -> Result<f64, NetworkError> {
    match speed_limit {
        5 => Ok(0.22),
        10 => Ok(0.44),
        20 => Ok(0.76),
        30 => Ok(0.88),
        40 => Ok(0.96),
        50 => Ok(0.98),
        60 | 70 | 80 | 90 | 100 | 110 | 120 => Ok(1.0),
        _ => Err(NetworkError::UnknownSpeedLimit(speed_limit)),
    }
}

/// effective hourly capacity for a road. a lane count or speed limit outside
/// the lookup tables fails the whole load rather than falling back to a
/// default, since a defaulted value would corrupt the capacity invariant.
pub fn road_capacity(lanes: u64, speed_limit: u64) -> Result<f64, NetworkError> {
    Ok(lane_capacity(lanes)? * CAPACITY_DISCOUNT * speed_factor(speed_limit)?)
}

/// resolves the categorical-or-numeric speed limit field of the road dataset.
/// an unspecified value and the urban category both carry the default urban
/// limit; anything unrecognized must be a literal numeric speed. None means
/// the value could not be resolved and the record should be skipped.
pub fn resolve_speed_limit(raw: Option<&str>) -> Option<u64> {
    match raw {
        None => Some(60),
        Some(s) => match s.trim() {
            "" | "RU:urban" => Some(60),
            "RU:living_street" => Some(20),
            "RU:rural" => Some(10),
            "RU:motorway" => Some(110),
            other => other.parse::<u64>().ok(),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::model::network::NetworkError;

    #[test]
    fn lane_capacity_table() {
        assert_eq!(super::lane_capacity(1).unwrap(), 1800.0);
        assert_eq!(super::lane_capacity(2).unwrap(), 3600.0);
        assert_eq!(super::lane_capacity(4).unwrap(), 2200.0 * 3.6);
        assert_eq!(super::lane_capacity(8).unwrap(), 2300.0 * 7.2);
    }

    #[test]
    fn lane_capacity_unknown_is_an_error() {
        match super::lane_capacity(9) {
            Err(NetworkError::UnknownLaneCount(9)) => {}
            other => panic!("expected UnknownLaneCount, got {other:?}"),
        }
    }

    #[test]
    fn speed_factor_table() {
        assert_eq!(super::speed_factor(5).unwrap(), 0.22);
        assert_eq!(super::speed_factor(40).unwrap(), 0.96);
        assert_eq!(super::speed_factor(60).unwrap(), 1.0);
        assert_eq!(super::speed_factor(120).unwrap(), 1.0);
    }

    #[test]
    fn speed_factor_unknown_is_an_error() {
        match super::speed_factor(55) {
            Err(NetworkError::UnknownSpeedLimit(55)) => {}
            other => panic!("expected UnknownSpeedLimit, got {other:?}"),
        }
    }

    #[test]
    fn road_capacity_two_urban_lanes() {
        let capacity = super::road_capacity(2, 60).unwrap();
        assert_eq!(capacity, 3600.0 * 0.8);
    }

    #[test]
    fn resolve_speed_limit_categories() {
        assert_eq!(super::resolve_speed_limit(None), Some(60));
        assert_eq!(super::resolve_speed_limit(Some("")), Some(60));
        assert_eq!(super::resolve_speed_limit(Some("RU:urban")), Some(60));
        assert_eq!(super::resolve_speed_limit(Some("RU:living_street")), Some(20));
        assert_eq!(super::resolve_speed_limit(Some("RU:rural")), Some(10));
        assert_eq!(super::resolve_speed_limit(Some("RU:motorway")), Some(110));
        assert_eq!(super::resolve_speed_limit(Some("90")), Some(90));
        assert_eq!(super::resolve_speed_limit(Some("signals")), None);
    }
}
