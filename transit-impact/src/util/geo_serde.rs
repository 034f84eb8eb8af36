//! serde adapters that read and write [`geo::Coord`] values as plain
//! `(x, y)` pairs, matching the coordinate-pair shape of the request and
//! response payloads rather than geo's `{ "x": .., "y": .. }` encoding.

/// a single coordinate as a two-element array.
pub mod coord {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Coord<f64>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (value.x, value.y).serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Coord<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y) = <(f64, f64)>::deserialize(d)?;
        Ok(Coord { x, y })
    }
}

/// a coordinate sequence as a list of two-element arrays.
pub mod coord_seq {
    use geo::Coord;
    use itertools::Itertools;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &[Coord<f64>], s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.iter().map(|c| (c.x, c.y)).collect_vec().serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Vec<Coord<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = <Vec<(f64, f64)>>::deserialize(d)?;
        Ok(pairs.into_iter().map(|(x, y)| Coord { x, y }).collect_vec())
    }
}

#[cfg(test)]
mod tests {
    use geo::Coord;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::coord")]
        point: Coord<f64>,
        #[serde(with = "super::coord_seq")]
        line: Vec<Coord<f64>>,
    }

    #[test]
    fn round_trips_pairs() {
        let json = r#"{"point":[55.7,37.6],"line":[[55.7,37.6],[55.8,37.7]]}"#;
        let w: Wrapper = serde_json::from_str(json).expect("should decode");
        assert_eq!(w.point, Coord { x: 55.7, y: 37.6 });
        assert_eq!(w.line.len(), 2);
        let out = serde_json::to_string(&w).expect("should encode");
        assert_eq!(out, json);
    }
}
