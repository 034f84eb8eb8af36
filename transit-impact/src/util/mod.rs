pub mod geo_serde;
