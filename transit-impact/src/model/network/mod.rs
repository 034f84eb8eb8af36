pub mod capacity;
mod metro_station;
mod network_error;
mod repository;
pub mod road_loader;
mod road_segment;
pub mod station_loader;

pub use metro_station::MetroStation;
pub use network_error::NetworkError;
pub use repository::{NetworkRepository, NetworkSnapshot};
pub use road_segment::RoadSegment;
