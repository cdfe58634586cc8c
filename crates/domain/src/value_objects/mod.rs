//! Value objects - Immutable domain values defined by their attributes

mod map_region;
mod position;
mod temperature;

pub use map_region::MapRegion;
pub use position::Position;
pub use temperature::{Temperature, TemperatureUnit};
