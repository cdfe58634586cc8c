//! Domain entities - Objects with identity

mod place;

pub use place::Place;
