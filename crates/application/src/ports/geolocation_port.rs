//! Geolocation port
//!
//! Defines the interface for resolving the device's current position.

use async_trait::async_trait;
use domain::value_objects::Position;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for resolving the current geographic position
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Resolve the position this device is currently at
    async fn current_position(&self) -> Result<Position, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeolocationPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeolocationPort>();
    }
}
