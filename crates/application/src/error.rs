//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geolocation lookup failed
    #[error("Geolocation error: {0}")]
    Geolocation(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// No known weather location near the position
    #[error("No weather location found near {0}")]
    NoLocationFound(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::Geolocation(_)
                | ApplicationError::ExternalService(_)
                | ApplicationError::RateLimited
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_pass_through_transparently() {
        let err: ApplicationError = DomainError::InvalidZoomDelta(-1.0).into();
        assert_eq!(err.to_string(), "Invalid zoom delta: -1");
    }

    #[test]
    fn no_location_found_names_the_position() {
        let err = ApplicationError::NoLocationFound("37.78825, -122.43240".to_string());
        assert_eq!(
            err.to_string(),
            "No weather location found near 37.78825, -122.43240"
        );
    }

    #[test]
    fn service_errors_are_retryable() {
        assert!(ApplicationError::ExternalService("timeout".to_string()).is_retryable());
        assert!(ApplicationError::Geolocation("no signal".to_string()).is_retryable());
        assert!(ApplicationError::RateLimited.is_retryable());
        assert!(!ApplicationError::NoLocationFound("0, 0".to_string()).is_retryable());
        assert!(!ApplicationError::Internal("bug".to_string()).is_retryable());
    }
}
