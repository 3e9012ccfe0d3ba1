//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and address formats
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address is empty")]
    EmptyBindAddress,

    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("docs.path {0:?} must start with '/'")]
    RelativeDocsPath(String),

    #[error("docs.path must not be the root path")]
    RootDocsPath,

    #[error("logging.filter is empty")]
    EmptyLogFilter,
}

/// Check `config` for semantic errors.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let bind = config.listener.bind_address.trim();
    if bind.is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    } else if bind.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(bind.to_string()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.docs.enabled {
        let path = config.docs.path.as_str();
        if !path.starts_with('/') {
            errors.push(ValidationError::RelativeDocsPath(path.to_string()));
        } else if path.trim_matches('/').is_empty() {
            errors.push(ValidationError::RootDocsPath);
        }
    }

    if config.logging.filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
