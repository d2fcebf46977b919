//! Public cloud compute core
//!
//! Validates loosely typed provider API responses into a strongly typed
//! domain model and assembles fully populated instance views by resolving
//! auto-scaling groups and load balancers concurrently.
//!
//! Handler → [`service`] → [`repository`] → [`converter`] → [`domain::enums`]

pub mod config;
pub mod converter;
pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod telemetry;
pub mod transport;
pub mod wire;

// Re-export commonly used types
pub use config::PublicCloudConfig;
pub use errors::{TransportError, TransportResult};
pub use repository::{ApiPublicCloudRepository, PublicCloudRepository, RepositoryError};
pub use service::{AggregatingService, PublicCloudService, ServiceError, ServiceResult};
pub use transport::PublicCloudApi;
