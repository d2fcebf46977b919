// Copyright (c) 2025 - Cowboy AI, Inc.
//! Instance Repository
//!
//! Orchestrates raw API calls and hands every record to a converter.
//! Records come back with nested entities as unresolved links; resolving
//! them is the service's job.
//!
//! # Error Classification
//!
//! ```text
//! PublicCloudApi failure  → RepositoryError::Transport
//! Converter failure       → RepositoryError::Conversion
//! ```
//!
//! Both carry the operation name and, when there is one, the target id.

pub mod pagination;
pub mod public_cloud;

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::converter::ConversionError;
use crate::domain::{AutoScalingGroup, Instance, InstanceTypes, LoadBalancer, NewInstance, Regions};
use crate::errors::TransportError;

pub use pagination::Pagination;
pub use public_cloud::ApiPublicCloudRepository;

/// Repository result type
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository errors
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The API call failed
    #[error("{operation}{}: {source}", describe_target(.target))]
    Transport {
        operation: &'static str,
        target: Option<String>,
        source: TransportError,
    },

    /// The API answered with a record that failed validation
    #[error("{operation}{}: {source}", describe_target(.target))]
    Conversion {
        operation: &'static str,
        target: Option<String>,
        source: ConversionError,
    },
}

fn describe_target(target: &Option<String>) -> String {
    match target {
        Some(target) => format!(" {:?}", target),
        None => String::new(),
    }
}

impl RepositoryError {
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Transport { operation, .. } | Self::Conversion { operation, .. } => operation,
        }
    }

    /// Whether repeating the operation could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_retryable(),
            Self::Conversion { .. } => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_not_found())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                source: TransportError::Cancelled,
                ..
            }
        )
    }
}

/// Public cloud repository
///
/// Every call takes the caller's cancellation token. A cancelled token fails
/// the call with [`TransportError::Cancelled`].
#[async_trait]
pub trait PublicCloudRepository: Send + Sync {
    /// Every instance of the account, all pages drained
    async fn get_all_instances(&self, ctx: &CancellationToken) -> RepositoryResult<Vec<Instance>>;

    /// Instance details
    async fn get_instance(&self, ctx: &CancellationToken, id: Uuid) -> RepositoryResult<Instance>;

    /// Auto-scaling group details
    async fn get_auto_scaling_group(
        &self,
        ctx: &CancellationToken,
        id: Uuid,
    ) -> RepositoryResult<AutoScalingGroup>;

    /// Load balancer details
    async fn get_load_balancer(
        &self,
        ctx: &CancellationToken,
        id: Uuid,
    ) -> RepositoryResult<LoadBalancer>;

    /// Launch an instance
    ///
    /// Returns the record as the API reports it right after launch.
    async fn create_instance(
        &self,
        ctx: &CancellationToken,
        instance: &NewInstance,
    ) -> RepositoryResult<Instance>;

    /// Push the settable fields of an instance
    async fn update_instance(
        &self,
        ctx: &CancellationToken,
        instance: &Instance,
    ) -> RepositoryResult<Instance>;

    /// Terminate an instance
    async fn delete_instance(&self, ctx: &CancellationToken, id: Uuid) -> RepositoryResult<()>;

    /// Regions the account can launch in
    async fn get_regions(&self, ctx: &CancellationToken) -> RepositoryResult<Regions>;

    /// Instance types offered in a region
    async fn get_instance_types_for_region(
        &self,
        ctx: &CancellationToken,
        region: &str,
    ) -> RepositoryResult<InstanceTypes>;

    /// Instance types an existing instance can be changed to
    async fn get_available_instance_types_for_update(
        &self,
        ctx: &CancellationToken,
        id: Uuid,
    ) -> RepositoryResult<InstanceTypes>;
}
