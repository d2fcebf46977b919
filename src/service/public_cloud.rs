// Copyright (c) 2025 - Cowboy AI, Inc.
//! Public Cloud Service Layer
//!
//! Assembles fully populated instances on top of the repository:
//!
//! ```text
//! get_instance(id)
//!     ↓
//! Repository::get_instance ──▶ Instance { auto_scaling_group: Unresolved }
//!     ↓ (if linked)
//! Repository::get_auto_scaling_group ──▶ AutoScalingGroup { load_balancer: Unresolved }
//!     ↓ (if linked)
//! Repository::get_load_balancer ──▶ LoadBalancer
//!     ↓
//! attach (ids checked) ──▶ Instance fully resolved
//! ```
//!
//! # Fan-out / Fan-in
//!
//! `get_all_instances` lists the account once, then spawns one task per
//! instance running the chain above. Each task sends exactly one outcome on
//! either the success or the error channel. The collector returns on the
//! first error; the tasks still running are cancelled through a child token
//! and their outcomes are discarded.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{Instance, InstanceTypes, InvariantError, NewInstance, Regions};
use crate::repository::{PublicCloudRepository, RepositoryError};

/// Service layer result type
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service layer errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Repository call failed
    #[error("{operation}: {source}")]
    Repository {
        operation: &'static str,
        source: RepositoryError,
    },

    /// One instance of a batch could not be assembled
    #[error("Failed to aggregate instance {instance_id}: {source}")]
    Aggregation {
        instance_id: Uuid,
        source: Box<ServiceError>,
    },

    /// Instance type is not offered where it was requested
    #[error("Instance type {instance_type:?} is not available for {scope}, must be one of [{}]", .available.join(", "))]
    InstanceTypeUnavailable {
        instance_type: String,
        scope: String,
        available: Vec<String>,
    },

    /// A nested entity did not match the record linking it
    #[error("Business rule violation: {0}")]
    Invariant(#[from] InvariantError),

    /// Aggregation tasks ended without reporting
    #[error("Aggregation incomplete: expected {expected} instances, received {received}")]
    Incomplete { expected: usize, received: usize },
}

impl ServiceError {
    /// Whether repeating the operation could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Repository { source, .. } => source.is_retryable(),
            Self::Aggregation { source, .. } => source.is_retryable(),
            _ => false,
        }
    }

    /// Underlying repository error, looking through aggregation
    pub fn repository_error(&self) -> Option<&RepositoryError> {
        match self {
            Self::Repository { source, .. } => Some(source),
            Self::Aggregation { source, .. } => source.repository_error(),
            _ => None,
        }
    }
}

fn repository_error(operation: &'static str) -> impl FnOnce(RepositoryError) -> ServiceError {
    move |source| ServiceError::Repository { operation, source }
}

/// Public cloud service trait
///
/// Every returned instance has its nested entities resolved.
#[async_trait]
pub trait PublicCloudService: Send + Sync {
    /// Every instance of the account, fully populated
    ///
    /// Output order is unspecified. Any single failure fails the whole call.
    async fn get_all_instances(&self, ctx: &CancellationToken) -> ServiceResult<Vec<Instance>>;

    /// One instance, fully populated
    async fn get_instance(&self, ctx: &CancellationToken, id: Uuid) -> ServiceResult<Instance>;

    /// Launch an instance
    ///
    /// # Process
    /// 1. Check the instance type is offered in the region
    /// 2. Launch
    /// 3. Re-read the instance so nested entities are populated
    async fn create_instance(
        &self,
        ctx: &CancellationToken,
        instance: &NewInstance,
    ) -> ServiceResult<Instance>;

    /// Update an instance
    ///
    /// A changed instance type must be one the instance can be changed to;
    /// keeping the current type is always allowed.
    async fn update_instance(
        &self,
        ctx: &CancellationToken,
        instance: &Instance,
    ) -> ServiceResult<Instance>;

    /// Terminate an instance
    async fn delete_instance(&self, ctx: &CancellationToken, id: Uuid) -> ServiceResult<()>;

    /// Regions the account can launch in
    async fn get_regions(&self, ctx: &CancellationToken) -> ServiceResult<Regions>;

    /// Instance types offered in a region
    async fn get_available_instance_types_for_region(
        &self,
        ctx: &CancellationToken,
        region: &str,
    ) -> ServiceResult<InstanceTypes>;

    /// Instance types an existing instance can be changed to
    async fn get_available_instance_types_for_update(
        &self,
        ctx: &CancellationToken,
        id: Uuid,
    ) -> ServiceResult<InstanceTypes>;
}

/// Service resolving nested entities through the repository
pub struct AggregatingService {
    repository: Arc<dyn PublicCloudRepository>,
}

impl AggregatingService {
    /// Create a new service
    pub fn new(repository: Arc<dyn PublicCloudRepository>) -> Self {
        Self { repository }
    }

    /// Fail unless the instance's type is one it can be changed to
    async fn check_update_type(
        &self,
        ctx: &CancellationToken,
        instance: &Instance,
    ) -> ServiceResult<()> {
        let available = self
            .get_available_instance_types_for_update(ctx, instance.id)
            .await?;

        if !available.contains(&instance.instance_type) {
            return Err(ServiceError::InstanceTypeUnavailable {
                instance_type: instance.instance_type.clone(),
                scope: format!("instance {}", instance.id),
                available: available.as_slice().to_vec(),
            });
        }

        Ok(())
    }
}

/// Fetch an instance and resolve its nested entities
async fn assemble_instance(
    repository: &dyn PublicCloudRepository,
    ctx: &CancellationToken,
    id: Uuid,
) -> ServiceResult<Instance> {
    let instance = repository
        .get_instance(ctx, id)
        .await
        .map_err(repository_error("GetInstance"))?;

    populate(repository, ctx, instance).await
}

/// Replace unresolved links with the loaded auto-scaling group and load balancer
async fn populate(
    repository: &dyn PublicCloudRepository,
    ctx: &CancellationToken,
    mut instance: Instance,
) -> ServiceResult<Instance> {
    if instance.is_fully_resolved() {
        return Ok(instance);
    }

    let Some(group_id) = instance.auto_scaling_group_id() else {
        return Ok(instance);
    };

    let mut group = match instance.resolved_auto_scaling_group() {
        Some(group) => group.clone(),
        None => repository
            .get_auto_scaling_group(ctx, group_id)
            .await
            .map_err(repository_error("PopulateInstance"))?,
    };

    if let Some(load_balancer_id) = group.load_balancer_id() {
        if group.resolved_load_balancer().is_none() {
            let load_balancer = repository
                .get_load_balancer(ctx, load_balancer_id)
                .await
                .map_err(repository_error("PopulateInstance"))?;
            group.attach_load_balancer(load_balancer)?;
        }
    }

    instance.attach_auto_scaling_group(group)?;

    debug!(
        instance_id = %instance.id,
        auto_scaling_group_id = %group_id,
        "Populated instance"
    );
    Ok(instance)
}

#[async_trait]
impl PublicCloudService for AggregatingService {
    async fn get_all_instances(&self, ctx: &CancellationToken) -> ServiceResult<Vec<Instance>> {
        let instances = self
            .repository
            .get_all_instances(ctx)
            .await
            .map_err(repository_error("GetAllInstances"))?;

        let expected = instances.len();
        info!(count = expected, "Aggregating instances");

        // Cancelled on every return path so losing tasks stop early
        let batch = ctx.child_token();
        let _batch_guard = batch.clone().drop_guard();

        let (result_tx, mut result_rx) = mpsc::unbounded_channel::<Instance>();
        let (error_tx, mut error_rx) = mpsc::unbounded_channel::<(Uuid, ServiceError)>();

        for instance in instances {
            let repository = Arc::clone(&self.repository);
            let batch = batch.clone();
            let result_tx = result_tx.clone();
            let error_tx = error_tx.clone();
            let instance_id = instance.id;

            tokio::spawn(async move {
                match assemble_instance(repository.as_ref(), &batch, instance_id).await {
                    Ok(instance) => {
                        let _ = result_tx.send(instance);
                    }
                    Err(err) => {
                        let _ = error_tx.send((instance_id, err));
                    }
                }
            });
        }

        drop(result_tx);
        drop(error_tx);

        let mut aggregated = Vec::with_capacity(expected);
        while aggregated.len() < expected {
            tokio::select! {
                Some(instance) = result_rx.recv() => aggregated.push(instance),
                Some((instance_id, err)) = error_rx.recv() => {
                    warn!(
                        instance_id = %instance_id,
                        error = %err,
                        "Aggregation failed, cancelling remaining instances"
                    );
                    return Err(ServiceError::Aggregation {
                        instance_id,
                        source: Box::new(err),
                    });
                }
                else => break,
            }
        }

        if aggregated.len() < expected {
            warn!(
                expected,
                received = aggregated.len(),
                "Aggregation tasks ended without reporting"
            );
            return Err(ServiceError::Incomplete {
                expected,
                received: aggregated.len(),
            });
        }

        info!(count = aggregated.len(), "Aggregated instances");
        Ok(aggregated)
    }

    async fn get_instance(&self, ctx: &CancellationToken, id: Uuid) -> ServiceResult<Instance> {
        assemble_instance(self.repository.as_ref(), ctx, id).await
    }

    async fn create_instance(
        &self,
        ctx: &CancellationToken,
        instance: &NewInstance,
    ) -> ServiceResult<Instance> {
        let available = self
            .get_available_instance_types_for_region(ctx, &instance.region)
            .await?;

        if !available.contains(&instance.instance_type) {
            return Err(ServiceError::InstanceTypeUnavailable {
                instance_type: instance.instance_type.clone(),
                scope: format!("region {}", instance.region),
                available: available.as_slice().to_vec(),
            });
        }

        let created = self
            .repository
            .create_instance(ctx, instance)
            .await
            .map_err(repository_error("CreateInstance"))?;

        // launch returns a summary, re-read for the details
        self.get_instance(ctx, created.id).await
    }

    async fn update_instance(
        &self,
        ctx: &CancellationToken,
        instance: &Instance,
    ) -> ServiceResult<Instance> {
        let current = self
            .repository
            .get_instance(ctx, instance.id)
            .await
            .map_err(repository_error("GetInstance"))?;

        // the update list only holds types to change to
        if current.instance_type != instance.instance_type {
            self.check_update_type(ctx, instance).await?;
        }

        let updated = self
            .repository
            .update_instance(ctx, instance)
            .await
            .map_err(repository_error("UpdateInstance"))?;

        populate(self.repository.as_ref(), ctx, updated).await
    }

    async fn delete_instance(&self, ctx: &CancellationToken, id: Uuid) -> ServiceResult<()> {
        self.repository
            .delete_instance(ctx, id)
            .await
            .map_err(repository_error("DeleteInstance"))
    }

    async fn get_regions(&self, ctx: &CancellationToken) -> ServiceResult<Regions> {
        self.repository
            .get_regions(ctx)
            .await
            .map_err(repository_error("GetRegions"))
    }

    async fn get_available_instance_types_for_region(
        &self,
        ctx: &CancellationToken,
        region: &str,
    ) -> ServiceResult<InstanceTypes> {
        self.repository
            .get_instance_types_for_region(ctx, region)
            .await
            .map_err(repository_error("GetAvailableInstanceTypesForRegion"))
    }

    async fn get_available_instance_types_for_update(
        &self,
        ctx: &CancellationToken,
        id: Uuid,
    ) -> ServiceResult<InstanceTypes> {
        self.repository
            .get_available_instance_types_for_update(ctx, id)
            .await
            .map_err(repository_error("GetAvailableInstanceTypesForUpdate"))
    }
}
