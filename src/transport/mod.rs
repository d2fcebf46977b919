// Copyright (c) 2025 - Cowboy AI, Inc.
//! Transport to the provider API
//!
//! [`PublicCloudApi`] is the raw, unvalidated view of the `publicCloud/v1`
//! REST API. Implementations move bytes and decode JSON into
//! [`crate::wire`] records; they never validate domain rules.
//!
//! Every call takes a [`CancellationToken`]. Implementations should stop as
//! soon as it is cancelled; callers still race each call against the token
//! so an implementation that ignores it cannot hold them up.
//!
//! ```text
//! Repository ──▶ PublicCloudApi ──▶ HTTP (feature "http") / in-memory fake
//! ```

#[cfg(feature = "http")]
pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::errors::TransportResult;
use crate::wire::{
    LaunchInstanceOpts, PageMetadata, RawAutoScalingGroup, RawInstance, RawInstanceType,
    RawLoadBalancer, RawRegion, UpdateInstanceOpts,
};

#[cfg(feature = "http")]
pub use http::HttpPublicCloudApi;

/// Which slice of a list to fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// `None` lets the API pick its default page size
    pub limit: Option<i64>,
    pub offset: i64,
}

impl PageRequest {
    /// First page at the API's default size
    pub fn first() -> Self {
        Self::default()
    }

    pub fn new(limit: Option<i64>, offset: i64) -> Self {
        Self { limit, offset }
    }
}

/// One page of a list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub metadata: PageMetadata,
}

/// Raw provider API
#[async_trait]
pub trait PublicCloudApi: Send + Sync {
    /// List instances
    async fn list_instances(
        &self,
        ctx: &CancellationToken,
        page: PageRequest,
    ) -> TransportResult<Page<RawInstance>>;

    /// Get instance details
    async fn get_instance(&self, ctx: &CancellationToken, id: &str)
        -> TransportResult<RawInstance>;

    /// Launch a new instance
    async fn launch_instance(
        &self,
        ctx: &CancellationToken,
        opts: &LaunchInstanceOpts,
    ) -> TransportResult<RawInstance>;

    /// Update an existing instance
    async fn update_instance(
        &self,
        ctx: &CancellationToken,
        id: &str,
        opts: &UpdateInstanceOpts,
    ) -> TransportResult<RawInstance>;

    /// Terminate an instance
    async fn terminate_instance(&self, ctx: &CancellationToken, id: &str) -> TransportResult<()>;

    /// Get auto-scaling group details
    async fn get_auto_scaling_group(
        &self,
        ctx: &CancellationToken,
        id: &str,
    ) -> TransportResult<RawAutoScalingGroup>;

    /// Get load balancer details
    async fn get_load_balancer(
        &self,
        ctx: &CancellationToken,
        id: &str,
    ) -> TransportResult<RawLoadBalancer>;

    /// List regions
    async fn list_regions(
        &self,
        ctx: &CancellationToken,
        page: PageRequest,
    ) -> TransportResult<Page<RawRegion>>;

    /// List instance types offered in a region
    async fn list_instance_types(
        &self,
        ctx: &CancellationToken,
        region: &str,
        page: PageRequest,
    ) -> TransportResult<Page<RawInstanceType>>;

    /// List instance types an existing instance can be changed to
    async fn list_update_instance_types(
        &self,
        ctx: &CancellationToken,
        id: &str,
    ) -> TransportResult<Vec<RawInstanceType>>;
}
