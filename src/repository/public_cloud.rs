// Copyright (c) 2025 - Cowboy AI, Inc.
//! API-backed repository

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use super::pagination::drain;
use super::{PublicCloudRepository, RepositoryError, RepositoryResult};
use crate::converter::{
    to_launch_instance_opts, to_update_instance_opts, ConversionError, Converter, WireConverter,
};
use crate::domain::{AutoScalingGroup, Instance, InstanceTypes, LoadBalancer, NewInstance, Regions};
use crate::errors::{TransportError, TransportResult};
use crate::transport::{Page, PageRequest, PublicCloudApi};
use crate::wire::{
    RawAutoScalingGroup, RawInstance, RawInstanceType, RawLoadBalancer, RawRegion,
};

/// Race a transport call against cancellation
async fn guarded<T>(
    ctx: &CancellationToken,
    call: impl Future<Output = TransportResult<T>>,
) -> TransportResult<T> {
    tokio::select! {
        biased;
        _ = ctx.cancelled() => Err(TransportError::Cancelled),
        result = call => result,
    }
}

fn transport_error(
    operation: &'static str,
    target: Option<String>,
) -> impl FnOnce(TransportError) -> RepositoryError {
    move |source| RepositoryError::Transport {
        operation,
        target,
        source,
    }
}

fn conversion_error(
    operation: &'static str,
    target: Option<String>,
) -> impl FnOnce(ConversionError) -> RepositoryError {
    move |source| RepositoryError::Conversion {
        operation,
        target,
        source,
    }
}

/// Repository over a [`PublicCloudApi`]
pub struct ApiPublicCloudRepository {
    api: Arc<dyn PublicCloudApi>,
    page_limit: Option<i64>,
    instance_converter: Arc<dyn Converter<RawInstance, Instance>>,
    auto_scaling_group_converter: Arc<dyn Converter<RawAutoScalingGroup, AutoScalingGroup>>,
    load_balancer_converter: Arc<dyn Converter<RawLoadBalancer, LoadBalancer>>,
}

impl ApiPublicCloudRepository {
    /// Create a repository using the wire converters
    pub fn new(api: Arc<dyn PublicCloudApi>) -> Self {
        Self {
            api,
            page_limit: None,
            instance_converter: Arc::new(WireConverter),
            auto_scaling_group_converter: Arc::new(WireConverter),
            load_balancer_converter: Arc::new(WireConverter),
        }
    }

    /// Connect to the HTTP API described by `config`
    #[cfg(feature = "http")]
    pub fn connect(config: &crate::config::PublicCloudConfig) -> TransportResult<Self> {
        let api = crate::transport::HttpPublicCloudApi::new(config)?;
        Ok(Self::new(Arc::new(api)).with_page_limit(config.page_limit))
    }

    /// Page size of the first list request; later pages follow the API
    pub fn with_page_limit(mut self, page_limit: i64) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    pub fn with_instance_converter(
        mut self,
        converter: Arc<dyn Converter<RawInstance, Instance>>,
    ) -> Self {
        self.instance_converter = converter;
        self
    }

    pub fn with_auto_scaling_group_converter(
        mut self,
        converter: Arc<dyn Converter<RawAutoScalingGroup, AutoScalingGroup>>,
    ) -> Self {
        self.auto_scaling_group_converter = converter;
        self
    }

    pub fn with_load_balancer_converter(
        mut self,
        converter: Arc<dyn Converter<RawLoadBalancer, LoadBalancer>>,
    ) -> Self {
        self.load_balancer_converter = converter;
        self
    }

    fn first_page(&self) -> PageRequest {
        PageRequest::new(self.page_limit, 0)
    }

    /// Drain a list of names, shared by regions and instance types
    async fn drain_names<Raw, F, Fut>(
        &self,
        operation: &'static str,
        target: Option<String>,
        mut fetch: F,
        name: fn(Raw) -> String,
    ) -> RepositoryResult<Vec<String>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = TransportResult<Page<Raw>>>,
    {
        drain(
            self.first_page(),
            |page| {
                let call = fetch(page);
                let target = target.clone();
                async move { call.await.map_err(transport_error(operation, target)) }
            },
            |raw| Ok(name(raw)),
        )
        .await
    }
}

#[async_trait]
impl PublicCloudRepository for ApiPublicCloudRepository {
    async fn get_all_instances(&self, ctx: &CancellationToken) -> RepositoryResult<Vec<Instance>> {
        const OPERATION: &str = "GetAllInstances";

        let instances = drain(
            self.first_page(),
            |page| async move {
                guarded(ctx, self.api.list_instances(ctx, page))
                    .await
                    .map_err(transport_error(OPERATION, None))
            },
            |raw: RawInstance| {
                self.instance_converter
                    .convert(&raw)
                    .map_err(conversion_error(OPERATION, Some(raw.id.clone())))
            },
        )
        .await?;

        debug!(count = instances.len(), "Listed instances");
        Ok(instances)
    }

    async fn get_instance(&self, ctx: &CancellationToken, id: Uuid) -> RepositoryResult<Instance> {
        const OPERATION: &str = "GetInstance";
        let target = id.to_string();

        let raw = guarded(ctx, self.api.get_instance(ctx, &target))
            .await
            .map_err(transport_error(OPERATION, Some(target.clone())))?;

        self.instance_converter
            .convert(&raw)
            .map_err(conversion_error(OPERATION, Some(target)))
    }

    async fn get_auto_scaling_group(
        &self,
        ctx: &CancellationToken,
        id: Uuid,
    ) -> RepositoryResult<AutoScalingGroup> {
        const OPERATION: &str = "GetAutoScalingGroup";
        let target = id.to_string();

        let raw = guarded(ctx, self.api.get_auto_scaling_group(ctx, &target))
            .await
            .map_err(transport_error(OPERATION, Some(target.clone())))?;

        self.auto_scaling_group_converter
            .convert(&raw)
            .map_err(conversion_error(OPERATION, Some(target)))
    }

    async fn get_load_balancer(
        &self,
        ctx: &CancellationToken,
        id: Uuid,
    ) -> RepositoryResult<LoadBalancer> {
        const OPERATION: &str = "GetLoadBalancer";
        let target = id.to_string();

        let raw = guarded(ctx, self.api.get_load_balancer(ctx, &target))
            .await
            .map_err(transport_error(OPERATION, Some(target.clone())))?;

        self.load_balancer_converter
            .convert(&raw)
            .map_err(conversion_error(OPERATION, Some(target)))
    }

    async fn create_instance(
        &self,
        ctx: &CancellationToken,
        instance: &NewInstance,
    ) -> RepositoryResult<Instance> {
        const OPERATION: &str = "CreateInstance";

        let opts = to_launch_instance_opts(instance);
        let raw = guarded(ctx, self.api.launch_instance(ctx, &opts))
            .await
            .map_err(transport_error(OPERATION, None))?;

        let launched = self
            .instance_converter
            .convert(&raw)
            .map_err(conversion_error(OPERATION, Some(raw.id.clone())))?;

        info!(
            instance_id = %launched.id,
            region = %launched.region,
            instance_type = %launched.instance_type,
            "Launched instance"
        );
        Ok(launched)
    }

    async fn update_instance(
        &self,
        ctx: &CancellationToken,
        instance: &Instance,
    ) -> RepositoryResult<Instance> {
        const OPERATION: &str = "UpdateInstance";
        let target = instance.id.to_string();

        let opts = to_update_instance_opts(instance);
        let raw = guarded(ctx, self.api.update_instance(ctx, &target, &opts))
            .await
            .map_err(transport_error(OPERATION, Some(target.clone())))?;

        let updated = self
            .instance_converter
            .convert(&raw)
            .map_err(conversion_error(OPERATION, Some(target)))?;

        info!(instance_id = %updated.id, "Updated instance");
        Ok(updated)
    }

    async fn delete_instance(&self, ctx: &CancellationToken, id: Uuid) -> RepositoryResult<()> {
        const OPERATION: &str = "DeleteInstance";
        let target = id.to_string();

        guarded(ctx, self.api.terminate_instance(ctx, &target))
            .await
            .map_err(transport_error(OPERATION, Some(target)))?;

        info!(instance_id = %id, "Terminated instance");
        Ok(())
    }

    async fn get_regions(&self, ctx: &CancellationToken) -> RepositoryResult<Regions> {
        let names = self
            .drain_names(
                "GetRegions",
                None,
                |page| guarded(ctx, self.api.list_regions(ctx, page)),
                |region: RawRegion| region.name,
            )
            .await?;

        Ok(Regions::new(names))
    }

    async fn get_instance_types_for_region(
        &self,
        ctx: &CancellationToken,
        region: &str,
    ) -> RepositoryResult<InstanceTypes> {
        let names = self
            .drain_names(
                "GetInstanceTypesForRegion",
                Some(region.to_string()),
                |page| guarded(ctx, self.api.list_instance_types(ctx, region, page)),
                |instance_type: RawInstanceType| instance_type.name,
            )
            .await?;

        Ok(InstanceTypes::new(names))
    }

    async fn get_available_instance_types_for_update(
        &self,
        ctx: &CancellationToken,
        id: Uuid,
    ) -> RepositoryResult<InstanceTypes> {
        const OPERATION: &str = "GetAvailableInstanceTypesForUpdate";
        let target = id.to_string();

        let raw = guarded(ctx, self.api.list_update_instance_types(ctx, &target))
            .await
            .map_err(transport_error(OPERATION, Some(target)))?;

        Ok(raw.into_iter().map(|instance_type| instance_type.name).collect())
    }
}
