// Copyright (c) 2025 - Cowboy AI, Inc.

//! HTTP transport for the `publicCloud/v1` REST API
//!
//! ```text
//! list_instances             = GET    /instances?limit=&offset=
//! get_instance               = GET    /instances/{id}
//! launch_instance            = POST   /instances
//! update_instance            = PUT    /instances/{id}
//! terminate_instance         = DELETE /instances/{id}
//! get_auto_scaling_group     = GET    /autoScalingGroups/{id}
//! get_load_balancer          = GET    /loadBalancers/{id}
//! list_regions               = GET    /regions?limit=&offset=
//! list_instance_types        = GET    /instanceTypes?region=&limit=&offset=
//! list_update_instance_types = GET    /instances/{id}/instanceTypesUpdate
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use public_cloud_core::config::PublicCloudConfig;
//! use public_cloud_core::transport::HttpPublicCloudApi;
//!
//! let config = PublicCloudConfig::default().with_api_token("your-token-here");
//! let api = HttpPublicCloudApi::new(&config)?;
//! # Ok::<(), public_cloud_core::errors::TransportError>(())
//! ```

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{Page, PageRequest, PublicCloudApi};
use crate::config::PublicCloudConfig;
use crate::errors::{TransportError, TransportResult};
use crate::wire::{
    LaunchInstanceOpts, PageMetadata, RawAutoScalingGroup, RawInstance, RawInstanceType,
    RawLoadBalancer, RawRegion, UpdateInstanceOpts,
};

/// Authentication header the provider expects
pub const AUTH_HEADER: &str = "X-LSW-Auth";

/// List response envelope
#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    #[serde(alias = "instances", alias = "regions", alias = "instanceTypes")]
    items: Vec<T>,
    #[serde(rename = "_metadata", default)]
    metadata: PageMetadata,
}

impl<T> From<ListEnvelope<T>> for Page<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        Page {
            items: envelope.items,
            metadata: envelope.metadata,
        }
    }
}

/// reqwest-backed [`PublicCloudApi`]
pub struct HttpPublicCloudApi {
    base_url: String,
    client: Client,
}

impl HttpPublicCloudApi {
    /// Create a new client
    pub fn new(config: &PublicCloudConfig) -> TransportResult<Self> {
        let base_url = config.base_url();
        info!("Connecting to public cloud API at {}", base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    AUTH_HEADER,
                    config.api_token.parse().map_err(|e| {
                        TransportError::Network(format!("Invalid API token: {}", e))
                    })?,
                );
                headers.insert(
                    "Content-Type",
                    "application/json".parse().map_err(|e| {
                        TransportError::Network(format!("Invalid header: {}", e))
                    })?,
                );
                headers
            })
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, giving up as soon as the token is cancelled
    async fn send(&self, ctx: &CancellationToken, request: RequestBuilder) -> TransportResult<Response> {
        let response = tokio::select! {
            _ = ctx.cancelled() => return Err(TransportError::Cancelled),
            response = request.send() => response?,
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await;
        Err(http_error(status.as_u16(), body))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        ctx: &CancellationToken,
        request: RequestBuilder,
    ) -> TransportResult<T> {
        let response = self.send(ctx, request).await?;

        tokio::select! {
            _ = ctx.cancelled() => Err(TransportError::Cancelled),
            body = response.json::<T>() => Ok(body?),
        }
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        ctx: &CancellationToken,
        request: RequestBuilder,
        page: PageRequest,
    ) -> TransportResult<Page<T>> {
        let mut query = vec![("offset", page.offset.to_string())];
        if let Some(limit) = page.limit {
            query.push(("limit", limit.to_string()));
        }

        let envelope: ListEnvelope<T> = self.fetch(ctx, request.query(&query)).await?;
        debug!(
            offset = envelope.metadata.offset,
            total_count = envelope.metadata.total_count,
            items = envelope.items.len(),
            "Fetched page"
        );

        Ok(envelope.into())
    }
}

/// Error for a non-success status, keeping a body read failure visible
fn http_error(status: u16, body: Result<String, reqwest::Error>) -> TransportError {
    let body = body.unwrap_or_else(|e| format!("<unreadable body: {}>", e));
    TransportError::Http { status, body }
}

fn encode(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[async_trait]
impl PublicCloudApi for HttpPublicCloudApi {
    async fn list_instances(
        &self,
        ctx: &CancellationToken,
        page: PageRequest,
    ) -> TransportResult<Page<RawInstance>> {
        let request = self.client.get(self.url("/instances"));
        self.fetch_page(ctx, request, page).await
    }

    async fn get_instance(&self, ctx: &CancellationToken, id: &str) -> TransportResult<RawInstance> {
        let request = self.client.get(self.url(&format!("/instances/{}", encode(id))));
        self.fetch(ctx, request).await
    }

    async fn launch_instance(
        &self,
        ctx: &CancellationToken,
        opts: &LaunchInstanceOpts,
    ) -> TransportResult<RawInstance> {
        let request = self.client.post(self.url("/instances")).json(opts);
        self.fetch(ctx, request).await
    }

    async fn update_instance(
        &self,
        ctx: &CancellationToken,
        id: &str,
        opts: &UpdateInstanceOpts,
    ) -> TransportResult<RawInstance> {
        let request = self
            .client
            .put(self.url(&format!("/instances/{}", encode(id))))
            .json(opts);
        self.fetch(ctx, request).await
    }

    async fn terminate_instance(&self, ctx: &CancellationToken, id: &str) -> TransportResult<()> {
        let request = self.client.delete(self.url(&format!("/instances/{}", encode(id))));
        self.send(ctx, request).await?;
        debug!("Terminated instance {}", id);
        Ok(())
    }

    async fn get_auto_scaling_group(
        &self,
        ctx: &CancellationToken,
        id: &str,
    ) -> TransportResult<RawAutoScalingGroup> {
        let request = self
            .client
            .get(self.url(&format!("/autoScalingGroups/{}", encode(id))));
        self.fetch(ctx, request).await
    }

    async fn get_load_balancer(
        &self,
        ctx: &CancellationToken,
        id: &str,
    ) -> TransportResult<RawLoadBalancer> {
        let request = self
            .client
            .get(self.url(&format!("/loadBalancers/{}", encode(id))));
        self.fetch(ctx, request).await
    }

    async fn list_regions(
        &self,
        ctx: &CancellationToken,
        page: PageRequest,
    ) -> TransportResult<Page<RawRegion>> {
        let request = self.client.get(self.url("/regions"));
        self.fetch_page(ctx, request, page).await
    }

    async fn list_instance_types(
        &self,
        ctx: &CancellationToken,
        region: &str,
        page: PageRequest,
    ) -> TransportResult<Page<RawInstanceType>> {
        let request = self
            .client
            .get(self.url("/instanceTypes"))
            .query(&[("region", region)]);
        self.fetch_page(ctx, request, page).await
    }

    async fn list_update_instance_types(
        &self,
        ctx: &CancellationToken,
        id: &str,
    ) -> TransportResult<Vec<RawInstanceType>> {
        let request = self
            .client
            .get(self.url(&format!("/instances/{}/instanceTypesUpdate", encode(id))));
        let envelope: ListEnvelope<RawInstanceType> = self.fetch(ctx, request).await?;
        Ok(envelope.items)
    }
}
