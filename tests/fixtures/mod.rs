// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for public-cloud-core
//!
//! Provides deterministic raw API records and an in-memory transport.
//! All UUIDs and timestamps are fixed constants to ensure tests are reproducible.
//!
//! # Design Principles
//! - All test data is deterministic (no `Uuid::new_v4()` or `Utc::now()`)
//! - Raw records are built here; tests tweak single fields of a valid record
//! - [`FakeApi`] records every call so tests can assert on request counts
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use public_cloud_core::errors::{TransportError, TransportResult};
use public_cloud_core::transport::{Page, PageRequest, PublicCloudApi};
use public_cloud_core::wire::*;
use public_cloud_core::{ApiPublicCloudRepository, AggregatingService};
use public_cloud_core::domain::{Cpu, Memory, NetworkSpeed};

// Fixed test UUIDs
pub const INSTANCE_ID_1: &str = "5d7f8262-d77f-4476-8da8-6a84f8f2ae8d";
pub const INSTANCE_ID_2: &str = "0c27ab7d-3b5e-4cf1-9d43-30d4d6b1a001";
pub const INSTANCE_ID_3: &str = "0c27ab7d-3b5e-4cf1-9d43-30d4d6b1a002";
pub const LAUNCHED_ID: &str = "0c27ab7d-3b5e-4cf1-9d43-30d4d6b1afff";

pub const AUTO_SCALING_GROUP_ID_1: &str = "90b9f2cc-c655-40ea-b01a-58c00e175c96";
pub const AUTO_SCALING_GROUP_ID_2: &str = "90b9f2cc-c655-40ea-b01a-58c00e175c97";

pub const LOAD_BALANCER_ID_1: &str = "32a1fef8-7a2a-4e6a-9b67-6d2c6e9a4b10";

pub const REGION: &str = "eu-west-3";
pub const INSTANCE_TYPE: &str = "lsw.m3.large";

// Fixed test timestamp (2024-06-01T10:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2024-06-01T10:00:00Z";

/// Parse a fixed UUID from a constant string
pub fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid UUID in test fixture")
}

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

pub fn raw_resources() -> RawResources {
    RawResources {
        cpu: Cpu {
            value: 4,
            unit: "vCPU".to_string(),
        },
        memory: Memory {
            value: 8.0,
            unit: "GiB".to_string(),
        },
        public_network_speed: NetworkSpeed {
            value: 1000,
            unit: "Gbps".to_string(),
        },
        private_network_speed: NetworkSpeed {
            value: 1000,
            unit: "Gbps".to_string(),
        },
    }
}

/// HOURLY / term 0 / billed monthly / ACTIVE
pub fn raw_contract() -> RawContract {
    RawContract {
        billing_frequency: 1,
        term: 0,
        contract_type: "HOURLY".to_string(),
        ends_at: None,
        renewals_at: fixed_timestamp(),
        created_at: fixed_timestamp(),
        state: "ACTIVE".to_string(),
    }
}

pub fn raw_ip() -> RawIp {
    RawIp {
        ip: "203.0.113.7".to_string(),
        prefix_length: "32".to_string(),
        version: 4,
        null_routed: false,
        main_ip: true,
        network_type: "PUBLIC".to_string(),
        reverse_lookup: Some("web01.example.com".to_string()),
        ddos: Some(RawDdos {
            detection_profile: "ADVANCED_DEFAULT".to_string(),
            protection_type: "ADVANCED".to_string(),
        }),
    }
}

pub fn raw_image() -> RawImage {
    RawImage {
        id: "UBUNTU_24_04_64BIT".to_string(),
        name: "Ubuntu 24.04 LTS (x86_64)".to_string(),
        version: Some("24.04".to_string()),
        family: "ubuntu".to_string(),
        flavour: "ubuntu".to_string(),
        architecture: Some("x86_64".to_string()),
        market_apps: vec![],
        storage_types: vec!["CENTRAL".to_string(), "LOCAL".to_string()],
        region: None,
        storage_size: None,
    }
}

/// Running instance, 6 GB CENTRAL root disk, hourly contract, no links
pub fn raw_instance(id: &str) -> RawInstance {
    RawInstance {
        id: id.to_string(),
        instance_type: INSTANCE_TYPE.to_string(),
        resources: raw_resources(),
        region: REGION.to_string(),
        reference: Some("web01".to_string()),
        image: raw_image(),
        state: "RUNNING".to_string(),
        product_type: "INSTANCE".to_string(),
        has_public_ipv4: true,
        has_private_network: false,
        root_disk_size: 6,
        root_disk_storage_type: "CENTRAL".to_string(),
        ips: vec![raw_ip()],
        started_at: Some(fixed_timestamp()),
        contract: raw_contract(),
        market_app_id: None,
        iso: None,
        private_network: None,
        auto_scaling_group: None,
    }
}

/// Instance linked to an auto-scaling group
pub fn raw_instance_in_group(id: &str, group_id: &str) -> RawInstance {
    RawInstance {
        auto_scaling_group: Some(RawLink::new(group_id)),
        ..raw_instance(id)
    }
}

pub fn raw_auto_scaling_group(id: &str, load_balancer_id: Option<&str>) -> RawAutoScalingGroup {
    RawAutoScalingGroup {
        id: id.to_string(),
        group_type: "CPU_BASED".to_string(),
        state: "RUNNING".to_string(),
        desired_amount: None,
        region: REGION.to_string(),
        reference: "web-pool".to_string(),
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
        starts_at: None,
        ends_at: None,
        minimum_amount: Some(1),
        maximum_amount: Some(4),
        cpu_threshold: Some(80),
        warmup_time: Some(300),
        cooldown_time: Some(600),
        load_balancer: load_balancer_id.map(RawLink::new),
    }
}

pub fn raw_load_balancer(id: &str) -> RawLoadBalancer {
    RawLoadBalancer {
        id: id.to_string(),
        load_balancer_type: "lsw.m3.large".to_string(),
        resources: raw_resources(),
        region: REGION.to_string(),
        reference: None,
        state: "RUNNING".to_string(),
        contract: raw_contract(),
        started_at: Some(fixed_timestamp()),
        ips: vec![raw_ip()],
        load_balancer_configuration: Some(RawLoadBalancerConfiguration {
            balance: "ROUNDROBIN".to_string(),
            health_check: Some(RawHealthCheck {
                method: "GET".to_string(),
                uri: "/health".to_string(),
                host: None,
                port: 80,
            }),
            sticky_session: Some(RawStickySession {
                enabled: true,
                max_life_time: 300,
            }),
            x_forwarded_for: true,
            idle_time_out: 30,
            target_port: 80,
        }),
        private_network: None,
    }
}

/// Ids generated for `count` instances, deterministic
pub fn instance_ids(count: usize) -> Vec<String> {
    (0..count)
        .map(|n| format!("00000000-0000-4000-8000-{:012x}", n + 1))
        .collect()
}

/// In-memory [`PublicCloudApi`]
///
/// Serves records from maps, pages lists the way the API does and records
/// every call.
#[derive(Default)]
pub struct FakeApi {
    listed: Vec<RawInstance>,
    default_page_size: i64,
    /// `totalCount` reported instead of the real one
    reported_total: Option<i64>,
    instances: Mutex<HashMap<String, RawInstance>>,
    auto_scaling_groups: HashMap<String, RawAutoScalingGroup>,
    load_balancers: HashMap<String, RawLoadBalancer>,
    regions: Vec<String>,
    instance_types: HashMap<String, Vec<String>>,
    update_instance_types: HashMap<String, Vec<String>>,
    failures: HashMap<String, TransportError>,
    stalled: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            default_page_size: 50,
            ..Default::default()
        }
    }

    /// Instances returned by list and get
    pub fn with_instances(mut self, instances: Vec<RawInstance>) -> Self {
        {
            let map = self.instances.get_mut().expect("poisoned");
            for instance in &instances {
                map.insert(instance.id.clone(), instance.clone());
            }
        }
        self.listed = instances;
        self
    }

    /// Replace the record get_instance returns, list stays unchanged
    pub fn with_instance_details(mut self, instance: RawInstance) -> Self {
        self.instances
            .get_mut()
            .expect("poisoned")
            .insert(instance.id.clone(), instance);
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.default_page_size = page_size;
        self
    }

    pub fn with_reported_total(mut self, total: i64) -> Self {
        self.reported_total = Some(total);
        self
    }

    pub fn with_auto_scaling_group(mut self, group: RawAutoScalingGroup) -> Self {
        self.auto_scaling_groups.insert(group.id.clone(), group);
        self
    }

    pub fn with_load_balancer(mut self, load_balancer: RawLoadBalancer) -> Self {
        self.load_balancers
            .insert(load_balancer.id.clone(), load_balancer);
        self
    }

    pub fn with_regions(mut self, regions: &[&str]) -> Self {
        self.regions = regions.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_instance_types(mut self, region: &str, types: &[&str]) -> Self {
        self.instance_types.insert(
            region.to_string(),
            types.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    pub fn with_update_instance_types(mut self, id: &str, types: &[&str]) -> Self {
        self.update_instance_types
            .insert(id.to_string(), types.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Any call targeting `id` fails with `error`
    pub fn with_failure(mut self, id: &str, error: TransportError) -> Self {
        self.failures.insert(id.to_string(), error);
        self
    }

    /// Any call targeting `id` never completes and ignores cancellation
    pub fn with_stall(mut self, id: &str) -> Self {
        self.stalled.insert(id.to_string());
        self
    }

    /// Calls made so far, e.g. `list_instances:0` or `get_instance:<id>`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("poisoned").clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("poisoned").push(call);
    }

    async fn target(&self, id: &str) -> TransportResult<()> {
        if self.stalled.contains(id) {
            std::future::pending::<()>().await;
        }
        match self.failures.get(id) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn page<T: Clone>(&self, items: &[T], page: PageRequest) -> Page<T> {
        let limit = page.limit.unwrap_or(self.default_page_size);
        let start = usize::try_from(page.offset).unwrap_or(0).min(items.len());
        let end = (start + usize::try_from(limit).unwrap_or(0)).min(items.len());

        Page {
            items: items[start..end].to_vec(),
            metadata: PageMetadata {
                total_count: self.reported_total.unwrap_or(items.len() as i64),
                offset: page.offset,
                limit,
            },
        }
    }

    fn not_found(what: &str, id: &str) -> TransportError {
        TransportError::Http {
            status: 404,
            body: format!("{} {} not found", what, id),
        }
    }
}

#[async_trait]
impl PublicCloudApi for FakeApi {
    async fn list_instances(
        &self,
        _ctx: &CancellationToken,
        page: PageRequest,
    ) -> TransportResult<Page<RawInstance>> {
        self.record(format!("list_instances:{}", page.offset));
        Ok(self.page(&self.listed, page))
    }

    async fn get_instance(&self, _ctx: &CancellationToken, id: &str) -> TransportResult<RawInstance> {
        self.record(format!("get_instance:{}", id));
        self.target(id).await?;
        self.instances
            .lock()
            .expect("poisoned")
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found("instance", id))
    }

    async fn launch_instance(
        &self,
        _ctx: &CancellationToken,
        opts: &LaunchInstanceOpts,
    ) -> TransportResult<RawInstance> {
        self.record("launch_instance".to_string());

        let mut raw = raw_instance(LAUNCHED_ID);
        raw.region = opts.region.clone();
        raw.instance_type = opts.instance_type.clone();
        raw.image.id = opts.image_id.clone();
        raw.contract.contract_type = opts.contract_type.clone();
        raw.contract.term = opts.contract_term;
        raw.contract.billing_frequency = opts.billing_frequency;
        raw.root_disk_storage_type = opts.root_disk_storage_type.clone();
        raw.root_disk_size = opts.root_disk_size.unwrap_or(raw.root_disk_size);
        raw.reference = opts.reference.clone();
        raw.market_app_id = opts.market_app_id.clone();
        raw.state = "CREATING".to_string();

        self.instances
            .lock()
            .expect("poisoned")
            .insert(raw.id.clone(), raw.clone());
        Ok(raw)
    }

    async fn update_instance(
        &self,
        _ctx: &CancellationToken,
        id: &str,
        opts: &UpdateInstanceOpts,
    ) -> TransportResult<RawInstance> {
        self.record(format!("update_instance:{}", id));
        self.target(id).await?;

        let mut instances = self.instances.lock().expect("poisoned");
        let raw = instances
            .get_mut(id)
            .ok_or_else(|| Self::not_found("instance", id))?;

        if let Some(instance_type) = &opts.instance_type {
            raw.instance_type = instance_type.clone();
        }
        if let Some(contract_type) = &opts.contract_type {
            raw.contract.contract_type = contract_type.clone();
        }
        if let Some(term) = opts.contract_term {
            raw.contract.term = term;
        }
        if let Some(billing_frequency) = opts.billing_frequency {
            raw.contract.billing_frequency = billing_frequency;
        }
        if let Some(root_disk_size) = opts.root_disk_size {
            raw.root_disk_size = root_disk_size;
        }
        raw.reference = opts.reference.clone();

        Ok(raw.clone())
    }

    async fn terminate_instance(&self, _ctx: &CancellationToken, id: &str) -> TransportResult<()> {
        self.record(format!("terminate_instance:{}", id));
        self.target(id).await?;
        self.instances
            .lock()
            .expect("poisoned")
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found("instance", id))
    }

    async fn get_auto_scaling_group(
        &self,
        _ctx: &CancellationToken,
        id: &str,
    ) -> TransportResult<RawAutoScalingGroup> {
        self.record(format!("get_auto_scaling_group:{}", id));
        self.target(id).await?;
        self.auto_scaling_groups
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found("auto scaling group", id))
    }

    async fn get_load_balancer(
        &self,
        _ctx: &CancellationToken,
        id: &str,
    ) -> TransportResult<RawLoadBalancer> {
        self.record(format!("get_load_balancer:{}", id));
        self.target(id).await?;
        self.load_balancers
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found("load balancer", id))
    }

    async fn list_regions(
        &self,
        _ctx: &CancellationToken,
        page: PageRequest,
    ) -> TransportResult<Page<RawRegion>> {
        self.record(format!("list_regions:{}", page.offset));
        let regions: Vec<RawRegion> = self
            .regions
            .iter()
            .map(|name| RawRegion {
                name: name.clone(),
                location: String::new(),
            })
            .collect();
        Ok(self.page(&regions, page))
    }

    async fn list_instance_types(
        &self,
        _ctx: &CancellationToken,
        region: &str,
        page: PageRequest,
    ) -> TransportResult<Page<RawInstanceType>> {
        self.record(format!("list_instance_types:{}:{}", region, page.offset));
        self.target(region).await?;
        let types: Vec<RawInstanceType> = self
            .instance_types
            .get(region)
            .into_iter()
            .flatten()
            .map(|name| RawInstanceType { name: name.clone() })
            .collect();
        Ok(self.page(&types, page))
    }

    async fn list_update_instance_types(
        &self,
        _ctx: &CancellationToken,
        id: &str,
    ) -> TransportResult<Vec<RawInstanceType>> {
        self.record(format!("list_update_instance_types:{}", id));
        self.target(id).await?;
        Ok(self
            .update_instance_types
            .get(id)
            .into_iter()
            .flatten()
            .map(|name| RawInstanceType { name: name.clone() })
            .collect())
    }
}

/// Repository over the fake
pub fn repository(api: &Arc<FakeApi>) -> ApiPublicCloudRepository {
    ApiPublicCloudRepository::new(api.clone())
}

/// Service over a repository over the fake
pub fn service(api: &Arc<FakeApi>) -> AggregatingService {
    AggregatingService::new(Arc::new(repository(api)))
}
