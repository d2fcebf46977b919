// Copyright (c) 2025 - Cowboy AI, Inc.
//! Raw API records
//!
//! Loosely typed mirrors of the provider's `publicCloud/v1` JSON payloads.
//! Enum fields are plain strings / integers and nullable fields are
//! `Option`, exactly as the API sends them. Nothing here is validated; the
//! [`crate::converter`] turns these into domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Cpu, Memory, NetworkSpeed};

/// Reference to another record, only the id is read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLink {
    pub id: String,
}

impl RawLink {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResources {
    pub cpu: Cpu,
    pub memory: Memory,
    pub public_network_speed: NetworkSpeed,
    pub private_network_speed: NetworkSpeed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContract {
    pub billing_frequency: i64,
    pub term: i64,
    #[serde(rename = "type")]
    pub contract_type: String,
    pub ends_at: Option<DateTime<Utc>>,
    pub renewals_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDdos {
    pub detection_profile: String,
    pub protection_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIp {
    pub ip: String,
    pub prefix_length: String,
    pub version: i64,
    pub null_routed: bool,
    pub main_ip: bool,
    pub network_type: String,
    pub reverse_lookup: Option<String>,
    pub ddos: Option<RawDdos>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImage {
    pub id: String,
    pub name: String,
    pub version: Option<String>,
    pub family: String,
    pub flavour: String,
    pub architecture: Option<String>,
    #[serde(default)]
    pub market_apps: Vec<String>,
    #[serde(default)]
    pub storage_types: Vec<String>,
    pub region: Option<String>,
    pub storage_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIso {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPrivateNetwork {
    pub private_network_id: String,
    pub status: String,
    pub subnet: String,
}

/// Instance as returned by list, get, launch and update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInstance {
    pub id: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub resources: RawResources,
    pub region: String,
    pub reference: Option<String>,
    pub image: RawImage,
    pub state: String,
    pub product_type: String,
    pub has_public_ipv4: bool,
    pub has_private_network: bool,
    pub root_disk_size: i64,
    pub root_disk_storage_type: String,
    #[serde(default)]
    pub ips: Vec<RawIp>,
    pub started_at: Option<DateTime<Utc>>,
    pub contract: RawContract,
    pub market_app_id: Option<String>,
    pub iso: Option<RawIso>,
    pub private_network: Option<RawPrivateNetwork>,
    pub auto_scaling_group: Option<RawLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAutoScalingGroup {
    pub id: String,
    #[serde(rename = "type")]
    pub group_type: String,
    pub state: String,
    pub desired_amount: Option<i64>,
    pub region: String,
    pub reference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub minimum_amount: Option<i64>,
    pub maximum_amount: Option<i64>,
    pub cpu_threshold: Option<i64>,
    pub warmup_time: Option<i64>,
    pub cooldown_time: Option<i64>,
    pub load_balancer: Option<RawLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStickySession {
    pub enabled: bool,
    pub max_life_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawHealthCheck {
    pub method: String,
    pub uri: String,
    pub host: Option<String>,
    pub port: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLoadBalancerConfiguration {
    pub balance: String,
    pub health_check: Option<RawHealthCheck>,
    pub sticky_session: Option<RawStickySession>,
    pub x_forwarded_for: bool,
    pub idle_time_out: i64,
    pub target_port: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLoadBalancer {
    pub id: String,
    #[serde(rename = "type")]
    pub load_balancer_type: String,
    pub resources: RawResources,
    pub region: String,
    pub reference: Option<String>,
    pub state: String,
    pub contract: RawContract,
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ips: Vec<RawIp>,
    pub load_balancer_configuration: Option<RawLoadBalancerConfiguration>,
    pub private_network: Option<RawPrivateNetwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRegion {
    pub name: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInstanceType {
    pub name: String,
}

/// Paging metadata attached to every list response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub total_count: i64,
    pub offset: i64,
    pub limit: i64,
}

/// Body of a launch request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchInstanceOpts {
    pub region: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub image_id: String,
    pub contract_type: String,
    pub contract_term: i64,
    pub billing_frequency: i64,
    pub root_disk_storage_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<String>,
}

/// Body of an update request, absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstanceOpts {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_term: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_frequency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<i64>,
}
