// Copyright (c) 2025 - Cowboy AI, Inc.
//! Load Balancer Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::contract::Contract;
use super::enums::{Balance, HttpMethod, InstanceState};
use super::linked::Identified;
use super::network::Ip;
use super::values::{PrivateNetwork, Reference, Resources};

/// Session stickiness settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickySession {
    pub enabled: bool,
    /// Seconds
    pub max_life_time: i64,
}

/// Backend health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub method: HttpMethod,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub port: i64,
}

/// Traffic distribution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerConfiguration {
    pub balance: Balance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky_session: Option<StickySession>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
    pub x_forwarded_for: bool,
    /// Seconds
    pub idle_time_out: i64,
    pub target_port: i64,
}

/// Load balancer in front of an auto-scaling group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub id: Uuid,
    pub load_balancer_type: String,
    pub resources: Resources,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
    pub state: InstanceState,
    pub contract: Contract,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ips: Vec<Ip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<LoadBalancerConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_network: Option<PrivateNetwork>,
}

impl LoadBalancer {
    pub fn is_sticky(&self) -> bool {
        self.configuration
            .as_ref()
            .and_then(|configuration| configuration.sticky_session)
            .is_some_and(|session| session.enabled)
    }
}

impl Identified for LoadBalancer {
    fn id(&self) -> Uuid {
        self.id
    }
}
