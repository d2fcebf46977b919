// Copyright (c) 2025 - Cowboy AI, Inc.
//! IP addresses attached to instances and load balancers

use serde::{Deserialize, Serialize};

use super::enums::NetworkType;

/// DDoS protection profile of a public IP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ddos {
    pub detection_profile: String,
    pub protection_type: String,
}

/// IP address assigned to a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ip {
    pub ip: String,
    pub prefix_length: String,
    pub version: i64,
    pub null_routed: bool,
    pub main_ip: bool,
    pub network_type: NetworkType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_lookup: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ddos: Option<Ddos>,
}

impl Ip {
    pub fn is_public(&self) -> bool {
        self.network_type == NetworkType::Public
    }
}

/// Main public address among a list of IPs, if any
pub fn main_public_ip(ips: &[Ip]) -> Option<&Ip> {
    ips.iter().find(|ip| ip.main_ip && ip.is_public())
}
