// Copyright (c) 2025 - Cowboy AI, Inc.
//! Auto-Scaling Group Entity
//!
//! Groups instances and optionally links a load balancer. The link starts
//! unresolved and is replaced once the load balancer has been fetched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{AutoScalingGroupType, InstanceState};
use super::invariants::{validate_linked_id, InvariantError};
use super::linked::{Identified, Linked};
use super::load_balancer::LoadBalancer;
use super::values::Reference;

/// Auto-scaling group
///
/// Amounts and timings are never negative; the converter narrows them to
/// `u32` after checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScalingGroup {
    pub id: Uuid,
    pub group_type: AutoScalingGroupType,
    pub state: InstanceState,
    pub region: String,
    pub reference: Reference,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<u32>,

    /// Percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_threshold: Option<u32>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warmup_time: Option<u32>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown_time: Option<u32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<Linked<LoadBalancer>>,
}

impl AutoScalingGroup {
    /// Id of the linked load balancer, resolved or not
    pub fn load_balancer_id(&self) -> Option<Uuid> {
        self.load_balancer.as_ref().map(Linked::id)
    }

    /// Loaded load balancer, if resolved
    pub fn resolved_load_balancer(&self) -> Option<&LoadBalancer> {
        self.load_balancer.as_ref().and_then(Linked::resolved)
    }

    /// Replace the load balancer link with the loaded entity
    ///
    /// # Invariant
    /// - The load balancer must be the one this group links to
    pub fn attach_load_balancer(&mut self, load_balancer: LoadBalancer) -> Result<(), InvariantError> {
        validate_linked_id(
            "loadBalancer",
            self.load_balancer_id(),
            Some(load_balancer.id),
        )?;

        self.load_balancer = Some(Linked::from(load_balancer));
        Ok(())
    }

    pub fn is_cpu_based(&self) -> bool {
        self.group_type == AutoScalingGroupType::CpuBased
    }
}

impl Identified for AutoScalingGroup {
    fn id(&self) -> Uuid {
        self.id
    }
}
