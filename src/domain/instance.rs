// Copyright (c) 2025 - Cowboy AI, Inc.
//! Instance Entity
//!
//! [`Instance`] is a provisioned virtual machine as read from the API.
//! [`NewInstance`] is the set of choices needed to launch one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auto_scaling_group::AutoScalingGroup;
use super::contract::{Contract, ContractTerms};
use super::enums::{
    ContractBillingFrequency, ContractTerm, ContractType, ImageId, InstanceState,
    RootDiskStorageType,
};
use super::image::Image;
use super::invariants::{validate_linked_id, InvariantError};
use super::linked::{Identified, Linked};
use super::load_balancer::LoadBalancer;
use super::network::Ip;
use super::values::{Iso, PrivateNetwork, Reference, Resources, RootDiskSize, SshKey};

/// Provisioned instance
///
/// # Invariants
/// - Root disk size is within 5..=1000 GB
/// - Contract term / type pairing holds
/// - Reference is at most 255 characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: Uuid,
    pub region: String,
    pub instance_type: String,
    pub resources: Resources,
    pub image: Image,
    pub state: InstanceState,
    pub product_type: String,
    pub has_public_ipv4: bool,
    pub has_private_network: bool,
    pub root_disk_size: RootDiskSize,
    pub root_disk_storage_type: RootDiskStorageType,
    pub contract: Contract,

    #[serde(default)]
    pub ips: Vec<Ip>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_app_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso: Option<Iso>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_network: Option<PrivateNetwork>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group: Option<Linked<AutoScalingGroup>>,
}

impl Instance {
    /// Id of the linked auto-scaling group, resolved or not
    pub fn auto_scaling_group_id(&self) -> Option<Uuid> {
        self.auto_scaling_group.as_ref().map(Linked::id)
    }

    pub fn resolved_auto_scaling_group(&self) -> Option<&AutoScalingGroup> {
        self.auto_scaling_group.as_ref().and_then(Linked::resolved)
    }

    /// Load balancer reached through the auto-scaling group, if both are loaded
    pub fn resolved_load_balancer(&self) -> Option<&LoadBalancer> {
        self.resolved_auto_scaling_group()
            .and_then(AutoScalingGroup::resolved_load_balancer)
    }

    /// Replace the auto-scaling group link with the loaded entity
    ///
    /// # Invariant
    /// - The group must be the one this instance links to
    pub fn attach_auto_scaling_group(
        &mut self,
        auto_scaling_group: AutoScalingGroup,
    ) -> Result<(), InvariantError> {
        validate_linked_id(
            "autoScalingGroup",
            self.auto_scaling_group_id(),
            Some(auto_scaling_group.id),
        )?;

        self.auto_scaling_group = Some(Linked::from(auto_scaling_group));
        Ok(())
    }

    /// Whether every nested link has been resolved
    pub fn is_fully_resolved(&self) -> bool {
        match &self.auto_scaling_group {
            None => true,
            Some(Linked::Unresolved(_)) => false,
            Some(Linked::Resolved(group)) => group
                .load_balancer
                .as_ref()
                .map_or(true, Linked::is_resolved),
        }
    }

    pub fn contract_terms(&self) -> ContractTerms {
        ContractTerms::from(&self.contract)
    }
}

impl Identified for Instance {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Instance that has not been launched yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInstance {
    pub region: String,
    pub instance_type: String,
    pub image_id: ImageId,
    pub root_disk_storage_type: RootDiskStorageType,
    pub contract: ContractTerms,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<RootDiskSize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_app_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<SshKey>,
}

impl NewInstance {
    /// Builder pattern for fluent construction
    ///
    /// The contract defaults to HOURLY, term 0, billed monthly.
    pub fn builder(
        region: impl Into<String>,
        instance_type: impl Into<String>,
        image_id: ImageId,
        root_disk_storage_type: RootDiskStorageType,
    ) -> NewInstanceBuilder {
        NewInstanceBuilder::new(
            region.into(),
            instance_type.into(),
            image_id,
            root_disk_storage_type,
        )
    }
}

/// Builder for NewInstance with fluent API
pub struct NewInstanceBuilder {
    region: String,
    instance_type: String,
    image_id: ImageId,
    root_disk_storage_type: RootDiskStorageType,
    contract_type: ContractType,
    term: ContractTerm,
    billing_frequency: ContractBillingFrequency,
    root_disk_size: Option<RootDiskSize>,
    market_app_id: Option<String>,
    reference: Option<Reference>,
    ssh_key: Option<SshKey>,
}

impl NewInstanceBuilder {
    fn new(
        region: String,
        instance_type: String,
        image_id: ImageId,
        root_disk_storage_type: RootDiskStorageType,
    ) -> Self {
        Self {
            region,
            instance_type,
            image_id,
            root_disk_storage_type,
            contract_type: ContractType::Hourly,
            term: ContractTerm::Zero,
            billing_frequency: ContractBillingFrequency::One,
            root_disk_size: None,
            market_app_id: None,
            reference: None,
            ssh_key: None,
        }
    }

    pub fn contract(
        mut self,
        contract_type: ContractType,
        term: ContractTerm,
        billing_frequency: ContractBillingFrequency,
    ) -> Self {
        self.contract_type = contract_type;
        self.term = term;
        self.billing_frequency = billing_frequency;
        self
    }

    pub fn root_disk_size(mut self, size: RootDiskSize) -> Self {
        self.root_disk_size = Some(size);
        self
    }

    pub fn market_app_id(mut self, market_app_id: impl Into<String>) -> Self {
        self.market_app_id = Some(market_app_id.into());
        self
    }

    pub fn reference(mut self, reference: Reference) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn ssh_key(mut self, ssh_key: SshKey) -> Self {
        self.ssh_key = Some(ssh_key);
        self
    }

    /// Finish, checking the contract term / type pairing
    pub fn build(self) -> Result<NewInstance, InvariantError> {
        let contract = ContractTerms::new(self.billing_frequency, self.term, self.contract_type)?;

        Ok(NewInstance {
            region: self.region,
            instance_type: self.instance_type,
            image_id: self.image_id,
            root_disk_storage_type: self.root_disk_storage_type,
            contract,
            root_disk_size: self.root_disk_size,
            market_app_id: self.market_app_id,
            reference: self.reference,
            ssh_key: self.ssh_key,
        })
    }
}
