// Copyright (c) 2025 - Cowboy AI, Inc.
//! Public Cloud Domain Models
//!
//! Strongly validated view of the provider's compute resources. Nothing in
//! this module performs I/O; raw API records are turned into these types by
//! [`crate::converter`].
//!
//! # Value Objects with Invariants
//!
//! - [`RootDiskSize`] - root disk size in GB (5-1000)
//! - [`Reference`] - free-form label, at most 255 characters
//! - [`SshKey`] - OpenSSH public key
//! - [`enums`] - closed enum families (contract, state, images, ...)
//!
//! # Entities
//!
//! - [`Instance`] - provisioned virtual machine
//! - [`AutoScalingGroup`] - group of instances, optionally load balanced
//! - [`LoadBalancer`] - traffic distribution in front of a group
//! - [`Contract`] - billing arrangement with the term / type invariant
//!
//! # Domain Relationships
//!
//! Instance → AutoScalingGroup → LoadBalancer, each link a [`Linked`] value
//! that is either an unresolved id or the loaded entity.

pub mod auto_scaling_group;
pub mod catalog;
pub mod contract;
pub mod enums;
pub mod image;
pub mod instance;
pub mod invariants;
pub mod linked;
pub mod load_balancer;
pub mod network;
pub mod values;

pub use auto_scaling_group::AutoScalingGroup;
pub use catalog::{InstanceTypes, Regions};
pub use contract::{Contract, ContractTerms};
pub use enums::{
    AutoScalingGroupType, Balance, ContractBillingFrequency, ContractState, ContractTerm,
    ContractType, EnumFamily, HttpMethod, ImageId, InstanceState, IntEnum, NetworkType,
    RootDiskStorageType, StringEnum,
};
pub use image::Image;
pub use instance::{Instance, NewInstance, NewInstanceBuilder};
pub use invariants::{InvariantError, ValidationError, ValidationResult};
pub use linked::{Identified, Linked};
pub use load_balancer::{HealthCheck, LoadBalancer, LoadBalancerConfiguration, StickySession};
pub use network::{Ddos, Ip};
pub use values::{
    Cpu, Iso, Memory, NetworkSpeed, PrivateNetwork, Reference, Resources, RootDiskSize, SshKey,
};
