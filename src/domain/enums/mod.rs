// Copyright (c) 2025 - Cowboy AI, Inc.
//! Enum Registry
//!
//! Closed sets of discrete values the provider API uses. Every family is a
//! plain Rust enum backed by an immutable `'static` table of its members, so
//! membership checks, allow-lists and display all read from the same place.
//!
//! # Families
//!
//! | Family | Raw type | Members |
//! |--------|----------|---------|
//! | [`ContractBillingFrequency`] | integer | 0, 1, 3, 6, 12 |
//! | [`ContractTerm`] | integer | 0, 1, 3, 6, 12 |
//! | [`ContractType`] | string | HOURLY, MONTHLY |
//! | [`ContractState`] | string | ACTIVE, DELETE_SCHEDULED |
//! | [`InstanceState`] | string | CREATING ... UNKNOWN |
//! | [`RootDiskStorageType`] | string | LOCAL, CENTRAL |
//! | [`ImageId`] | string | operating system images |
//! | [`NetworkType`] | string | INTERNAL, PUBLIC |
//! | [`AutoScalingGroupType`] | string | MANUAL, CPU_BASED |
//! | [`Balance`] | string | ROUNDROBIN, LEASTCONN, SOURCE |
//! | [`HttpMethod`] | string | GET, HEAD |
//!
//! Membership is closed: an unknown raw value is always a
//! [`ValidationError::InvalidEnumValue`], never coerced to a default.

pub mod contract;
pub mod instance;
pub mod load_balancer;
pub mod network;
pub mod scaling;

pub use contract::{ContractBillingFrequency, ContractState, ContractTerm, ContractType};
pub use instance::{ImageId, InstanceState, RootDiskStorageType};
pub use load_balancer::{Balance, HttpMethod};
pub use network::NetworkType;
pub use scaling::AutoScalingGroupType;

use super::invariants::{ValidationError, ValidationResult};

/// A closed family of values
pub trait EnumFamily: Copy + Eq + Sized + 'static {
    /// Name used in error messages (wire field family)
    const FAMILY: &'static str;

    /// Every member, in presentation order
    fn values() -> &'static [Self];
}

/// Enum family whose wire representation is a string
pub trait StringEnum: EnumFamily {
    /// Wire representation
    fn as_str(&self) -> &'static str;

    /// Validate a raw wire string
    fn parse(raw: &str) -> ValidationResult<Self> {
        Self::values()
            .iter()
            .copied()
            .find(|member| member.as_str() == raw)
            .ok_or_else(|| ValidationError::InvalidEnumValue {
                family: Self::FAMILY,
                value: raw.to_string(),
                allowed: Self::wire_values().join(", "),
            })
    }

    /// Wire strings of every member, for allow-lists
    fn wire_values() -> Vec<&'static str> {
        Self::values().iter().map(|member| member.as_str()).collect()
    }
}

/// Enum family whose wire representation is an integer
pub trait IntEnum: EnumFamily {
    /// Wire representation
    fn value(&self) -> i64;

    /// Validate a raw wire integer
    ///
    /// Negative numbers and numbers outside the declared set are rejected
    /// even when they look plausible (e.g. a 2 month term).
    fn parse(raw: i64) -> ValidationResult<Self> {
        Self::values()
            .iter()
            .copied()
            .find(|member| member.value() == raw)
            .ok_or_else(|| ValidationError::InvalidEnumValue {
                family: Self::FAMILY,
                value: raw.to_string(),
                allowed: Self::wire_values()
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Wire integers of every member, for allow-lists
    fn wire_values() -> Vec<i64> {
        Self::values().iter().map(|member| member.value()).collect()
    }
}
