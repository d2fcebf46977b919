// Copyright (c) 2025 - Cowboy AI, Inc.
//! Entity Converter
//!
//! Pure translation between raw API records ([`crate::wire`]) and validated
//! domain entities. No I/O happens here.
//!
//! # Direction
//!
//! - raw → domain ([`to_domain`]): every enum field, identifier and bounded
//!   value is validated; the first failure aborts with a [`ConversionError`]
//!   naming the field path (`contract.billingFrequency`, `ips[0].networkType`).
//!   Cross-field rules run after field validation.
//! - domain → raw ([`to_wire`]): launch and update request bodies. Domain
//!   values are already valid so this direction cannot fail.
//!
//! # Strategy
//!
//! The repository does not call the functions directly; it holds one
//! [`Converter`] per entity kind so tests can substitute their own.

pub mod to_domain;
pub mod to_wire;

use thiserror::Error;

use crate::domain::{
    AutoScalingGroup, Instance, InvariantError, LoadBalancer, ValidationError,
};
use crate::wire::{RawAutoScalingGroup, RawInstance, RawLoadBalancer};

pub use to_domain::{convert_auto_scaling_group, convert_instance, convert_load_balancer};
pub use to_wire::{to_launch_instance_opts, to_update_instance_opts};

/// Result type for conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

/// A raw record could not be turned into a domain entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A single field is malformed
    #[error("{field}: {source}")]
    Validation {
        field: String,
        source: ValidationError,
    },

    /// Fields are valid on their own but violate a business rule
    #[error("{field}: {source}")]
    Invariant {
        field: String,
        source: InvariantError,
    },
}

impl ConversionError {
    /// Path of the offending field, e.g. `contract.term`
    pub fn field(&self) -> &str {
        match self {
            Self::Validation { field, .. } | Self::Invariant { field, .. } => field,
        }
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, Self::Invariant { .. })
    }

    /// Prefix the field path with the enclosing record
    pub(crate) fn nested(self, parent: &str) -> Self {
        match self {
            Self::Validation { field, source } => Self::Validation {
                field: format!("{}.{}", parent, field),
                source,
            },
            Self::Invariant { field, source } => Self::Invariant {
                field: format!("{}.{}", parent, field),
                source,
            },
        }
    }
}

/// Attach a field path to a validation failure
pub(crate) trait AtField<T> {
    fn at(self, field: &str) -> ConversionResult<T>;
}

impl<T> AtField<T> for Result<T, ValidationError> {
    fn at(self, field: &str) -> ConversionResult<T> {
        self.map_err(|source| ConversionError::Validation {
            field: field.to_string(),
            source,
        })
    }
}

impl<T> AtField<T> for Result<T, InvariantError> {
    fn at(self, field: &str) -> ConversionResult<T> {
        self.map_err(|source| ConversionError::Invariant {
            field: field.to_string(),
            source,
        })
    }
}

/// Raw record → domain entity strategy
pub trait Converter<Raw, Domain>: Send + Sync {
    fn convert(&self, raw: &Raw) -> ConversionResult<Domain>;
}

/// Default converter backed by [`to_domain`]
///
/// Nested entities are left as unresolved links.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireConverter;

impl Converter<RawInstance, Instance> for WireConverter {
    fn convert(&self, raw: &RawInstance) -> ConversionResult<Instance> {
        convert_instance(raw, None)
    }
}

impl Converter<RawAutoScalingGroup, AutoScalingGroup> for WireConverter {
    fn convert(&self, raw: &RawAutoScalingGroup) -> ConversionResult<AutoScalingGroup> {
        convert_auto_scaling_group(raw, None)
    }
}

impl Converter<RawLoadBalancer, LoadBalancer> for WireConverter {
    fn convert(&self, raw: &RawLoadBalancer) -> ConversionResult<LoadBalancer> {
        convert_load_balancer(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_prefixes_field_path() {
        let err = Err::<(), _>(ValidationError::InvalidUuid("x".to_string()))
            .at("networkType")
            .unwrap_err()
            .nested("ips[0]");

        assert_eq!(err.field(), "ips[0].networkType");
        assert!(!err.is_invariant());
        assert!(err.to_string().starts_with("ips[0].networkType: "));
    }
}
