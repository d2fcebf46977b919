// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Domain Invariants
//!
//! This module contains the field-level and cross-field rules every domain
//! entity is checked against. All functions are pure (no side effects) and
//! return detailed errors.
//!
//! # Invariant Categories
//!
//! 1. **Field Invariants** ([`ValidationError`]): a single raw value is
//!    malformed (unknown enum member, bad uuid, out of bounds)
//! 2. **Cross-Field Invariants** ([`InvariantError`]): every field is valid on
//!    its own but the combination is logically inconsistent

use uuid::Uuid;

use super::enums::{ContractTerm, ContractType};

/// Validation result with detailed error information
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// A single field failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Raw value is not a member of a closed enum family
    #[error("invalid {family} value \"{value}\", must be one of [{allowed}]")]
    InvalidEnumValue {
        family: &'static str,
        value: String,
        allowed: String,
    },

    /// Identifier is not a uuid
    #[error("cannot convert string to uuid: \"{0}\"")]
    InvalidUuid(String),

    /// Reference exceeds the provider's length limit
    #[error("reference cannot be more than {max} characters long, got {length}")]
    ReferenceTooLong { length: usize, max: usize },

    /// Root disk size outside the allowed range
    #[error("root disk size {value} is out of range, must be between {min} and {max} GB")]
    RootDiskSizeOutOfRange { value: i64, min: i64, max: i64 },

    /// Amount or duration that cannot be negative
    #[error("{field} cannot be negative, got {value}")]
    NegativeValue { field: &'static str, value: i64 },

    /// Not an OpenSSH public key
    #[error("invalid ssh key: {0}")]
    InvalidSshKey(String),
}

/// A combination of valid fields violates a business rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    /// MONTHLY contracts need a commitment
    #[error("contract.term cannot be 0 when contract.type is {contract_type}")]
    ContractTermCannotBeZero { contract_type: ContractType },

    /// HOURLY contracts cannot carry a commitment
    #[error("contract.term must be 0 when contract.type is {contract_type}, got {term}")]
    ContractTermMustBeZero {
        contract_type: ContractType,
        term: ContractTerm,
    },

    /// Supplied nested entity is not the one the record links to
    #[error("linked {entity} is {expected} but {actual} was supplied")]
    LinkedEntityMismatch {
        entity: &'static str,
        expected: Uuid,
        actual: Uuid,
    },

    /// Nested entity supplied for a record that links none
    #[error("{entity} {id} was supplied but the record does not link one")]
    UnexpectedLinkedEntity { entity: &'static str, id: Uuid },
}

/// Parse an opaque identifier into a uuid
pub fn parse_uuid(raw: &str) -> ValidationResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ValidationError::InvalidUuid(raw.to_string()))
}

/// Validate the contract term / type pairing
///
/// # Rules
/// - HOURLY → term must be 0
/// - MONTHLY → term cannot be 0
pub fn validate_contract_term(
    contract_type: ContractType,
    term: ContractTerm,
) -> Result<(), InvariantError> {
    match contract_type {
        ContractType::Hourly if !term.is_zero() => {
            Err(InvariantError::ContractTermMustBeZero {
                contract_type,
                term,
            })
        }
        ContractType::Monthly if term.is_zero() => {
            Err(InvariantError::ContractTermCannotBeZero { contract_type })
        }
        _ => Ok(()),
    }
}

/// Validate a value that cannot be negative and narrow it
pub fn validate_non_negative(field: &'static str, value: i64) -> ValidationResult<u32> {
    u32::try_from(value).map_err(|_| ValidationError::NegativeValue { field, value })
}

/// Validate that a linked entity matches the id the record points to
pub fn validate_linked_id(
    entity: &'static str,
    linked: Option<Uuid>,
    supplied: Option<Uuid>,
) -> Result<(), InvariantError> {
    match (linked, supplied) {
        (Some(expected), Some(actual)) if expected != actual => {
            Err(InvariantError::LinkedEntityMismatch {
                entity,
                expected,
                actual,
            })
        }
        (None, Some(id)) => Err(InvariantError::UnexpectedLinkedEntity { entity, id }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ContractType::Hourly, ContractTerm::Zero, true)]
    #[test_case(ContractType::Hourly, ContractTerm::One, false)]
    #[test_case(ContractType::Hourly, ContractTerm::Twelve, false)]
    #[test_case(ContractType::Monthly, ContractTerm::Zero, false)]
    #[test_case(ContractType::Monthly, ContractTerm::Three, true)]
    fn test_validate_contract_term(contract_type: ContractType, term: ContractTerm, valid: bool) {
        assert_eq!(validate_contract_term(contract_type, term).is_ok(), valid);
    }

    #[test]
    fn test_monthly_zero_term_message() {
        let err = validate_contract_term(ContractType::Monthly, ContractTerm::Zero).unwrap_err();
        assert!(err.to_string().contains("contract.term cannot be 0"));
    }

    #[test]
    fn test_parse_uuid() {
        let id = parse_uuid("5d7f8262-d77f-4476-8da8-6a84f8f2ae8d").unwrap();
        assert_eq!(id.to_string(), "5d7f8262-d77f-4476-8da8-6a84f8f2ae8d");

        let err = parse_uuid("invalid").unwrap_err();
        assert!(err.to_string().starts_with("cannot convert string to uuid"));
        assert!(err.to_string().contains("invalid"));
    }

    #[test]
    fn test_validate_non_negative() {
        assert_eq!(validate_non_negative("cpuThreshold", 0).unwrap(), 0);
        assert_eq!(validate_non_negative("cpuThreshold", 80).unwrap(), 80);
        assert!(matches!(
            validate_non_negative("cpuThreshold", -1),
            Err(ValidationError::NegativeValue { field: "cpuThreshold", value: -1 })
        ));
    }

    #[test]
    fn test_validate_linked_id() {
        let a = Uuid::now_v7();
        let b = Uuid::now_v7();

        assert!(validate_linked_id("loadBalancer", Some(a), Some(a)).is_ok());
        assert!(validate_linked_id("loadBalancer", Some(a), None).is_ok());
        assert!(validate_linked_id("loadBalancer", None, None).is_ok());
        assert!(matches!(
            validate_linked_id("loadBalancer", Some(a), Some(b)),
            Err(InvariantError::LinkedEntityMismatch { .. })
        ));
        assert!(matches!(
            validate_linked_id("loadBalancer", None, Some(b)),
            Err(InvariantError::UnexpectedLinkedEntity { .. })
        ));
    }
}
