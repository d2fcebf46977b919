// Copyright (c) 2025 - Cowboy AI, Inc.
//! Contract Entity
//!
//! A contract binds a resource to a billing arrangement. Its only cross-field
//! rule is the term / type pairing, enforced at construction so an invalid
//! contract cannot exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{ContractBillingFrequency, ContractState, ContractTerm, ContractType};
use super::invariants::{validate_contract_term, InvariantError};

/// Billing contract of an instance or load balancer
///
/// # Invariants
/// - `term` is 0 if and only if `contract_type` is HOURLY
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub billing_frequency: ContractBillingFrequency,
    pub term: ContractTerm,
    pub contract_type: ContractType,
    pub state: ContractState,
    pub created_at: DateTime<Utc>,
    pub renewals_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl Contract {
    /// Create a contract, checking the term / type pairing
    pub fn new(
        billing_frequency: ContractBillingFrequency,
        term: ContractTerm,
        contract_type: ContractType,
        state: ContractState,
        created_at: DateTime<Utc>,
        renewals_at: DateTime<Utc>,
        ends_at: Option<DateTime<Utc>>,
    ) -> Result<Self, InvariantError> {
        validate_contract_term(contract_type, term)?;

        Ok(Self {
            billing_frequency,
            term,
            contract_type,
            state,
            created_at,
            renewals_at,
            ends_at,
        })
    }

    pub fn is_hourly(&self) -> bool {
        self.contract_type == ContractType::Hourly
    }
}

/// The settable part of a contract, used when launching or updating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTerms {
    pub billing_frequency: ContractBillingFrequency,
    pub term: ContractTerm,
    pub contract_type: ContractType,
}

impl ContractTerms {
    pub fn new(
        billing_frequency: ContractBillingFrequency,
        term: ContractTerm,
        contract_type: ContractType,
    ) -> Result<Self, InvariantError> {
        validate_contract_term(contract_type, term)?;

        Ok(Self {
            billing_frequency,
            term,
            contract_type,
        })
    }
}

impl From<&Contract> for ContractTerms {
    fn from(contract: &Contract) -> Self {
        Self {
            billing_frequency: contract.billing_frequency,
            term: contract.term,
            contract_type: contract.contract_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(term: ContractTerm, contract_type: ContractType) -> Result<Contract, InvariantError> {
        let now = Utc::now();
        Contract::new(
            ContractBillingFrequency::One,
            term,
            contract_type,
            ContractState::Active,
            now,
            now,
            None,
        )
    }

    #[test]
    fn test_hourly_contract_requires_zero_term() {
        assert!(contract(ContractTerm::Zero, ContractType::Hourly).unwrap().is_hourly());
        assert_eq!(
            contract(ContractTerm::Six, ContractType::Hourly).unwrap_err(),
            InvariantError::ContractTermMustBeZero {
                contract_type: ContractType::Hourly,
                term: ContractTerm::Six,
            }
        );
    }

    #[test]
    fn test_monthly_contract_requires_term() {
        assert!(contract(ContractTerm::Three, ContractType::Monthly).is_ok());
        assert!(matches!(
            contract(ContractTerm::Zero, ContractType::Monthly),
            Err(InvariantError::ContractTermCannotBeZero { .. })
        ));
    }

    #[test]
    fn test_terms_from_contract() {
        let contract = contract(ContractTerm::Twelve, ContractType::Monthly).unwrap();
        let terms = ContractTerms::from(&contract);

        assert_eq!(terms.term, ContractTerm::Twelve);
        assert_eq!(terms.contract_type, ContractType::Monthly);
        assert_eq!(terms.billing_frequency, ContractBillingFrequency::One);
    }
}
