// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Contract Invariant
//!
//! HOURLY contracts carry term 0, MONTHLY contracts carry a non-zero term.
//! Raw integers outside the declared families never convert.

use chrono::{DateTime, Utc};
use proptest::prelude::*;

use public_cloud_core::converter::to_domain::convert_contract;
use public_cloud_core::domain::{
    ContractBillingFrequency, ContractTerm, ContractTerms, ContractType, EnumFamily, IntEnum,
    StringEnum,
};
use public_cloud_core::wire::RawContract;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn contract_type() -> impl Strategy<Value = ContractType> {
    prop::sample::select(ContractType::values())
}

fn contract_term() -> impl Strategy<Value = ContractTerm> {
    prop::sample::select(ContractTerm::values())
}

fn billing_frequency() -> impl Strategy<Value = ContractBillingFrequency> {
    prop::sample::select(ContractBillingFrequency::values())
}

/// Raw integers biased towards the declared members
fn raw_integer() -> impl Strategy<Value = i64> {
    prop_oneof![
        prop::sample::select(vec![0i64, 1, 3, 6, 12]),
        -20i64..50,
        any::<i64>(),
    ]
}

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

fn raw_contract(contract_type: ContractType, term: i64, billing_frequency: i64) -> RawContract {
    RawContract {
        billing_frequency,
        term,
        contract_type: contract_type.as_str().to_string(),
        ends_at: None,
        renewals_at: epoch(),
        created_at: epoch(),
        state: "ACTIVE".to_string(),
    }
}

fn pairing_holds(contract_type: ContractType, term: ContractTerm) -> bool {
    match contract_type {
        ContractType::Hourly => term == ContractTerm::Zero,
        ContractType::Monthly => term != ContractTerm::Zero,
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: ContractTerms exist exactly for valid pairings
    #[test]
    fn prop_terms_accept_only_valid_pairings(
        contract_type in contract_type(),
        term in contract_term(),
        billing_frequency in billing_frequency(),
    ) {
        let result = ContractTerms::new(billing_frequency, term, contract_type);

        prop_assert_eq!(result.is_ok(), pairing_holds(contract_type, term));
    }

    /// Property: a raw term converts iff it is a member and pairs with the type
    #[test]
    fn prop_raw_term_converts_iff_valid(
        contract_type in contract_type(),
        term in raw_integer(),
    ) {
        let result = convert_contract(&raw_contract(contract_type, term, 1));
        let expected = ContractTerm::wire_values().contains(&term)
            && pairing_holds(contract_type, <ContractTerm as IntEnum>::parse(term).unwrap());

        prop_assert_eq!(result.is_ok(), expected);
        if let Err(err) = result {
            prop_assert_eq!(err.field(), "term");
        }
    }

    /// Property: billing frequency is independent of the pairing
    #[test]
    fn prop_billing_frequency_converts_iff_member(billing_frequency in raw_integer()) {
        let result = convert_contract(&raw_contract(ContractType::Hourly, 0, billing_frequency));

        prop_assert_eq!(
            result.is_ok(),
            ContractBillingFrequency::wire_values().contains(&billing_frequency)
        );
    }

    /// Property: converted values keep their wire integer
    #[test]
    fn prop_converted_contract_keeps_wire_values(
        term in contract_term(),
        billing_frequency in billing_frequency(),
    ) {
        let contract_type = if term == ContractTerm::Zero {
            ContractType::Hourly
        } else {
            ContractType::Monthly
        };

        let contract = convert_contract(&raw_contract(
            contract_type,
            term.value(),
            billing_frequency.value(),
        ))
        .unwrap();

        prop_assert_eq!(contract.term, term);
        prop_assert_eq!(contract.billing_frequency, billing_frequency);
        prop_assert_eq!(contract.is_hourly(), term == ContractTerm::Zero);
    }
}
