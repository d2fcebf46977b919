// Copyright (c) 2025 - Cowboy AI, Inc.
//! Contract enums

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EnumFamily, IntEnum, StringEnum};
use crate::domain::invariants::ValidationError;

/// How often a contract is billed, in months (0 = hourly billing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum ContractBillingFrequency {
    Zero,
    One,
    Three,
    Six,
    Twelve,
}

impl EnumFamily for ContractBillingFrequency {
    const FAMILY: &'static str = "contractBillingFrequency";

    fn values() -> &'static [Self] {
        &[Self::Zero, Self::One, Self::Three, Self::Six, Self::Twelve]
    }
}

impl IntEnum for ContractBillingFrequency {
    fn value(&self) -> i64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Three => 3,
            Self::Six => 6,
            Self::Twelve => 12,
        }
    }
}

/// Contract commitment length, in months (0 = no commitment)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum ContractTerm {
    Zero,
    One,
    Three,
    Six,
    Twelve,
}

impl ContractTerm {
    pub fn is_zero(&self) -> bool {
        *self == Self::Zero
    }
}

impl EnumFamily for ContractTerm {
    const FAMILY: &'static str = "contractTerm";

    fn values() -> &'static [Self] {
        &[Self::Zero, Self::One, Self::Three, Self::Six, Self::Twelve]
    }
}

impl IntEnum for ContractTerm {
    fn value(&self) -> i64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Three => 3,
            Self::Six => 6,
            Self::Twelve => 12,
        }
    }
}

/// Contract kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Hourly,
    Monthly,
}

impl EnumFamily for ContractType {
    const FAMILY: &'static str = "contractType";

    fn values() -> &'static [Self] {
        &[Self::Hourly, Self::Monthly]
    }
}

impl StringEnum for ContractType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "HOURLY",
            Self::Monthly => "MONTHLY",
        }
    }
}

/// Contract lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractState {
    Active,
    DeleteScheduled,
}

impl EnumFamily for ContractState {
    const FAMILY: &'static str = "contractState";

    fn values() -> &'static [Self] {
        &[Self::Active, Self::DeleteScheduled]
    }
}

impl StringEnum for ContractState {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::DeleteScheduled => "DELETE_SCHEDULED",
        }
    }
}

impl From<ContractBillingFrequency> for i64 {
    fn from(frequency: ContractBillingFrequency) -> Self {
        frequency.value()
    }
}

impl TryFrom<i64> for ContractBillingFrequency {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        <Self as IntEnum>::parse(raw)
    }
}

impl From<ContractTerm> for i64 {
    fn from(term: ContractTerm) -> Self {
        term.value()
    }
}

impl TryFrom<i64> for ContractTerm {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        <Self as IntEnum>::parse(raw)
    }
}

impl fmt::Display for ContractBillingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Display for ContractTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ContractState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
