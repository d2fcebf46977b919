// Copyright (c) 2025 - Cowboy AI, Inc.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EnumFamily, StringEnum};

/// Network an IP address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetworkType {
    Internal,
    Public,
}

impl EnumFamily for NetworkType {
    const FAMILY: &'static str = "networkType";

    fn values() -> &'static [Self] {
        &[Self::Internal, Self::Public]
    }
}

impl StringEnum for NetworkType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "INTERNAL",
            Self::Public => "PUBLIC",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
