// Copyright (c) 2025 - Cowboy AI, Inc.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EnumFamily, StringEnum};

/// How an auto-scaling group decides its size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoScalingGroupType {
    /// Fixed desired amount
    Manual,
    /// Scales between minimum and maximum on CPU threshold
    CpuBased,
}

impl EnumFamily for AutoScalingGroupType {
    const FAMILY: &'static str = "autoScalingGroupType";

    fn values() -> &'static [Self] {
        &[Self::Manual, Self::CpuBased]
    }
}

impl StringEnum for AutoScalingGroupType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "MANUAL",
            Self::CpuBased => "CPU_BASED",
        }
    }
}

impl fmt::Display for AutoScalingGroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
