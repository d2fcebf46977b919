// Copyright (c) 2025 - Cowboy AI, Inc.
//! Load balancer enums

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EnumFamily, StringEnum};

/// Balancing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Balance {
    #[serde(rename = "ROUNDROBIN")]
    RoundRobin,
    #[serde(rename = "LEASTCONN")]
    LeastConnections,
    #[serde(rename = "SOURCE")]
    Source,
}

impl EnumFamily for Balance {
    const FAMILY: &'static str = "balance";

    fn values() -> &'static [Self] {
        &[Self::RoundRobin, Self::LeastConnections, Self::Source]
    }
}

impl StringEnum for Balance {
    fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "ROUNDROBIN",
            Self::LeastConnections => "LEASTCONN",
            Self::Source => "SOURCE",
        }
    }
}

/// Health check request method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpMethod {
    Get,
    Head,
}

impl EnumFamily for HttpMethod {
    const FAMILY: &'static str = "method";

    fn values() -> &'static [Self] {
        &[Self::Get, Self::Head]
    }
}

impl StringEnum for HttpMethod {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
