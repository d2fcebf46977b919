// Copyright (c) 2025 - Cowboy AI, Inc.
//! Value Objects with Validation Invariants
//!
//! - [`RootDiskSize`] - root disk size in GB (5-1000)
//! - [`Reference`] - free-form label, at most 255 characters
//! - [`SshKey`] - OpenSSH public key line
//! - [`Resources`] - cpu / memory / network speed profile

use serde::{Deserialize, Serialize};
use std::fmt;

use super::invariants::{ValidationError, ValidationResult};

/// Root disk size in GB
///
/// # Examples
///
/// ```rust
/// use public_cloud_core::domain::RootDiskSize;
///
/// assert_eq!(RootDiskSize::new(50).unwrap().value(), 50);
/// assert!(RootDiskSize::new(4).is_err());
/// assert!(RootDiskSize::new(1001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RootDiskSize(u32);

impl RootDiskSize {
    /// Smallest root disk the provider accepts
    pub const MIN: i64 = 5;

    /// Largest root disk the provider accepts
    pub const MAX: i64 = 1000;

    /// Create a root disk size, bounds inclusive
    pub fn new(value: i64) -> ValidationResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::RootDiskSizeOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }

        // bounds check above keeps this lossless
        Ok(Self(value as u32))
    }

    pub fn value(&self) -> i64 {
        i64::from(self.0)
    }
}

impl TryFrom<i64> for RootDiskSize {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RootDiskSize> for i64 {
    fn from(size: RootDiskSize) -> Self {
        size.value()
    }
}

impl fmt::Display for RootDiskSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} GB", self.0)
    }
}

/// Free-form label attached to a resource
///
/// An empty reference is valid and distinct from no reference at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reference(String);

impl Reference {
    /// Maximum length the provider stores
    pub const MAX_LENGTH: usize = 255;

    pub fn new(reference: impl Into<String>) -> ValidationResult<Self> {
        let reference = reference.into();
        let length = reference.chars().count();

        if length > Self::MAX_LENGTH {
            return Err(ValidationError::ReferenceTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Reference {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// OpenSSH public key (`<algorithm> <base64 blob> [comment]`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SshKey(String);

impl SshKey {
    /// Key algorithms the provider installs
    pub const ALGORITHMS: &'static [&'static str] = &[
        "ssh-rsa",
        "ssh-ed25519",
        "ssh-dss",
        "ecdsa-sha2-nistp256",
        "ecdsa-sha2-nistp384",
        "ecdsa-sha2-nistp521",
    ];

    pub fn new(key: impl Into<String>) -> ValidationResult<Self> {
        let key = key.into();
        let trimmed = key.trim();
        let mut parts = trimmed.split_whitespace();

        let algorithm = parts.next().unwrap_or_default();
        if !Self::ALGORITHMS.contains(&algorithm) {
            return Err(ValidationError::InvalidSshKey(format!(
                "unsupported algorithm \"{}\"",
                algorithm
            )));
        }

        let blob = parts.next().unwrap_or_default();
        let is_base64 = blob
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=');
        if blob.is_empty() || !is_base64 {
            return Err(ValidationError::InvalidSshKey(
                "key material is not base64".to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SshKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SshKey> for String {
    fn from(key: SshKey) -> Self {
        key.0
    }
}

/// CPU allocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cpu {
    pub value: i64,
    pub unit: String,
}

/// Memory allocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub value: f64,
    pub unit: String,
}

/// Network throughput
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpeed {
    pub value: i64,
    pub unit: String,
}

/// Resource profile of an instance type or load balancer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub cpu: Cpu,
    pub memory: Memory,
    pub public_network_speed: NetworkSpeed,
    pub private_network_speed: NetworkSpeed,
}

/// Mounted ISO image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iso {
    pub id: String,
    pub name: String,
}

/// Private network attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateNetwork {
    pub id: String,
    pub status: String,
    pub subnet: String,
}
