// Copyright (c) 2025 - Cowboy AI, Inc.
//! Instance enums: lifecycle state, root disk storage and OS images

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EnumFamily, StringEnum};

/// Lifecycle state shared by instances, auto-scaling groups and load balancers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceState {
    Creating,
    Destroyed,
    Destroying,
    Failed,
    Running,
    Starting,
    Stopped,
    Stopping,
    Unknown,
}

impl InstanceState {
    /// Whether the resource is gone or going away
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Destroying | Self::Destroyed)
    }
}

impl EnumFamily for InstanceState {
    const FAMILY: &'static str = "state";

    fn values() -> &'static [Self] {
        &[
            Self::Creating,
            Self::Destroyed,
            Self::Destroying,
            Self::Failed,
            Self::Running,
            Self::Starting,
            Self::Stopped,
            Self::Stopping,
            Self::Unknown,
        ]
    }
}

impl StringEnum for InstanceState {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Creating => "CREATING",
            Self::Destroyed => "DESTROYED",
            Self::Destroying => "DESTROYING",
            Self::Failed => "FAILED",
            Self::Running => "RUNNING",
            Self::Starting => "STARTING",
            Self::Stopped => "STOPPED",
            Self::Stopping => "STOPPING",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Where the root disk lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RootDiskStorageType {
    Local,
    Central,
}

impl EnumFamily for RootDiskStorageType {
    const FAMILY: &'static str = "rootDiskStorageType";

    fn values() -> &'static [Self] {
        &[Self::Local, Self::Central]
    }
}

impl StringEnum for RootDiskStorageType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Central => "CENTRAL",
        }
    }
}

/// Operating system image identifiers (all 64 bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageId {
    #[serde(rename = "ALMALINUX_8_64BIT")]
    AlmaLinux8,
    #[serde(rename = "ALMALINUX_9_64BIT")]
    AlmaLinux9,
    #[serde(rename = "CENTOS_7_64BIT")]
    CentOs7,
    #[serde(rename = "DEBIAN_10_64BIT")]
    Debian10,
    #[serde(rename = "DEBIAN_11_64BIT")]
    Debian11,
    #[serde(rename = "DEBIAN_12_64BIT")]
    Debian12,
    #[serde(rename = "FREEBSD_13_64BIT")]
    FreeBsd13,
    #[serde(rename = "FREEBSD_14_64BIT")]
    FreeBsd14,
    #[serde(rename = "ROCKY_LINUX_8_64BIT")]
    RockyLinux8,
    #[serde(rename = "ROCKY_LINUX_9_64BIT")]
    RockyLinux9,
    #[serde(rename = "UBUNTU_20_04_64BIT")]
    Ubuntu2004,
    #[serde(rename = "UBUNTU_22_04_64BIT")]
    Ubuntu2204,
    #[serde(rename = "UBUNTU_24_04_64BIT")]
    Ubuntu2404,
    #[serde(rename = "WINDOWS_SERVER_2019_STANDARD_64BIT")]
    WindowsServer2019Standard,
    #[serde(rename = "WINDOWS_SERVER_2022_STANDARD_64BIT")]
    WindowsServer2022Standard,
}

impl ImageId {
    pub fn is_windows(&self) -> bool {
        matches!(
            self,
            Self::WindowsServer2019Standard | Self::WindowsServer2022Standard
        )
    }
}

impl EnumFamily for ImageId {
    const FAMILY: &'static str = "imageId";

    fn values() -> &'static [Self] {
        &[
            Self::AlmaLinux8,
            Self::AlmaLinux9,
            Self::CentOs7,
            Self::Debian10,
            Self::Debian11,
            Self::Debian12,
            Self::FreeBsd13,
            Self::FreeBsd14,
            Self::RockyLinux8,
            Self::RockyLinux9,
            Self::Ubuntu2004,
            Self::Ubuntu2204,
            Self::Ubuntu2404,
            Self::WindowsServer2019Standard,
            Self::WindowsServer2022Standard,
        ]
    }
}

impl StringEnum for ImageId {
    fn as_str(&self) -> &'static str {
        match self {
            Self::AlmaLinux8 => "ALMALINUX_8_64BIT",
            Self::AlmaLinux9 => "ALMALINUX_9_64BIT",
            Self::CentOs7 => "CENTOS_7_64BIT",
            Self::Debian10 => "DEBIAN_10_64BIT",
            Self::Debian11 => "DEBIAN_11_64BIT",
            Self::Debian12 => "DEBIAN_12_64BIT",
            Self::FreeBsd13 => "FREEBSD_13_64BIT",
            Self::FreeBsd14 => "FREEBSD_14_64BIT",
            Self::RockyLinux8 => "ROCKY_LINUX_8_64BIT",
            Self::RockyLinux9 => "ROCKY_LINUX_9_64BIT",
            Self::Ubuntu2004 => "UBUNTU_20_04_64BIT",
            Self::Ubuntu2204 => "UBUNTU_22_04_64BIT",
            Self::Ubuntu2404 => "UBUNTU_24_04_64BIT",
            Self::WindowsServer2019Standard => "WINDOWS_SERVER_2019_STANDARD_64BIT",
            Self::WindowsServer2022Standard => "WINDOWS_SERVER_2022_STANDARD_64BIT",
        }
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RootDiskStorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
