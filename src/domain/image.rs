// Copyright (c) 2025 - Cowboy AI, Inc.
//! Operating system image an instance is booted from

use serde::{Deserialize, Serialize};

use super::enums::ImageId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub family: String,
    pub flavour: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(default)]
    pub market_apps: Vec<String>,
    #[serde(default)]
    pub storage_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_size: Option<i64>,
}

impl Image {
    /// Whether the image can be installed on the given root disk storage
    pub fn supports_storage_type(&self, storage_type: &str) -> bool {
        self.storage_types.iter().any(|candidate| candidate == storage_type)
    }
}
