// Copyright (c) 2025 - Cowboy AI, Inc.
//! Region and instance type catalogs

use serde::{Deserialize, Serialize};

/// Names of regions the account can launch in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Regions(Vec<String>);

/// Names of instance types available in some scope (region or upgrade path)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceTypes(Vec<String>);

impl Regions {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn contains(&self, region: &str) -> bool {
        self.0.iter().any(|name| name == region)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl InstanceTypes {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn contains(&self, instance_type: &str) -> bool {
        self.0.iter().any(|name| name == instance_type)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for Regions {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<String> for InstanceTypes {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_exact() {
        let types: InstanceTypes = ["lsw.m3.large", "lsw.m4.xlarge"]
            .into_iter()
            .map(String::from)
            .collect();

        assert!(types.contains("lsw.m3.large"));
        assert!(!types.contains("lsw.m3"));
        assert!(!types.contains("LSW.M3.LARGE"));
        assert_eq!(types.len(), 2);
        assert!(Regions::default().is_empty());
    }
}
