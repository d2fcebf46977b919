// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Root Disk Size Bounds

use proptest::prelude::*;

use public_cloud_core::domain::{RootDiskSize, ValidationError};

proptest! {
    /// Property: exactly the inclusive range 5..=1000 is accepted
    #[test]
    fn prop_root_disk_size_bounds(value in prop_oneof![-100i64..1200, any::<i64>()]) {
        let result = RootDiskSize::new(value);

        if (RootDiskSize::MIN..=RootDiskSize::MAX).contains(&value) {
            prop_assert_eq!(result.unwrap().value(), value);
        } else {
            let is_out_of_range = matches!(
                result,
                Err(ValidationError::RootDiskSizeOutOfRange { value: rejected, .. }) if rejected == value
            );
            prop_assert!(is_out_of_range);
        }
    }

    /// Property: serde applies the same bounds as the constructor
    #[test]
    fn prop_root_disk_size_deserialize_matches_new(value in -100i64..1200) {
        let decoded = serde_json::from_str::<RootDiskSize>(&value.to_string());

        prop_assert_eq!(decoded.is_ok(), RootDiskSize::new(value).is_ok());
    }
}
