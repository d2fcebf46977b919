// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain entity → request body

use crate::domain::{Instance, IntEnum, NewInstance, Reference, StringEnum};
use crate::wire::{LaunchInstanceOpts, UpdateInstanceOpts};

/// Launch request for a new instance
pub fn to_launch_instance_opts(instance: &NewInstance) -> LaunchInstanceOpts {
    LaunchInstanceOpts {
        region: instance.region.clone(),
        instance_type: instance.instance_type.clone(),
        image_id: instance.image_id.as_str().to_string(),
        contract_type: instance.contract.contract_type.as_str().to_string(),
        contract_term: instance.contract.term.value(),
        billing_frequency: instance.contract.billing_frequency.value(),
        root_disk_storage_type: instance.root_disk_storage_type.as_str().to_string(),
        root_disk_size: instance.root_disk_size.map(|size| size.value()),
        market_app_id: instance.market_app_id.clone(),
        reference: instance.reference.as_ref().map(|r| r.as_str().to_string()),
        ssh_key: instance.ssh_key.as_ref().map(|key| key.as_str().to_string()),
    }
}

/// Update request carrying every settable field of an instance
///
/// Type, reference, contract and root disk size are sent; everything else
/// is read-only on the provider side.
pub fn to_update_instance_opts(instance: &Instance) -> UpdateInstanceOpts {
    UpdateInstanceOpts {
        instance_type: Some(instance.instance_type.clone()),
        reference: instance.reference.as_ref().map(Reference::to_string),
        contract_type: Some(instance.contract.contract_type.as_str().to_string()),
        contract_term: Some(instance.contract.term.value()),
        billing_frequency: Some(instance.contract.billing_frequency.value()),
        root_disk_size: Some(instance.root_disk_size.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ContractBillingFrequency, ContractTerm, ContractType, ImageId, RootDiskSize,
        RootDiskStorageType, SshKey,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_launch_opts() {
        let instance = NewInstance::builder(
            "eu-west-3",
            "lsw.m3.large",
            ImageId::Ubuntu2404,
            RootDiskStorageType::Central,
        )
        .contract(
            ContractType::Monthly,
            ContractTerm::Six,
            ContractBillingFrequency::Three,
        )
        .root_disk_size(RootDiskSize::new(50).unwrap())
        .ssh_key(SshKey::new("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5 me@host").unwrap())
        .build()
        .unwrap();

        let opts = to_launch_instance_opts(&instance);

        assert_eq!(opts.image_id, "UBUNTU_24_04_64BIT");
        assert_eq!(opts.contract_type, "MONTHLY");
        assert_eq!(opts.contract_term, 6);
        assert_eq!(opts.billing_frequency, 3);
        assert_eq!(opts.root_disk_storage_type, "CENTRAL");
        assert_eq!(opts.root_disk_size, Some(50));
        assert_eq!(opts.reference, None);
        assert_eq!(
            opts.ssh_key.as_deref(),
            Some("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5 me@host")
        );
    }
}
