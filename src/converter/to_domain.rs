// Copyright (c) 2025 - Cowboy AI, Inc.
//! Raw record → domain entity

use crate::domain::invariants::{parse_uuid, validate_linked_id, validate_non_negative};
use crate::domain::{
    AutoScalingGroup, AutoScalingGroupType, Balance, Contract, ContractBillingFrequency,
    ContractState, ContractTerm, ContractType, Ddos, HealthCheck, HttpMethod, Image, ImageId,
    Instance, InstanceState, IntEnum, Ip, Iso, Linked, LoadBalancer, LoadBalancerConfiguration,
    NetworkType, PrivateNetwork, Reference, Resources, RootDiskSize, RootDiskStorageType,
    StickySession, StringEnum,
};
use crate::wire::{
    RawAutoScalingGroup, RawContract, RawImage, RawInstance, RawIp, RawLink, RawLoadBalancer,
    RawLoadBalancerConfiguration, RawPrivateNetwork, RawResources,
};

use super::{AtField, ConversionResult};

/// Convert an instance
///
/// `auto_scaling_group` is the already converted group the record links to.
/// Without it the link stays [`Linked::Unresolved`]; supplying a group for a
/// record that links none, or a different one, is an invariant error.
pub fn convert_instance(
    raw: &RawInstance,
    auto_scaling_group: Option<AutoScalingGroup>,
) -> ConversionResult<Instance> {
    let id = parse_uuid(&raw.id).at("id")?;
    let image = convert_image(&raw.image).map_err(|e| e.nested("image"))?;
    let state = InstanceState::parse(&raw.state).at("state")?;
    let root_disk_size = RootDiskSize::new(raw.root_disk_size).at("rootDiskSize")?;
    let root_disk_storage_type =
        RootDiskStorageType::parse(&raw.root_disk_storage_type).at("rootDiskStorageType")?;
    let contract = convert_contract(&raw.contract).map_err(|e| e.nested("contract"))?;
    let ips = convert_ips(&raw.ips)?;
    let reference = convert_reference(raw.reference.as_deref())?;
    let linked_id = convert_link(raw.auto_scaling_group.as_ref())
        .map_err(|e| e.nested("autoScalingGroup"))?;

    validate_linked_id(
        "autoScalingGroup",
        linked_id,
        auto_scaling_group.as_ref().map(|group| group.id),
    )
    .at("autoScalingGroup")?;

    Ok(Instance {
        id,
        region: raw.region.clone(),
        instance_type: raw.instance_type.clone(),
        resources: convert_resources(&raw.resources),
        image,
        state,
        product_type: raw.product_type.clone(),
        has_public_ipv4: raw.has_public_ipv4,
        has_private_network: raw.has_private_network,
        root_disk_size,
        root_disk_storage_type,
        contract,
        ips,
        reference,
        market_app_id: raw.market_app_id.clone(),
        started_at: raw.started_at,
        iso: raw.iso.as_ref().map(|iso| Iso {
            id: iso.id.clone(),
            name: iso.name.clone(),
        }),
        private_network: raw.private_network.as_ref().map(convert_private_network),
        auto_scaling_group: link(linked_id, auto_scaling_group),
    })
}

/// Convert an auto-scaling group
///
/// `load_balancer` follows the same rules as the group of
/// [`convert_instance`].
pub fn convert_auto_scaling_group(
    raw: &RawAutoScalingGroup,
    load_balancer: Option<LoadBalancer>,
) -> ConversionResult<AutoScalingGroup> {
    let id = parse_uuid(&raw.id).at("id")?;
    let group_type = AutoScalingGroupType::parse(&raw.group_type).at("type")?;
    let state = InstanceState::parse(&raw.state).at("state")?;
    let reference = Reference::new(raw.reference.as_str()).at("reference")?;
    let desired_amount = non_negative("desiredAmount", raw.desired_amount)?;
    let minimum_amount = non_negative("minimumAmount", raw.minimum_amount)?;
    let maximum_amount = non_negative("maximumAmount", raw.maximum_amount)?;
    let cpu_threshold = non_negative("cpuThreshold", raw.cpu_threshold)?;
    let warmup_time = non_negative("warmupTime", raw.warmup_time)?;
    let cooldown_time = non_negative("cooldownTime", raw.cooldown_time)?;
    let linked_id =
        convert_link(raw.load_balancer.as_ref()).map_err(|e| e.nested("loadBalancer"))?;

    validate_linked_id(
        "loadBalancer",
        linked_id,
        load_balancer.as_ref().map(|load_balancer| load_balancer.id),
    )
    .at("loadBalancer")?;

    Ok(AutoScalingGroup {
        id,
        group_type,
        state,
        region: raw.region.clone(),
        reference,
        desired_amount,
        minimum_amount,
        maximum_amount,
        cpu_threshold,
        warmup_time,
        cooldown_time,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
        starts_at: raw.starts_at,
        ends_at: raw.ends_at,
        load_balancer: link(linked_id, load_balancer),
    })
}

/// Convert a load balancer
pub fn convert_load_balancer(raw: &RawLoadBalancer) -> ConversionResult<LoadBalancer> {
    let id = parse_uuid(&raw.id).at("id")?;
    let state = InstanceState::parse(&raw.state).at("state")?;
    let contract = convert_contract(&raw.contract).map_err(|e| e.nested("contract"))?;
    let ips = convert_ips(&raw.ips)?;
    let reference = convert_reference(raw.reference.as_deref())?;
    let configuration = raw
        .load_balancer_configuration
        .as_ref()
        .map(convert_configuration)
        .transpose()
        .map_err(|e| e.nested("loadBalancerConfiguration"))?;

    Ok(LoadBalancer {
        id,
        load_balancer_type: raw.load_balancer_type.clone(),
        resources: convert_resources(&raw.resources),
        region: raw.region.clone(),
        reference,
        state,
        contract,
        started_at: raw.started_at,
        ips,
        configuration,
        private_network: raw.private_network.as_ref().map(convert_private_network),
    })
}

/// Convert a contract, enforcing the term / type pairing
pub fn convert_contract(raw: &RawContract) -> ConversionResult<Contract> {
    let billing_frequency =
        ContractBillingFrequency::parse(raw.billing_frequency).at("billingFrequency")?;
    let term = ContractTerm::parse(raw.term).at("term")?;
    let contract_type = ContractType::parse(&raw.contract_type).at("type")?;
    let state = ContractState::parse(&raw.state).at("state")?;

    Contract::new(
        billing_frequency,
        term,
        contract_type,
        state,
        raw.created_at,
        raw.renewals_at,
        raw.ends_at,
    )
    .at("term")
}

pub fn convert_ip(raw: &RawIp) -> ConversionResult<Ip> {
    let network_type = NetworkType::parse(&raw.network_type).at("networkType")?;

    Ok(Ip {
        ip: raw.ip.clone(),
        prefix_length: raw.prefix_length.clone(),
        version: raw.version,
        null_routed: raw.null_routed,
        main_ip: raw.main_ip,
        network_type,
        reverse_lookup: raw.reverse_lookup.clone(),
        ddos: raw.ddos.as_ref().map(|ddos| Ddos {
            detection_profile: ddos.detection_profile.clone(),
            protection_type: ddos.protection_type.clone(),
        }),
    })
}

pub fn convert_image(raw: &RawImage) -> ConversionResult<Image> {
    let id = ImageId::parse(&raw.id).at("id")?;

    Ok(Image {
        id,
        name: raw.name.clone(),
        version: raw.version.clone(),
        family: raw.family.clone(),
        flavour: raw.flavour.clone(),
        architecture: raw.architecture.clone(),
        market_apps: raw.market_apps.clone(),
        storage_types: raw.storage_types.clone(),
        region: raw.region.clone(),
        storage_size: raw.storage_size,
    })
}

fn convert_configuration(
    raw: &RawLoadBalancerConfiguration,
) -> ConversionResult<LoadBalancerConfiguration> {
    let balance = Balance::parse(&raw.balance).at("balance")?;
    let health_check = match &raw.health_check {
        Some(check) => Some(HealthCheck {
            method: HttpMethod::parse(&check.method).at("healthCheck.method")?,
            uri: check.uri.clone(),
            host: check.host.clone(),
            port: check.port,
        }),
        None => None,
    };

    Ok(LoadBalancerConfiguration {
        balance,
        sticky_session: raw.sticky_session.as_ref().map(|session| StickySession {
            enabled: session.enabled,
            max_life_time: session.max_life_time,
        }),
        health_check,
        x_forwarded_for: raw.x_forwarded_for,
        idle_time_out: raw.idle_time_out,
        target_port: raw.target_port,
    })
}

fn convert_ips(raw: &[RawIp]) -> ConversionResult<Vec<Ip>> {
    raw.iter()
        .enumerate()
        .map(|(index, ip)| convert_ip(ip).map_err(|e| e.nested(&format!("ips[{}]", index))))
        .collect()
}

fn convert_reference(raw: Option<&str>) -> ConversionResult<Option<Reference>> {
    raw.map(Reference::new).transpose().at("reference")
}

fn convert_link(raw: Option<&RawLink>) -> ConversionResult<Option<uuid::Uuid>> {
    raw.map(|link| parse_uuid(&link.id)).transpose().at("id")
}

fn convert_resources(raw: &RawResources) -> Resources {
    Resources {
        cpu: raw.cpu.clone(),
        memory: raw.memory.clone(),
        public_network_speed: raw.public_network_speed.clone(),
        private_network_speed: raw.private_network_speed.clone(),
    }
}

fn convert_private_network(raw: &RawPrivateNetwork) -> PrivateNetwork {
    PrivateNetwork {
        id: raw.private_network_id.clone(),
        status: raw.status.clone(),
        subnet: raw.subnet.clone(),
    }
}

fn non_negative(field: &'static str, raw: Option<i64>) -> ConversionResult<Option<u32>> {
    raw.map(|value| validate_non_negative(field, value))
        .transpose()
        .at(field)
}

/// Resolved entity wins over the bare id; ids were checked to match
fn link<T>(linked_id: Option<uuid::Uuid>, entity: Option<T>) -> Option<Linked<T>> {
    match (linked_id, entity) {
        (_, Some(entity)) => Some(Linked::from(entity)),
        (Some(id), None) => Some(Linked::Unresolved(id)),
        (None, None) => None,
    }
}
