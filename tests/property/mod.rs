// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Validation invariants of the domain model and the request count of
//! offset pagination.

mod contract_invariant;
mod pagination;
mod root_disk_size;
