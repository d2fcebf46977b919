// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Public Cloud Management
//!
//! This module provides the application service layer that sits between the
//! provider-facing handler and the repository.
//!
//! # Architecture
//!
//! ```text
//! Handler (provider resources / data sources)
//!     ↓
//! Service Layer (this module)
//!     ↓
//! Repository → PublicCloudApi (transport)
//!     ↓
//! Converter → Enum Registry
//! ```
//!
//! # Service Pattern
//!
//! Services coordinate between:
//! - **Repository**: single-record reads and writes, pagination
//! - **Aggregation**: concurrent resolution of nested entities
//! - **Validation**: instance type availability before launch / update
//!
//! # Example
//!
//! ```rust,ignore
//! use public_cloud_core::service::{AggregatingService, PublicCloudService};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = AggregatingService::new(repository);
//!     let ctx = CancellationToken::new();
//!
//!     let instances = service.get_all_instances(&ctx).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod public_cloud;

pub use public_cloud::{AggregatingService, PublicCloudService, ServiceError, ServiceResult};
