// Copyright (c) 2025 - Cowboy AI, Inc.
//! Links to nested entities
//!
//! A record read from the API only knows the id of a nested entity. The
//! repository hands out [`Linked::Unresolved`] links; the aggregation service
//! replaces them with [`Linked::Resolved`] entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entity that exposes its identifier
pub trait Identified {
    fn id(&self) -> Uuid;
}

/// Reference to a nested entity, either by id or fully loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Linked<T> {
    Unresolved(Uuid),
    Resolved(Box<T>),
}

impl<T: Identified> Linked<T> {
    /// Id of the linked entity, whether or not it is loaded
    pub fn id(&self) -> Uuid {
        match self {
            Self::Unresolved(id) => *id,
            Self::Resolved(entity) => entity.id(),
        }
    }
}

impl<T> Linked<T> {
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Unresolved(_) => None,
            Self::Resolved(entity) => Some(entity),
        }
    }

    pub fn into_resolved(self) -> Option<T> {
        match self {
            Self::Unresolved(_) => None,
            Self::Resolved(entity) => Some(*entity),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl<T> From<T> for Linked<T> {
    fn from(entity: T) -> Self {
        Self::Resolved(Box::new(entity))
    }
}
