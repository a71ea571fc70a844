//! Aggregate-root seedwork: identity assignment and creation stamping.
//!
//! Entities embed [`AggregateRoot`] as a composed value instead of inheriting
//! from a base type. Identifier generation and clock access go through the
//! [`IdProvider`] and [`Clock`] traits so that construction stays
//! deterministic under test.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and creation metadata shared by aggregate roots.
///
/// Both fields are assigned once at construction and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRoot<Id> {
    id: Id,
    created_at: DateTime<Utc>,
}

impl<Id: Copy> AggregateRoot<Id> {
    /// Binds an identifier to its creation instant.
    pub fn new(id: Id, created_at: DateTime<Utc>) -> Self {
        Self { id, created_at }
    }

    /// Returns the identifier assigned at creation.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the UTC instant the aggregate was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Supplies identifiers for newly created aggregates.
pub trait IdProvider {
    /// Returns the next globally unique identifier.
    fn next_id(&self) -> Uuid;
}

/// Supplies the current moment in time.
pub trait Clock {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// Identifier source backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdProvider;

impl IdProvider for RandomIdProvider {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Clock reading the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
