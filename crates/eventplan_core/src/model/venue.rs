//! Venue domain model.
//!
//! # Responsibility
//! - Define the reusable physical-location record referenced by events.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another venue.
//! - A venue is immutable after construction; there are no mutators.
//! - The facilities list is copied at construction and never aliases
//!   caller-owned storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a venue owned by the planning registry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type VenueId = Uuid;

/// Immutable physical-location record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    uuid: VenueId,
    name: String,
    capacity: u32,
    facilities: Vec<String>,
}

impl Venue {
    /// Creates a new venue with a generated stable ID.
    ///
    /// The facilities slice is copied into venue-owned storage, so later
    /// mutation of the caller's buffer cannot reach this record.
    pub fn new(name: impl Into<String>, capacity: u32, facilities: &[String]) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            capacity,
            facilities: facilities.to_vec(),
        }
    }

    pub fn uuid(&self) -> VenueId {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn facilities(&self) -> &[String] {
        &self.facilities
    }

    /// Returns the venue fields structured for display.
    pub fn describe(&self) -> VenueDetails {
        VenueDetails {
            name: self.name.clone(),
            capacity: self.capacity,
            facilities: self.facilities.clone(),
        }
    }
}

/// Display projection of one venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueDetails {
    pub name: String,
    pub capacity: u32,
    pub facilities: Vec<String>,
}
