//! Event aggregate model.
//!
//! # Responsibility
//! - Hold the state for one planned event: identity fields, the optional
//!   venue link and the owned attendee list.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another event.
//! - Name, date and time are fixed at construction.
//! - The venue link holds the stable ID of a registry-owned venue; the
//!   registry resolves it at describe time.
//! - The attendee list only grows; there is no removal operation.

use crate::model::attendee::{Attendee, AttendeeDetails};
use crate::model::venue::{Venue, VenueDetails, VenueId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an event owned by the planning registry.
pub type EventId = Uuid;

/// Aggregate state for one planned event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    uuid: EventId,
    name: String,
    date: String,
    time: String,
    venue: Option<VenueId>,
    attendees: Vec<Attendee>,
}

impl Event {
    /// Creates a new event with a generated stable ID, no venue and an
    /// empty attendee list.
    pub fn new(name: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            date: date.into(),
            time: time.into(),
            venue: None,
            attendees: Vec::new(),
        }
    }

    pub fn uuid(&self) -> EventId {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the linked venue ID, or `None` while unassigned.
    pub fn venue(&self) -> Option<VenueId> {
        self.venue
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    /// Links this event to a venue, overwriting any prior link.
    ///
    /// Last write wins; reassignment is unrestricted.
    pub fn set_venue(&mut self, venue: VenueId) {
        self.venue = Some(venue);
    }

    /// Appends one attendee, taking ownership.
    ///
    /// No duplicate detection; registration order is preserved.
    pub fn add_attendee(&mut self, attendee: Attendee) {
        self.attendees.push(attendee);
    }

    /// Returns the event structured for display.
    ///
    /// Pure projection: `resolved_venue` is the registry-owned venue this
    /// event links to, or `None` while unassigned. Calling this twice with
    /// the same inputs yields equal records.
    pub fn describe(&self, resolved_venue: Option<&Venue>) -> EventDetails {
        EventDetails {
            name: self.name.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            venue: resolved_venue.map(Venue::describe),
            attendees: self.attendees.iter().map(Attendee::describe).collect(),
        }
    }
}

/// Display projection of one event.
///
/// `venue: None` marks an event whose venue is not assigned yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub name: String,
    pub date: String,
    pub time: String,
    pub venue: Option<VenueDetails>,
    pub attendees: Vec<AttendeeDetails>,
}
