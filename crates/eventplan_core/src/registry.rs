//! In-process planning registry: the single owner of all events and venues.
//!
//! # Responsibility
//! - Own the event and venue collections for one session.
//! - Expose the only mutation and query entry points for callers.
//!
//! # Invariants
//! - Collections are append-only; events and venues are never removed, so a
//!   venue ID held by an event always resolves.
//! - Operations that depend on a non-empty collection fail before any index
//!   lookup when that collection is empty.
//! - Failed operations leave the registry unchanged.
//! - Log records carry counts and indices only, never user-entered text.

use crate::model::attendee::{Attendee, AttendeeRole};
use crate::model::event::{Event, EventDetails, EventId};
use crate::model::venue::{Venue, VenueId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Which registry-owned collection an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Events,
    Venues,
}

/// Recoverable registry operation errors.
///
/// None of these are fatal: the caller displays a corrective message and the
/// registry keeps all previously entered data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The operation needs a non-empty collection that is currently empty.
    PreconditionFailed(CollectionKind),
    /// A supplied index does not correspond to an existing record.
    NotFound {
        collection: CollectionKind,
        index: usize,
    },
    /// A role selector does not map to any known attendee role.
    InvalidRole(u8),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreconditionFailed(CollectionKind::Events) => write!(f, "no events available"),
            Self::PreconditionFailed(CollectionKind::Venues) => write!(f, "no venues available"),
            Self::NotFound {
                collection: CollectionKind::Events,
                index,
            } => write!(f, "no event at index {index}"),
            Self::NotFound {
                collection: CollectionKind::Venues,
                index,
            } => write!(f, "no venue at index {index}"),
            Self::InvalidRole(tag) => write!(f, "no attendee role matches selector {tag}"),
        }
    }
}

impl Error for RegistryError {}

/// Session-scoped owner of all events and venues.
///
/// Constructed explicitly by the caller and held for the life of one
/// session; there is no process-global instance.
#[derive(Debug, Default)]
pub struct PlanningRegistry {
    events: Vec<Event>,
    venues: Vec<Venue>,
}

impl PlanningRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in creation order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Venues in registration order.
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Appends a new event with no venue and an empty attendee list.
    ///
    /// Always succeeds; empty strings are accepted as given.
    pub fn create_event(
        &mut self,
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> EventId {
        let event = Event::new(name, date, time);
        let id = event.uuid();
        self.events.push(event);
        info!(
            "event=event_created module=registry status=ok total_events={}",
            self.events.len()
        );
        id
    }

    /// Appends a new venue.
    ///
    /// Capacity arrives already validated as a non-negative integer by the
    /// caller boundary; the facilities slice arrives already split and is
    /// copied into venue-owned storage.
    pub fn add_venue(
        &mut self,
        name: impl Into<String>,
        capacity: u32,
        facilities: &[String],
    ) -> VenueId {
        let venue = Venue::new(name, capacity, facilities);
        let id = venue.uuid();
        self.venues.push(venue);
        info!(
            "event=venue_added module=registry status=ok total_venues={}",
            self.venues.len()
        );
        id
    }

    /// Registers one attendee to the event at `event_index` (0-based).
    ///
    /// # Errors
    /// - `PreconditionFailed(Events)` when no events exist, before any
    ///   index lookup.
    /// - `NotFound` when `event_index` is out of bounds.
    /// - `InvalidRole` when `role_selector` maps to no known role.
    pub fn register_attendee(
        &mut self,
        event_index: usize,
        name: impl Into<String>,
        email: impl Into<String>,
        role_selector: u8,
    ) -> RegistryResult<()> {
        if self.events.is_empty() {
            return Err(RegistryError::PreconditionFailed(CollectionKind::Events));
        }
        let event = self
            .events
            .get_mut(event_index)
            .ok_or(RegistryError::NotFound {
                collection: CollectionKind::Events,
                index: event_index,
            })?;
        let role = AttendeeRole::from_selector(role_selector)
            .ok_or(RegistryError::InvalidRole(role_selector))?;

        event.add_attendee(Attendee::new(name, email, role));
        info!(
            "event=attendee_registered module=registry status=ok event_index={} role_selector={} event_attendees={}",
            event_index,
            role_selector,
            event.attendees().len()
        );
        Ok(())
    }

    /// Links the event at `event_index` to the venue at `venue_index`,
    /// overwriting any prior link (both indices 0-based).
    ///
    /// # Errors
    /// - `PreconditionFailed(Events)` / `PreconditionFailed(Venues)` when
    ///   the respective collection is empty, before any index lookup.
    /// - `NotFound` when either index is out of bounds; no event is
    ///   mutated in that case.
    pub fn assign_venue(&mut self, event_index: usize, venue_index: usize) -> RegistryResult<()> {
        if self.events.is_empty() {
            return Err(RegistryError::PreconditionFailed(CollectionKind::Events));
        }
        if self.venues.is_empty() {
            return Err(RegistryError::PreconditionFailed(CollectionKind::Venues));
        }
        if event_index >= self.events.len() {
            return Err(RegistryError::NotFound {
                collection: CollectionKind::Events,
                index: event_index,
            });
        }
        let venue_id = self
            .venues
            .get(venue_index)
            .map(Venue::uuid)
            .ok_or(RegistryError::NotFound {
                collection: CollectionKind::Venues,
                index: venue_index,
            })?;

        self.events[event_index].set_venue(venue_id);
        info!(
            "event=venue_assigned module=registry status=ok event_index={} venue_index={}",
            event_index, venue_index
        );
        Ok(())
    }

    /// Walks all events in creation order and yields one display record per
    /// event, with the venue link resolved against the venue collection.
    ///
    /// Lazy and restartable: each call re-walks the owned collection.
    pub fn list_event_details(&self) -> impl Iterator<Item = EventDetails> + '_ {
        self.events.iter().map(|event| {
            let resolved = event.venue().and_then(|id| self.venue_by_id(id));
            event.describe(resolved)
        })
    }

    fn venue_by_id(&self, id: VenueId) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.uuid() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{CollectionKind, PlanningRegistry, RegistryError};

    #[test]
    fn add_venue_copies_the_facilities_slice() {
        let mut registry = PlanningRegistry::new();
        let mut facilities = vec!["AV".to_string(), "Catering".to_string()];
        registry.add_venue("Hall A", 200, &facilities);

        facilities[0] = "mutated".to_string();
        facilities.clear();

        assert_eq!(registry.venues()[0].facilities(), ["AV", "Catering"]);
    }

    #[test]
    fn venue_link_resolves_through_the_registry() {
        let mut registry = PlanningRegistry::new();
        registry.create_event("Launch", "2025-01-01", "10:00");
        registry.add_venue("Hall A", 200, &[]);
        registry.add_venue("Hall B", 50, &[]);
        registry
            .assign_venue(0, 1)
            .expect("both indices are in bounds");

        let details = registry
            .list_event_details()
            .next()
            .expect("one event exists");
        let venue = details.venue.expect("venue was assigned");
        assert_eq!(venue.name, "Hall B");
        assert_eq!(venue.capacity, 50);
    }

    #[test]
    fn invalid_role_leaves_the_event_unchanged() {
        let mut registry = PlanningRegistry::new();
        registry.create_event("Launch", "2025-01-01", "10:00");

        let err = registry
            .register_attendee(0, "Ana", "ana@x.com", 9)
            .expect_err("selector 9 maps to no role");
        assert_eq!(err, RegistryError::InvalidRole(9));
        assert!(registry.events()[0].attendees().is_empty());
    }

    #[test]
    fn empty_collection_is_reported_before_any_index_lookup() {
        let mut registry = PlanningRegistry::new();

        let err = registry
            .register_attendee(3, "Ana", "ana@x.com", 1)
            .expect_err("no events exist");
        assert_eq!(
            err,
            RegistryError::PreconditionFailed(CollectionKind::Events)
        );

        registry.create_event("Launch", "2025-01-01", "10:00");
        let err = registry
            .assign_venue(0, 0)
            .expect_err("no venues exist");
        assert_eq!(
            err,
            RegistryError::PreconditionFailed(CollectionKind::Venues)
        );
    }
}
