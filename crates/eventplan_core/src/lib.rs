//! Core domain logic for the event planning system.
//! This crate is the single source of truth for business invariants.
//!
//! All state lives in process memory for the duration of one session: the
//! caller constructs a [`PlanningRegistry`], drives it with already-typed
//! arguments, and renders the structured records it returns.

pub mod logging;
pub mod model;
pub mod registry;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attendee::{Attendee, AttendeeDetails, AttendeeRole};
pub use model::event::{Event, EventDetails, EventId};
pub use model::venue::{Venue, VenueDetails, VenueId};
pub use registry::{CollectionKind, PlanningRegistry, RegistryError, RegistryResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
