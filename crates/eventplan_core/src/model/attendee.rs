//! Attendee domain model.
//!
//! # Responsibility
//! - Define the registered-person record owned by an event.
//! - Map each attendee role to its fixed access description.
//!
//! # Invariants
//! - The role set is closed; `AttendeeRole` is not designed for extension.
//! - Role is fixed at construction; there is no role migration.
//! - `access_description` is a pure function of the role tag.

use serde::{Deserialize, Serialize};

/// Closed set of attendee roles.
///
/// Each role determines a fixed access description; no other behavior
/// varies by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendeeRole {
    Regular,
    Vip,
    GuestSpeaker,
}

impl AttendeeRole {
    /// All roles in selector order, for rendering selection menus.
    pub const ALL: [AttendeeRole; 3] = [Self::Regular, Self::Vip, Self::GuestSpeaker];

    /// Maps a caller-facing selector tag (1/2/3) to a role.
    ///
    /// Returns `None` for any other tag; callers surface that as an
    /// invalid-role error.
    pub fn from_selector(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Self::Regular),
            2 => Some(Self::Vip),
            3 => Some(Self::GuestSpeaker),
            _ => None,
        }
    }

    /// Returns the selector tag for this role, inverse of `from_selector`.
    pub fn selector(self) -> u8 {
        match self {
            Self::Regular => 1,
            Self::Vip => 2,
            Self::GuestSpeaker => 3,
        }
    }

    /// Human-readable role label for menus and transcripts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular Attendee",
            Self::Vip => "VIP Attendee",
            Self::GuestSpeaker => "Guest Speaker",
        }
    }

    /// Returns the fixed access description for this role.
    pub fn access_description(self) -> &'static str {
        match self {
            Self::Regular => "No special access.",
            Self::Vip => "Access to VIP Lounge.",
            Self::GuestSpeaker => "Access to Backstage and Media Room.",
        }
    }
}

/// Immutable record for one person registered to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    name: String,
    email: String,
    role: AttendeeRole,
}

impl Attendee {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: AttendeeRole) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> AttendeeRole {
        self.role
    }

    /// Returns the access description determined by this attendee's role.
    pub fn access_description(&self) -> &'static str {
        self.role.access_description()
    }

    /// Returns the attendee fields structured for display.
    pub fn describe(&self) -> AttendeeDetails {
        AttendeeDetails {
            name: self.name.clone(),
            access: self.access_description().to_string(),
        }
    }
}

/// Display projection of one attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeDetails {
    pub name: String,
    pub access: String,
}
