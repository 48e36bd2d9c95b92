//! In-memory records owned by the box office.
//!
//! These are the core's own types. For API/DTO use, see
//! `boxoffice_sdk::objects`; conversions live next to the types below.

pub mod event;
pub mod ticket;

pub use event::{Event, EventDraft, EventStatus, EventSummary};
pub use ticket::{AttendeeDetails, Ticket};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque identity of an acting party (buyer, organizer, or admin).
///
/// The office never interprets the contents; equality is the only
/// operation that matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(CompactString);

impl PartyId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<&str> for PartyId {
    fn from(value: &str) -> Self {
        Self(CompactString::from(value))
    }
}

impl From<String> for PartyId {
    fn from(value: String) -> Self {
        Self(CompactString::from(value))
    }
}

/// Identifier of an event, assigned by the catalog (`"ev1"`, `"ev2"`, …).
///
/// Never reused and never mutated after assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(CompactString);

impl EventId {
    /// Derive the identifier for the `n`-th created event.
    pub(crate) fn derived(n: u64) -> Self {
        Self(CompactString::from(format!("ev{n}")))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

// Lets the catalog map be queried with `&str` keys.
impl Borrow<str> for EventId {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}
