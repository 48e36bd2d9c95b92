//! Test doubles and fixtures shared by the office tests.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use time::{Duration, OffsetDateTime};

use crate::config::OfficeConfig;
use crate::entities::{AttendeeDetails, EventDraft, PartyId};
use crate::events::{Notice, NoticeReceiver, notice_channel};
use crate::payments::{PaymentRail, RailError, Transfer};
use crate::utils::clock::Clock;

use super::BoxOffice;

pub(super) const ADMIN: &str = "admin";

/// Arbitrary base instant for the fixtures.
const T0: i64 = 1_700_000_000;

/// Clock pinned to a unix-seconds value, advanced manually.
pub(super) struct ManualClock {
    unix_secs: AtomicI64,
}

impl ManualClock {
    fn starting_at(unix_secs: i64) -> Arc<Self> {
        Arc::new(Self {
            unix_secs: AtomicI64::new(unix_secs),
        })
    }

    pub(super) fn advance(&self, by: Duration) {
        self.unix_secs
            .fetch_add(by.whole_seconds(), Ordering::Relaxed);
    }

    pub(super) fn now(&self) -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH + Duration::seconds(self.unix_secs.load(Ordering::Relaxed))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        ManualClock::now(self)
    }
}

/// Rail double that records settled transfers and can be switched to
/// reject everything.
#[derive(Default)]
pub(super) struct RecordingRail {
    transfers: Mutex<Vec<Transfer>>,
    reject: AtomicBool,
}

impl RecordingRail {
    pub(super) fn rejecting() -> Self {
        let rail = Self::default();
        rail.reject.store(true, Ordering::Relaxed);
        rail
    }

    pub(super) fn start_rejecting(&self) {
        self.reject.store(true, Ordering::Relaxed);
    }

    pub(super) fn recorded(&self) -> Vec<Transfer> {
        self.transfers.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PaymentRail for RecordingRail {
    async fn transfer(&self, transfer: Transfer) -> Result<(), RailError> {
        if self.reject.load(Ordering::Relaxed) {
            return Err(RailError::Rejected {
                status: 502,
                body: "rail offline".to_string(),
            });
        }
        self.transfers.lock().unwrap().push(transfer);
        Ok(())
    }
}

/// An office wired to a manual clock, a recording rail, and a live
/// notice receiver.
pub(super) struct OfficeFixture {
    pub(super) office: BoxOffice,
    pub(super) clock: Arc<ManualClock>,
    pub(super) rail: Arc<RecordingRail>,
    pub(super) notices: NoticeReceiver,
}

pub(super) fn office() -> OfficeFixture {
    office_with_rail(RecordingRail::default())
}

pub(super) fn office_with_rail(rail: RecordingRail) -> OfficeFixture {
    let clock = ManualClock::starting_at(T0);
    let rail = Arc::new(rail);
    let (notice_tx, notice_rx) = notice_channel();
    let office = BoxOffice::new(
        OfficeConfig::new(PartyId::from(ADMIN)),
        rail.clone(),
        clock.clone(),
        notice_tx,
    );
    OfficeFixture {
        office,
        clock,
        rail,
        notices: notice_rx,
    }
}

/// A draft one week out.
pub(super) fn draft(name: &str, ticket_limit: u32, price: u64, clock: &ManualClock) -> EventDraft {
    EventDraft {
        name: name.to_string(),
        ticket_limit,
        price,
        event_date: clock.now() + Duration::days(7),
    }
}

pub(super) fn attendee(fname: &str) -> AttendeeDetails {
    AttendeeDetails {
        fname: fname.to_string(),
        lname: "Doe".to_string(),
        email: format!("{fname}@example.com"),
    }
}

pub(super) fn party(id: &str) -> PartyId {
    PartyId::from(id)
}

/// Everything emitted so far.
pub(super) fn drain(notices: &mut NoticeReceiver) -> Vec<Notice> {
    let mut drained = Vec::new();
    while let Ok(notice) = notices.try_recv() {
        drained.push(notice);
    }
    drained
}
