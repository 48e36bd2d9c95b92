//! The box office: the event/ticket state machine with integrated value
//! transfer.
//!
//! One instance owns the whole catalog: the admin identity, the monotonic
//! event counter, the insertion-ordered identifier list, and the
//! identifier → event map with each event's ticket collection. Calls are
//! serialized per invocation (`&mut self`); the remaining concurrency
//! hazard in scope is the payment rail calling back into a purchase or
//! cancellation mid-flight, which the reentrancy gate rejects.

mod cancellation;
mod gate;
mod sales;
#[cfg(test)]
mod testing;

use std::collections::HashMap;
use std::sync::Arc;

use time::Duration;

use crate::config::OfficeConfig;
use crate::entities::{Event, EventDraft, EventId, EventStatus, EventSummary, PartyId, Ticket};
use crate::error::OfficeError;
use crate::events::{Notice, NoticeSender};
use crate::payments::PaymentRail;
use crate::utils::clock::Clock;
use gate::ReentrancyGate;

/// The event/ticket state machine.
pub struct BoxOffice {
    admin: PartyId,
    refund_window: Duration,
    /// Monotonic; incremented once per successful creation, never reused.
    next_event: u64,
    /// Append-only, insertion-ordered. Always 1:1 with `events`' key set.
    event_order: Vec<EventId>,
    events: HashMap<EventId, Event>,
    /// Funds held: payments received minus refunds issued.
    balance: u64,
    rail: Arc<dyn PaymentRail>,
    clock: Arc<dyn Clock>,
    notices: NoticeSender,
    gate: ReentrancyGate,
}

impl BoxOffice {
    /// Construct an office. The admin identity and refund window are
    /// fixed for the office's lifetime.
    pub fn new(
        config: OfficeConfig,
        rail: Arc<dyn PaymentRail>,
        clock: Arc<dyn Clock>,
        notices: NoticeSender,
    ) -> Self {
        Self {
            admin: config.admin,
            refund_window: config.refund_window,
            next_event: 0,
            event_order: Vec::new(),
            events: HashMap::new(),
            balance: 0,
            rail,
            clock,
            notices,
            gate: ReentrancyGate::new(),
        }
    }

    /// The administrator identity this office was constructed with.
    pub fn admin(&self) -> &PartyId {
        &self.admin
    }

    // -- Access guard ------------------------------------------------------

    /// Admin-only operations run this before any other validation.
    fn require_admin(&self, caller: &PartyId) -> Result<(), OfficeError> {
        if *caller != self.admin {
            return Err(OfficeError::AccessDenied);
        }
        Ok(())
    }

    /// Send a notice, logging instead of failing the operation when the
    /// channel is saturated or closed.
    async fn emit(&self, notice: Notice) {
        if let Err(e) = self.notices.send(notice).await {
            tracing::error!(error = %e, "Failed to emit notice");
        }
    }

    // -- Event catalog -----------------------------------------------------

    /// Create a new event. Admin only.
    ///
    /// The event date must be strictly in the future. On success the
    /// next sequential identifier (`ev1`, `ev2`, …) is assigned, the
    /// event enters the catalog with `Active` status and an empty ticket
    /// collection, and a [`Notice::EventCreated`] is emitted.
    pub async fn create_event(
        &mut self,
        caller: &PartyId,
        draft: EventDraft,
    ) -> Result<EventId, OfficeError> {
        self.require_admin(caller)?;
        if draft.event_date <= self.clock.now() {
            return Err(OfficeError::InvalidSchedule);
        }

        self.next_event += 1;
        let event_id = EventId::derived(self.next_event);
        let event = Event {
            event_id: event_id.clone(),
            creator: caller.clone(),
            name: draft.name,
            ticket_limit: draft.ticket_limit,
            event_date: draft.event_date,
            price: draft.price,
            status: EventStatus::Active,
            tickets: Vec::new(),
        };

        let notice = Notice::EventCreated {
            event_id: event_id.clone(),
            name: event.name.clone(),
            creator: event.creator.clone(),
            event_date: event.event_date,
            status: event.status,
        };
        self.event_order.push(event_id.clone());
        self.events.insert(event_id.clone(), event);
        self.emit(notice).await;

        Ok(event_id)
    }

    /// The full ordered list of identifiers ever created, never pruned.
    pub fn list_events(&self) -> &[EventId] {
        &self.event_order
    }

    /// Read-only snapshot of one event, without its ticket collection.
    pub fn event_details(&self, event_id: &str) -> Result<EventSummary, OfficeError> {
        self.events
            .get(event_id)
            .map(Event::summary)
            .ok_or(OfficeError::EventNotFound)
    }

    /// Pause or resume ticket registration. Admin only.
    pub async fn toggle_registration(
        &mut self,
        caller: &PartyId,
        event_id: &str,
        status: EventStatus,
    ) -> Result<(), OfficeError> {
        self.require_admin(caller)?;

        let event = self
            .events
            .get_mut(event_id)
            .ok_or(OfficeError::EventNotFound)?;
        if event.status == status {
            return Err(OfficeError::NoStatusChange);
        }
        event.status = status;
        let event_id = event.event_id.clone();

        self.emit(Notice::RegistrationToggled { event_id, status })
            .await;
        Ok(())
    }

    // -- Ticket lookup -----------------------------------------------------

    /// The caller's ticket for an event, with its position in the
    /// collection. Pure read.
    ///
    /// Returns `None` when the event does not exist or the owner holds
    /// no ticket. The index is NOT stable across mutations: cancellation
    /// moves the last ticket into the removed slot.
    pub fn user_ticket(&self, event_id: &str, owner: &PartyId) -> Option<(usize, &Ticket)> {
        let event = self.events.get(event_id)?;
        event
            .tickets
            .iter()
            .enumerate()
            .find(|(_, ticket)| ticket.owner == *owner)
    }

    // -- Administrative visibility -----------------------------------------

    /// The event's current ticket collection, verbatim. Admin only.
    ///
    /// An unknown event yields an empty list rather than
    /// [`OfficeError::EventNotFound`]: the dashboard treats "no such
    /// event" and "no tickets" identically. Only the empty identifier is
    /// rejected.
    pub fn participants(
        &self,
        caller: &PartyId,
        event_id: &str,
    ) -> Result<Vec<Ticket>, OfficeError> {
        self.require_admin(caller)?;
        if event_id.is_empty() {
            return Err(OfficeError::EmptyIdentifier);
        }
        Ok(self
            .events
            .get(event_id)
            .map(|event| event.tickets.clone())
            .unwrap_or_default())
    }

    /// Aggregate funds currently held. Admin only. Pure read.
    pub fn balance(&self, caller: &PartyId) -> Result<u64, OfficeError> {
        self.require_admin(caller)?;
        Ok(self.balance)
    }

    // -- Unmatched-call capture --------------------------------------------

    /// Record an invocation that matched no known operation.
    ///
    /// Fail-open by design: the call is captured and reported as a
    /// notice, never rejected with an error from the state machine.
    pub async fn log_unmatched_call(&self, caller: Option<PartyId>, payload: String) {
        tracing::warn!(
            caller = caller.as_ref().map(PartyId::as_str),
            payload = %payload,
            "Unmatched call captured"
        );
        self.emit(Notice::UnmatchedCall { caller, payload }).await;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::testing::{ADMIN, attendee, draft, drain, office, party};
    use super::*;
    use crate::events::Notice;

    #[tokio::test]
    async fn test_list_events_empty_initially() {
        let fixture = office();
        assert!(fixture.office.list_events().is_empty());
    }

    #[tokio::test]
    async fn test_create_event_requires_admin() {
        let mut fixture = office();
        let draft = draft("Recital", 10, 500, &fixture.clock);
        let err = fixture
            .office
            .create_event(&party("mallory"), draft)
            .await
            .unwrap_err();
        assert!(matches!(err, OfficeError::AccessDenied));
        assert!(fixture.office.list_events().is_empty());
    }

    #[tokio::test]
    async fn test_create_event_rejects_non_future_date() {
        let mut fixture = office();
        let mut d = draft("Recital", 10, 500, &fixture.clock);
        d.event_date = fixture.clock.now();
        let err = fixture
            .office
            .create_event(&party(ADMIN), d)
            .await
            .unwrap_err();
        assert!(matches!(err, OfficeError::InvalidSchedule));
        assert!(fixture.office.list_events().is_empty());
    }

    #[tokio::test]
    async fn test_create_event_assigns_sequential_ids() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let first = fixture
            .office
            .create_event(&admin, draft("First", 10, 500, &fixture.clock))
            .await
            .unwrap();
        let second = fixture
            .office
            .create_event(&admin, draft("Second", 20, 700, &fixture.clock))
            .await
            .unwrap();

        assert_eq!(first.as_str(), "ev1");
        assert_eq!(second.as_str(), "ev2");
        assert_eq!(fixture.office.list_events(), &[first, second][..]);
    }

    #[tokio::test]
    async fn test_event_details_round_trips_creation_fields() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let d = draft("Recital", 10, 500, &fixture.clock);
        let event_date = d.event_date;
        let event_id = fixture.office.create_event(&admin, d).await.unwrap();

        let summary = fixture.office.event_details(event_id.as_str()).unwrap();
        assert_eq!(summary.event_id, event_id);
        assert_eq!(summary.creator, admin);
        assert_eq!(summary.name, "Recital");
        assert_eq!(summary.ticket_limit, 10);
        assert_eq!(summary.price, 500);
        assert_eq!(summary.event_date, event_date);
        assert_eq!(summary.status, EventStatus::Active);
        assert_eq!(summary.tickets_sold, 0);
    }

    #[tokio::test]
    async fn test_event_details_unknown_event() {
        let fixture = office();
        let err = fixture.office.event_details("ev999").unwrap_err();
        assert!(matches!(err, OfficeError::EventNotFound));
    }

    #[tokio::test]
    async fn test_create_event_emits_notice() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();

        let notices = drain(&mut fixture.notices);
        assert!(notices.iter().any(|n| matches!(
            n,
            Notice::EventCreated { event_id: id, creator, status: EventStatus::Active, .. }
                if *id == event_id && *creator == admin
        )));
    }

    #[tokio::test]
    async fn test_toggle_registration_unknown_event() {
        let mut fixture = office();
        let err = fixture
            .office
            .toggle_registration(&party(ADMIN), "ev1", EventStatus::Paused)
            .await
            .unwrap_err();
        assert!(matches!(err, OfficeError::EventNotFound));
    }

    #[tokio::test]
    async fn test_toggle_registration_rejects_no_change() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();

        let err = fixture
            .office
            .toggle_registration(&admin, event_id.as_str(), EventStatus::Active)
            .await
            .unwrap_err();
        assert!(matches!(err, OfficeError::NoStatusChange));
    }

    #[tokio::test]
    async fn test_toggle_registration_flips_and_notifies() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();

        fixture
            .office
            .toggle_registration(&admin, event_id.as_str(), EventStatus::Paused)
            .await
            .unwrap();
        let summary = fixture.office.event_details(event_id.as_str()).unwrap();
        assert_eq!(summary.status, EventStatus::Paused);

        // and back again, any number of times
        fixture
            .office
            .toggle_registration(&admin, event_id.as_str(), EventStatus::Active)
            .await
            .unwrap();

        let notices = drain(&mut fixture.notices);
        let toggles = notices
            .iter()
            .filter(|n| matches!(n, Notice::RegistrationToggled { .. }))
            .count();
        assert_eq!(toggles, 2);
    }

    #[tokio::test]
    async fn test_toggle_registration_requires_admin() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();

        // Admin gate runs first: the status argument is otherwise valid.
        let err = fixture
            .office
            .toggle_registration(&party("mallory"), event_id.as_str(), EventStatus::Paused)
            .await
            .unwrap_err();
        assert!(matches!(err, OfficeError::AccessDenied));
        let summary = fixture.office.event_details(event_id.as_str()).unwrap();
        assert_eq!(summary.status, EventStatus::Active);
    }

    #[tokio::test]
    async fn test_participants_requires_admin() {
        let fixture = office();
        let err = fixture
            .office
            .participants(&party("mallory"), "ev1")
            .unwrap_err();
        assert!(matches!(err, OfficeError::AccessDenied));
    }

    #[tokio::test]
    async fn test_participants_rejects_empty_identifier() {
        let fixture = office();
        let err = fixture.office.participants(&party(ADMIN), "").unwrap_err();
        assert!(matches!(err, OfficeError::EmptyIdentifier));
    }

    #[tokio::test]
    async fn test_participants_unknown_event_is_empty_not_an_error() {
        let fixture = office();
        let tickets = fixture.office.participants(&party(ADMIN), "ev999").unwrap();
        assert!(tickets.is_empty());
    }

    #[tokio::test]
    async fn test_participants_lists_tickets() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();
        fixture
            .office
            .buy_ticket(&party("alice"), event_id.as_str(), attendee("alice"), 500)
            .await
            .unwrap();

        let tickets = fixture
            .office
            .participants(&admin, event_id.as_str())
            .unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].owner, party("alice"));
    }

    #[tokio::test]
    async fn test_balance_requires_admin() {
        let fixture = office();
        let err = fixture.office.balance(&party("mallory")).unwrap_err();
        assert!(matches!(err, OfficeError::AccessDenied));
    }

    #[tokio::test]
    async fn test_balance_starts_at_zero() {
        let fixture = office();
        assert_eq!(fixture.office.balance(&party(ADMIN)).unwrap(), 0);
    }

    #[tokio::test]
    async fn test_user_ticket_missing_event_or_ticket() {
        let mut fixture = office();
        let admin = party(ADMIN);
        assert!(fixture.office.user_ticket("ev1", &party("alice")).is_none());

        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();
        assert!(
            fixture
                .office
                .user_ticket(event_id.as_str(), &party("alice"))
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_unmatched_call_is_captured_as_notice() {
        let mut fixture = office();
        fixture
            .office
            .log_unmatched_call(Some(party("alice")), "POST /frobnicate".to_string())
            .await;

        let notices = drain(&mut fixture.notices);
        assert!(notices.iter().any(|n| matches!(
            n,
            Notice::UnmatchedCall { caller: Some(c), payload } if *c == party("alice") && payload.as_str() == "POST /frobnicate"
        )));
    }
}
