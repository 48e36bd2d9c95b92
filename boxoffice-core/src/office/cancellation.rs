//! Ticket cancellation and refund.

use crate::entities::PartyId;
use crate::error::OfficeError;
use crate::events::Notice;
use crate::payments::Transfer;
use crate::utils::refund_window::refund_deadline;

use super::BoxOffice;

impl BoxOffice {
    /// Cancel the caller's ticket and refund its paid price.
    ///
    /// Allowed strictly before `event_date - refund_window`; at or after
    /// that instant the window is closed. Removal swaps the last ticket
    /// into the vacated slot, so collection order does not survive.
    ///
    /// The removal and the rail transfer are one atomic unit: a failed
    /// transfer puts the ticket back and leaves the balance untouched.
    ///
    /// Returns the refunded amount.
    pub async fn cancel_ticket(
        &mut self,
        caller: &PartyId,
        event_id: &str,
    ) -> Result<u64, OfficeError> {
        let _permit = self.gate.enter()?;
        let now = self.clock.now();

        let (index, paid_price) = self
            .user_ticket(event_id, caller)
            .map(|(index, ticket)| (index, ticket.paid_price))
            .ok_or(OfficeError::TicketNotFound)?;

        // A found ticket implies the event exists.
        let event = self
            .events
            .get(event_id)
            .ok_or(OfficeError::Invariant("event vanished during cancellation"))?;
        if now >= refund_deadline(event.event_date, self.refund_window) {
            return Err(OfficeError::RefundWindowClosed);
        }
        let id = event.event_id.clone();

        let debited = self
            .balance
            .checked_sub(paid_price)
            .ok_or(OfficeError::Invariant("refund exceeds held balance"))?;

        let removed = self
            .events
            .get_mut(event_id)
            .ok_or(OfficeError::Invariant("event vanished during cancellation"))?
            .tickets
            .swap_remove(index);
        if removed.owner != *caller {
            // Lookup and removal disagree about who sits at `index`.
            if let Some(event) = self.events.get_mut(event_id) {
                event.tickets.push(removed);
            }
            return Err(OfficeError::Invariant(
                "removed ticket does not belong to the caller",
            ));
        }

        let transfer = Transfer::cancellation_refund(caller.clone(), paid_price, id.clone());
        if let Err(rail_err) = self.rail.transfer(transfer).await {
            // All-or-nothing: the ticket goes back in.
            if let Some(event) = self.events.get_mut(event_id) {
                event.tickets.push(removed);
            }
            return Err(OfficeError::Payment(rail_err));
        }
        self.balance = debited;

        self.emit(Notice::TicketCancelled {
            buyer: caller.clone(),
            event_id: id,
            refunded: paid_price,
        })
        .await;

        Ok(paid_price)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::HashSet;

    use super::super::testing::{ADMIN, attendee, draft, drain, office, party};
    use crate::error::OfficeError;
    use crate::events::Notice;
    use crate::payments::TransferReason;
    use time::Duration;

    #[tokio::test]
    async fn test_cancel_without_ticket() {
        let mut fixture = office();
        let admin = party(ADMIN);

        // unknown event and known event without a ticket look the same
        let err = fixture
            .office
            .cancel_ticket(&party("alice"), "ev1")
            .await
            .unwrap_err();
        assert!(matches!(err, OfficeError::TicketNotFound));

        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();
        let err = fixture
            .office
            .cancel_ticket(&party("alice"), event_id.as_str())
            .await
            .unwrap_err();
        assert!(matches!(err, OfficeError::TicketNotFound));
    }

    #[tokio::test]
    async fn test_cancellation_refunds_the_paid_price() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let alice = party("alice");
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();
        fixture
            .office
            .buy_ticket(&alice, event_id.as_str(), attendee("alice"), 500)
            .await
            .unwrap();

        let refunded = fixture
            .office
            .cancel_ticket(&alice, event_id.as_str())
            .await
            .unwrap();
        assert_eq!(refunded, 500);

        let transfers = fixture.rail.recorded();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].to, alice);
        assert_eq!(transfers[0].amount, 500);
        assert!(matches!(
            transfers[0].reason,
            TransferReason::CancellationRefund { event_id: ref id } if *id == event_id
        ));

        // purchase followed by cancellation nets to zero held funds
        assert_eq!(fixture.office.balance(&admin).unwrap(), 0);
        assert!(
            fixture
                .office
                .user_ticket(event_id.as_str(), &alice)
                .is_none()
        );

        let notices = drain(&mut fixture.notices);
        assert!(notices.iter().any(|n| matches!(
            n,
            Notice::TicketCancelled { buyer, event_id: id, refunded: 500 }
                if *buyer == alice && *id == event_id
        )));
    }

    #[tokio::test]
    async fn test_cancellation_fails_at_the_deadline() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let alice = party("alice");
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();
        fixture
            .office
            .buy_ticket(&alice, event_id.as_str(), attendee("alice"), 500)
            .await
            .unwrap();

        // event is 7 days out, refund window 1 day: the deadline is day 6
        fixture.clock.advance(Duration::days(6));
        let err = fixture
            .office
            .cancel_ticket(&alice, event_id.as_str())
            .await
            .unwrap_err();
        assert!(matches!(err, OfficeError::RefundWindowClosed));

        // the ticket collection is unchanged
        let tickets = fixture
            .office
            .participants(&admin, event_id.as_str())
            .unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(fixture.office.balance(&admin).unwrap(), 500);
    }

    #[tokio::test]
    async fn test_cancellation_succeeds_just_before_the_deadline() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let alice = party("alice");
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();
        fixture
            .office
            .buy_ticket(&alice, event_id.as_str(), attendee("alice"), 500)
            .await
            .unwrap();

        fixture
            .clock
            .advance(Duration::days(6) - Duration::seconds(1));
        fixture
            .office
            .cancel_ticket(&alice, event_id.as_str())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_cancelled_ticket_cannot_be_cancelled_again() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let alice = party("alice");
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();
        fixture
            .office
            .buy_ticket(&alice, event_id.as_str(), attendee("alice"), 500)
            .await
            .unwrap();

        fixture
            .office
            .cancel_ticket(&alice, event_id.as_str())
            .await
            .unwrap();
        let err = fixture
            .office
            .cancel_ticket(&alice, event_id.as_str())
            .await
            .unwrap_err();
        assert!(matches!(err, OfficeError::TicketNotFound));
    }

    #[tokio::test]
    async fn test_buyer_can_rebuy_after_cancelling() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let alice = party("alice");
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();

        fixture
            .office
            .buy_ticket(&alice, event_id.as_str(), attendee("alice"), 500)
            .await
            .unwrap();
        fixture
            .office
            .cancel_ticket(&alice, event_id.as_str())
            .await
            .unwrap();
        fixture
            .office
            .buy_ticket(&alice, event_id.as_str(), attendee("alice"), 500)
            .await
            .unwrap();

        assert_eq!(fixture.office.balance(&admin).unwrap(), 500);
    }

    #[tokio::test]
    async fn test_removal_takes_exactly_one_ticket_and_keeps_the_rest() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();
        for buyer in ["alice", "bob", "carol"] {
            fixture
                .office
                .buy_ticket(&party(buyer), event_id.as_str(), attendee(buyer), 500)
                .await
                .unwrap();
        }

        fixture
            .office
            .cancel_ticket(&party("alice"), event_id.as_str())
            .await
            .unwrap();

        // Exactly one ticket gone. Collection order is NOT guaranteed to
        // survive removal, so compare as a set.
        let owners: HashSet<String> = fixture
            .office
            .participants(&admin, event_id.as_str())
            .unwrap()
            .iter()
            .map(|t| t.owner.as_str().to_string())
            .collect();
        assert_eq!(
            owners,
            HashSet::from(["bob".to_string(), "carol".to_string()])
        );

        // Lookup still finds the survivors at their new positions.
        assert!(
            fixture
                .office
                .user_ticket(event_id.as_str(), &party("bob"))
                .is_some()
        );
        assert!(
            fixture
                .office
                .user_ticket(event_id.as_str(), &party("carol"))
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_failed_refund_keeps_the_ticket() {
        let mut fixture = office();
        let admin = party(ADMIN);
        let alice = party("alice");
        let event_id = fixture
            .office
            .create_event(&admin, draft("Recital", 10, 500, &fixture.clock))
            .await
            .unwrap();
        fixture
            .office
            .buy_ticket(&alice, event_id.as_str(), attendee("alice"), 500)
            .await
            .unwrap();

        fixture.rail.start_rejecting();
        let err = fixture
            .office
            .cancel_ticket(&alice, event_id.as_str())
            .await
            .unwrap_err();
        assert!(matches!(err, OfficeError::Payment(_)));

        // Removal and transfer are one atomic unit.
        assert!(
            fixture
                .office
                .user_ticket(event_id.as_str(), &alice)
                .is_some()
        );
        assert_eq!(fixture.office.balance(&admin).unwrap(), 500);
    }
}
