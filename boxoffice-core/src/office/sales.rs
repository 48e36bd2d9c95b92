//! Ticket sales.

use crate::entities::{AttendeeDetails, EventStatus, PartyId, Ticket};
use crate::error::OfficeError;
use crate::events::Notice;
use crate::payments::Transfer;

use super::BoxOffice;

impl BoxOffice {
    /// Buy one ticket for the calling party.
    ///
    /// Validation order is fixed; the first failing check wins:
    /// unknown event, organizer buying their own event, duplicate
    /// purchase, event date reached, registration paused, sold out,
    /// insufficient payment.
    ///
    /// On success the ticket snapshot is recorded and the full
    /// `payment_value` is credited to the held balance; any excess above
    /// the price is then refunded over the rail as the final step. A
    /// failed refund aborts the whole purchase – the ticket and the
    /// balance credit are rolled back.
    pub async fn buy_ticket(
        &mut self,
        caller: &PartyId,
        event_id: &str,
        attendee: AttendeeDetails,
        payment_value: u64,
    ) -> Result<Ticket, OfficeError> {
        let _permit = self.gate.enter()?;
        let now = self.clock.now();

        let event = self.events.get(event_id).ok_or(OfficeError::EventNotFound)?;
        if event.creator == *caller {
            return Err(OfficeError::OrganizerCannotBuyTicket);
        }
        if event.tickets.iter().any(|t| t.owner == *caller) {
            return Err(OfficeError::TicketAlreadyExists);
        }
        if now >= event.event_date {
            return Err(OfficeError::PassedEventDate);
        }
        if event.status == EventStatus::Paused {
            return Err(OfficeError::EventPaused);
        }
        if event.tickets.len() as u32 >= event.ticket_limit {
            return Err(OfficeError::SoldOutTickets);
        }
        if payment_value < event.price {
            return Err(OfficeError::NotEnoughFunds {
                required: event.price,
                supplied: payment_value,
            });
        }
        let price = event.price;
        let id = event.event_id.clone();

        let credited = self
            .balance
            .checked_add(payment_value)
            .ok_or(OfficeError::Invariant("held balance overflow"))?;

        let ticket = Ticket {
            owner: caller.clone(),
            fname: attendee.fname,
            lname: attendee.lname,
            email: attendee.email,
            paid_price: price,
            purchased: now,
        };
        self.events
            .get_mut(event_id)
            .ok_or(OfficeError::Invariant("event vanished during purchase"))?
            .tickets
            .push(ticket.clone());
        self.balance = credited;

        self.emit(Notice::TicketPurchased {
            buyer: caller.clone(),
            event_id: id.clone(),
            price,
        })
        .await;

        // Overpayment refund is the last step, after the ticket is
        // durably recorded.
        let excess = payment_value - price;
        if excess > 0 {
            let transfer = Transfer::overpayment_refund(caller.clone(), excess, id);
            if let Err(rail_err) = self.rail.transfer(transfer).await {
                // All-or-nothing: take the ticket back out and undo the
                // balance credit.
                if let Some(event) = self.events.get_mut(event_id) {
                    if let Some(pos) = event.tickets.iter().position(|t| t.owner == *caller) {
                        event.tickets.swap_remove(pos);
                    }
                }
                self.balance -= payment_value;
                return Err(OfficeError::Payment(rail_err));
            }
            self.balance -= excess;
        }

        Ok(ticket)
    }
}
