//! NoticeRelay processor.
//!
//! The NoticeRelay is responsible for:
//! - Receiving notices from the office's channel
//! - Writing each notice to the structured log
//! - Shutting down when the watch signal flips
//!
//! It is the in-scope delivery surface for notifications; anything
//! heavier (webhooks, mail) would hang off the same receiver.

use crate::events::Notice;
use crate::events::NoticeReceiver;
use tokio::sync::watch;
use tracing::info;

/// Drains the notice channel into the log.
pub struct NoticeRelay {
    notice_rx: NoticeReceiver,
    shutdown_rx: watch::Receiver<bool>,
}

impl NoticeRelay {
    /// Create a new NoticeRelay.
    ///
    /// * `notice_rx` - Receiver for office notices
    /// * `shutdown_rx` - Receiver for the shutdown signal
    pub fn new(notice_rx: NoticeReceiver, shutdown_rx: watch::Receiver<bool>) -> Self {
        Self {
            notice_rx,
            shutdown_rx,
        }
    }

    /// Run the NoticeRelay until shutdown or channel close.
    pub async fn run(mut self) {
        info!("NoticeRelay started");

        loop {
            tokio::select! {
                biased;

                _ = self.shutdown_rx.changed() => {
                    if *self.shutdown_rx.borrow() {
                        info!("NoticeRelay received shutdown signal");
                        break;
                    }
                }

                Some(notice) = self.notice_rx.recv() => {
                    log_notice(&notice);
                }

                else => {
                    info!("Notice channel closed");
                    break;
                }
            }
        }

        info!("NoticeRelay shutdown complete");
    }
}

fn log_notice(notice: &Notice) {
    match notice {
        Notice::EventCreated {
            event_id,
            name,
            creator,
            event_date,
            status,
        } => {
            info!(
                event_id = %event_id,
                name = %name,
                creator = %creator,
                event_date = %event_date,
                status = ?status,
                "Event created"
            );
        }
        Notice::RegistrationToggled { event_id, status } => {
            info!(event_id = %event_id, status = ?status, "Registration toggled");
        }
        Notice::TicketPurchased {
            buyer,
            event_id,
            price,
        } => {
            info!(buyer = %buyer, event_id = %event_id, price, "Ticket purchased");
        }
        Notice::TicketCancelled {
            buyer,
            event_id,
            refunded,
        } => {
            info!(buyer = %buyer, event_id = %event_id, refunded, "Ticket cancelled");
        }
        Notice::UnmatchedCall { caller, payload } => {
            info!(
                caller = caller.as_ref().map(|c| c.as_str()),
                payload = %payload,
                "Unmatched call"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EventId, PartyId};
    use crate::events::notice_channel;

    #[tokio::test]
    async fn test_relay_stops_on_shutdown_signal() {
        let (notice_tx, notice_rx) = notice_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let relay = NoticeRelay::new(notice_rx, shutdown_rx);
        let handle = tokio::spawn(relay.run());

        let _ = notice_tx
            .send(Notice::TicketPurchased {
                buyer: PartyId::from("alice"),
                event_id: EventId::derived(1),
                price: 500,
            })
            .await;

        let _ = shutdown_tx.send(true);
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn test_relay_stops_when_channel_closes() {
        let (notice_tx, notice_rx) = notice_channel();
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        let relay = NoticeRelay::new(notice_rx, shutdown_rx);
        let handle = tokio::spawn(relay.run());

        drop(notice_tx);
        assert!(handle.await.is_ok());
    }
}
