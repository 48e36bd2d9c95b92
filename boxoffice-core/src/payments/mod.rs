//! The payment rail: the external mechanism that moves value back to
//! callers.
//!
//! The office only ever *sends* value – incoming payments are validated
//! as amounts, never touched as money. Every outbound movement is a
//! [`Transfer`] instruction with its own idempotency id, handed to an
//! opaque [`PaymentRail`]. Whether the rail settles on a ledger, a PSP,
//! or a test double is invisible to the office.

mod http_rail;

pub use http_rail::RailOverHttp;

use crate::entities::{EventId, PartyId};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Why a transfer is being issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TransferReason {
    /// Returning the part of a payment above the ticket price.
    OverpaymentRefund { event_id: EventId },
    /// Returning the full paid price of a cancelled ticket.
    CancellationRefund { event_id: EventId },
}

/// A single outbound value movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    /// Idempotency id: a rail seeing the same id twice must settle once.
    pub transfer_id: Uuid,
    /// The receiving party.
    pub to: PartyId,
    /// Smallest currency unit.
    pub amount: u64,
    pub reason: TransferReason,
}

impl Transfer {
    /// Instruction returning an overpayment excess to the buyer.
    pub fn overpayment_refund(to: PartyId, amount: u64, event_id: EventId) -> Self {
        Self {
            transfer_id: Uuid::new_v4(),
            to,
            amount,
            reason: TransferReason::OverpaymentRefund { event_id },
        }
    }

    /// Instruction returning a cancelled ticket's paid price.
    pub fn cancellation_refund(to: PartyId, amount: u64, event_id: EventId) -> Self {
        Self {
            transfer_id: Uuid::new_v4(),
            to,
            amount,
            reason: TransferReason::CancellationRefund { event_id },
        }
    }
}

/// Errors surfaced by a payment rail.
#[derive(Debug, Error)]
pub enum RailError {
    /// Transport-level failure reaching the rail.
    #[error("transfer request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The rail refused the transfer.
    #[error("transfer rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// An opaque collaborator that settles outbound transfers.
///
/// A transfer that returns `Ok` is committed; the office treats any
/// error as "no value moved" and rolls its own state back accordingly.
#[async_trait::async_trait]
pub trait PaymentRail: Send + Sync {
    async fn transfer(&self, transfer: Transfer) -> Result<(), RailError>;
}
