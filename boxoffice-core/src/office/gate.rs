//! Reentrancy gate for the value-moving operations.
//!
//! The payment rail is an external collaborator. If its transfer path can
//! call back into the office before the outer operation finishes, the
//! nested purchase or cancellation would observe a half-updated ticket
//! collection and could double-spend a refund. The gate rejects such
//! nested entries.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::OfficeError;

/// In-progress flag shared by `buy_ticket` and `cancel_ticket`.
#[derive(Debug)]
pub(super) struct ReentrancyGate {
    busy: Arc<AtomicBool>,
}

impl ReentrancyGate {
    pub(super) fn new() -> Self {
        Self {
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Acquire the gate, failing with [`OfficeError::ReentrantCall`] if a
    /// guarded operation is already in flight.
    ///
    /// The returned permit releases the gate when dropped, which covers
    /// every exit path including early error returns.
    pub(super) fn enter(&self) -> Result<GatePermit, OfficeError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_err()
        {
            return Err(OfficeError::ReentrantCall);
        }
        Ok(GatePermit {
            busy: Arc::clone(&self.busy),
        })
    }
}

/// Scoped acquisition of the gate.
#[derive(Debug)]
pub(super) struct GatePermit {
    busy: Arc<AtomicBool>,
}

impl Drop for GatePermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_entry_is_rejected() {
        let gate = ReentrancyGate::new();
        let permit = gate.enter();
        assert!(permit.is_ok());
        assert!(matches!(gate.enter(), Err(OfficeError::ReentrantCall)));
    }

    #[test]
    fn test_gate_reopens_when_permit_drops() {
        let gate = ReentrancyGate::new();
        {
            let _permit = gate.enter();
        }
        assert!(gate.enter().is_ok());
    }

    #[test]
    fn test_gate_reopens_after_error_path() {
        let gate = ReentrancyGate::new();
        // Simulate an operation that acquires the gate and bails early.
        let failing_op = |gate: &ReentrancyGate| -> Result<(), OfficeError> {
            let _permit = gate.enter()?;
            Err(OfficeError::EventNotFound)
        };
        assert!(failing_op(&gate).is_err());
        assert!(gate.enter().is_ok());
    }
}
