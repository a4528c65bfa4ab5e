use crate::controller::LifecycleError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use veloz_payment::PaymentOutcome;
use veloz_shared::{DomainEvent, OrderStatus};

/// Result of applying a reconciled payment to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentApplication {
    pub next: OrderStatus,
    pub events: Vec<DomainEvent>,
}

/// Fold a payment outcome into the order lifecycle.
///
/// System-driven rather than role-gated: the gateway's word, not an actor,
/// moves the order. A failed outcome changes nothing; a successful outcome
/// confirms a pending order; a replay against an already-confirmed order is
/// a no-op so retried callbacks stay safe.
pub fn apply_payment(
    order_id: Uuid,
    current: OrderStatus,
    outcome: &PaymentOutcome,
) -> Result<PaymentApplication, LifecycleError> {
    if !outcome.succeeded {
        return Ok(PaymentApplication {
            next: current,
            events: Vec::new(),
        });
    }

    match current {
        OrderStatus::Pending => Ok(PaymentApplication {
            next: OrderStatus::Confirmed,
            events: vec![
                DomainEvent::PaymentRecorded {
                    order_id,
                    transaction_ref: outcome.transaction_ref.clone(),
                    amount: outcome.amount,
                },
                DomainEvent::OrderConfirmed { order_id },
            ],
        }),
        // Replayed callback after the transition already happened
        OrderStatus::Confirmed => Ok(PaymentApplication {
            next: OrderStatus::Confirmed,
            events: Vec::new(),
        }),
        other => Err(LifecycleError::IllegalTransition {
            from: format!("{:?}", other),
            to: format!("{:?}", OrderStatus::Confirmed),
        }),
    }
}

/// Seen-transaction record for one callback ref.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerStatus {
    FirstSeen,
    Replayed,
}

/// Caller-side dedup of gateway callbacks by transaction ref.
///
/// Reconciliation itself is pure; this ledger is the piece the caller uses
/// to make sure the downstream order transition runs at most once per ref.
#[derive(Debug, Default)]
pub struct ReconciliationLedger {
    seen: HashMap<String, PaymentOutcome>,
}

impl ReconciliationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome, reporting whether this ref was already handled.
    pub fn record(&mut self, outcome: &PaymentOutcome) -> LedgerStatus {
        match self.seen.get(&outcome.transaction_ref) {
            Some(stored) => {
                if stored != outcome {
                    tracing::warn!(
                        transaction_ref = %outcome.transaction_ref,
                        "replayed callback differs from the recorded outcome"
                    );
                }
                LedgerStatus::Replayed
            }
            None => {
                self.seen
                    .insert(outcome.transaction_ref.clone(), outcome.clone());
                LedgerStatus::FirstSeen
            }
        }
    }

    pub fn get(&self, transaction_ref: &str) -> Option<&PaymentOutcome> {
        self.seen.get(transaction_ref)
    }
}
