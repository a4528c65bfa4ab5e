use crate::gateway::{GatewayCallback, GatewayConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The transaction we initiated locally, fetched by the caller before the
/// gateway redirect lands. Amounts are in base currency units (VND).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedTransaction {
    pub transaction_ref: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentError {
    /// Gateway reported success but for a different amount than we charged.
    /// Surfaced as its own failure class, never silently accepted. Both
    /// figures are in scaled gateway units so sub-unit discrepancies stay
    /// visible.
    #[error("gateway amount {actual_raw} does not match expected amount {expected_raw} (scaled gateway units)")]
    AmountMismatch { expected_raw: i64, actual_raw: i64 },

    #[error("gateway reported failure code {code}")]
    GatewayFailure { code: String },
}

/// Result of mapping one gateway callback against the local transaction.
///
/// A pure value: reconciling the same callback twice yields an identical
/// outcome, so retried redirects and webhook replays are safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub succeeded: bool,
    pub gateway_code: String,
    /// Descaled amount in base currency units.
    pub amount: i64,
    pub transaction_ref: String,
    pub bank_code: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub failure: Option<PaymentError>,
}

/// Map a gateway callback to a payment outcome.
///
/// Succeeds only when both gateway status codes carry the success sentinel
/// AND the descaled amount matches what we expected to charge. Callers look
/// up `expected` by the callback's transaction ref, so a ref mismatch here
/// is programmer error.
pub fn reconcile(
    callback: &GatewayCallback,
    expected: &ExpectedTransaction,
    config: &GatewayConfig,
) -> PaymentOutcome {
    debug_assert_eq!(callback.transaction_ref, expected.transaction_ref);

    let amount = callback.amount_raw / config.amount_scale;
    let gateway_ok = callback.response_code == config.success_code
        && callback.transaction_status == config.success_code;

    let failure = if !gateway_ok {
        // Prefer the response code unless only the transaction status failed
        let code = if callback.response_code != config.success_code {
            callback.response_code.clone()
        } else {
            callback.transaction_status.clone()
        };
        Some(PaymentError::GatewayFailure { code })
    } else if callback.amount_raw != expected.amount * config.amount_scale {
        // Compared in scaled units: truncating division would let a
        // sub-unit remainder descale to the expected amount and slip through
        Some(PaymentError::AmountMismatch {
            expected_raw: expected.amount * config.amount_scale,
            actual_raw: callback.amount_raw,
        })
    } else {
        None
    };

    let succeeded = failure.is_none();
    if succeeded {
        tracing::info!(
            transaction_ref = %callback.transaction_ref,
            amount,
            "payment reconciled"
        );
    } else {
        tracing::warn!(
            transaction_ref = %callback.transaction_ref,
            response_code = %callback.response_code,
            transaction_status = %callback.transaction_status,
            "payment reconciliation failed"
        );
    }

    PaymentOutcome {
        succeeded,
        gateway_code: callback.response_code.clone(),
        amount,
        transaction_ref: callback.transaction_ref.clone(),
        bank_code: callback.bank_code.clone(),
        paid_at: if succeeded { callback.paid_at() } else { None },
        failure,
    }
}
