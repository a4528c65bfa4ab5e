use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain events emitted by the lifecycle controller.
///
/// The controller only describes what happened; dispatching to subscribers
/// (notification, invoicing, reporting) is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    OrderConfirmed {
        order_id: Uuid,
    },
    OrderDeliveryStarted {
        order_id: Uuid,
    },
    OrderCompleted {
        order_id: Uuid,
    },
    OrderCancelled {
        order_id: Uuid,
        reason: String,
    },
    /// Fired alongside OrderCompleted so the invoicing collaborator can pick
    /// it up without inspecting order state.
    InvoiceRequested {
        order_id: Uuid,
    },
    PaymentRecorded {
        order_id: Uuid,
        transaction_ref: String,
        amount: i64,
    },
    DealerOrderConfirmed {
        dealer_order_id: Uuid,
    },
    DealerOrderDispatched {
        dealer_order_id: Uuid,
    },
    DealerOrderDelivered {
        dealer_order_id: Uuid,
    },
    DealerOrderDisputeOpened {
        dealer_order_id: Uuid,
        reason: String,
    },
    DealerOrderDisputeResolved {
        dealer_order_id: Uuid,
    },
    DealerOrderCancelled {
        dealer_order_id: Uuid,
        reason: String,
    },
    QuotationSubmitted {
        quotation_id: Uuid,
    },
    QuotationApproved {
        quotation_id: Uuid,
    },
    QuotationRejected {
        quotation_id: Uuid,
        reason: Option<String>,
    },
    QuotationExpired {
        quotation_id: Uuid,
    },
    TestDriveConfirmed {
        test_drive_id: Uuid,
    },
    TestDriveCompleted {
        test_drive_id: Uuid,
    },
    TestDriveCancelled {
        test_drive_id: Uuid,
        reason: String,
    },
}
