pub mod controller;
pub mod payment_apply;
pub mod quotation;

pub use controller::{
    request_transition, DealerOrderAction, LifecycleAction, LifecycleError, OrderAction,
    QuotationAction, TestDriveAction, TransitionOutcome, TransitionRequest,
};
pub use payment_apply::{apply_payment, LedgerStatus, PaymentApplication, ReconciliationLedger};
pub use quotation::{can_edit_quotation, expire_quotation};
