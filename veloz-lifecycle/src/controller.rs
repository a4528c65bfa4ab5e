use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use veloz_shared::transitions::required_role;
use veloz_shared::{
    ActorRole, DealerOrderStatus, DomainEvent, EntityStatus, OrderStatus, QuotationStatus,
    StatusGraph, TestDriveStatus,
};

/// Actions a caller may request against a retail order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderAction {
    Confirm,
    StartDelivery,
    Complete,
    Cancel { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealerOrderAction {
    Confirm,
    Dispatch,
    MarkDelivered,
    OpenDispute { reason: String },
    ResolveDispute,
    Cancel { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotationAction {
    Submit,
    Approve,
    Reject { reason: Option<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestDriveAction {
    Confirm,
    Complete,
    Cancel { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LifecycleAction {
    Order(OrderAction),
    DealerOrder(DealerOrderAction),
    Quotation(QuotationAction),
    TestDrive(TestDriveAction),
}

/// A fully-formed transition request: the controller receives the actor's
/// role explicitly rather than reading ambient session state.
#[derive(Debug, Clone)]
pub struct TransitionRequest {
    pub entity_id: Uuid,
    pub current: EntityStatus,
    pub action: LifecycleAction,
    pub actor: ActorRole,
}

/// What the controller decided: the canonical next state plus the domain
/// events describing it. Nothing is persisted or dispatched here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    pub from: EntityStatus,
    pub next: EntityStatus,
    pub events: Vec<DomainEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("illegal transition from {from} to {to}")]
    IllegalTransition { from: String, to: String },

    #[error("role {actual:?} may not perform this transition (requires {required:?})")]
    Unauthorized {
        required: ActorRole,
        actual: ActorRole,
    },

    #[error("validation failed: {0}")]
    Validation(String),
}

/// Evaluate a role-gated transition request.
///
/// Legality comes from the shared transition tables; this layer adds the
/// action-to-target mapping, per-action validation, and the emitted events.
/// Requests pairing an action with the wrong entity kind are programmer
/// error and abort loudly.
pub fn request_transition(req: &TransitionRequest) -> Result<TransitionOutcome, LifecycleError> {
    let outcome = match (&req.current, &req.action) {
        (EntityStatus::Order(current), LifecycleAction::Order(action)) => {
            order_transition(req.entity_id, *current, action, req.actor)?
        }
        (EntityStatus::DealerOrder(current), LifecycleAction::DealerOrder(action)) => {
            dealer_order_transition(req.entity_id, *current, action, req.actor)?
        }
        (EntityStatus::Quotation(current), LifecycleAction::Quotation(action)) => {
            quotation_transition(req.entity_id, *current, action, req.actor)?
        }
        (EntityStatus::TestDrive(current), LifecycleAction::TestDrive(action)) => {
            test_drive_transition(req.entity_id, *current, action, req.actor)?
        }
        (current, action) => panic!(
            "action {:?} does not apply to entity kind {:?}",
            action,
            current.kind()
        ),
    };

    tracing::info!(
        entity_id = %req.entity_id,
        from = ?outcome.from,
        next = ?outcome.next,
        actor = ?req.actor,
        "transition accepted"
    );
    Ok(outcome)
}

/// Shared edge check: missing edge beats role, so probing with a stronger
/// role never turns an illegal transition into an authorization error.
fn check_edge<S: StatusGraph + fmt::Debug>(
    from: S,
    to: S,
    actor: ActorRole,
) -> Result<(), LifecycleError> {
    match required_role(from, to) {
        None => Err(LifecycleError::IllegalTransition {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }),
        Some(required) if !actor.at_least(required) => {
            tracing::warn!(?from, ?to, ?actor, ?required, "transition denied");
            Err(LifecycleError::Unauthorized {
                required,
                actual: actor,
            })
        }
        Some(_) => Ok(()),
    }
}

fn require_reason(reason: &str) -> Result<(), LifecycleError> {
    if reason.trim().is_empty() {
        return Err(LifecycleError::Validation(
            "cancellation requires a reason".to_string(),
        ));
    }
    Ok(())
}

fn order_transition(
    order_id: Uuid,
    current: OrderStatus,
    action: &OrderAction,
    actor: ActorRole,
) -> Result<TransitionOutcome, LifecycleError> {
    let (target, events) = match action {
        OrderAction::Confirm => (
            OrderStatus::Confirmed,
            vec![DomainEvent::OrderConfirmed { order_id }],
        ),
        OrderAction::StartDelivery => (
            OrderStatus::Delivering,
            vec![DomainEvent::OrderDeliveryStarted { order_id }],
        ),
        OrderAction::Complete => (
            OrderStatus::Completed,
            vec![
                DomainEvent::OrderCompleted { order_id },
                DomainEvent::InvoiceRequested { order_id },
            ],
        ),
        OrderAction::Cancel { reason } => {
            require_reason(reason)?;
            (
                OrderStatus::Cancelled,
                vec![DomainEvent::OrderCancelled {
                    order_id,
                    reason: reason.clone(),
                }],
            )
        }
    };

    check_edge(current, target, actor)?;
    Ok(TransitionOutcome {
        from: EntityStatus::Order(current),
        next: EntityStatus::Order(target),
        events,
    })
}

fn dealer_order_transition(
    dealer_order_id: Uuid,
    current: DealerOrderStatus,
    action: &DealerOrderAction,
    actor: ActorRole,
) -> Result<TransitionOutcome, LifecycleError> {
    let (target, events) = match action {
        DealerOrderAction::Confirm => (
            DealerOrderStatus::Confirmed,
            vec![DomainEvent::DealerOrderConfirmed { dealer_order_id }],
        ),
        DealerOrderAction::Dispatch => (
            DealerOrderStatus::InTransit,
            vec![DomainEvent::DealerOrderDispatched { dealer_order_id }],
        ),
        DealerOrderAction::MarkDelivered => (
            DealerOrderStatus::Delivered,
            vec![DomainEvent::DealerOrderDelivered { dealer_order_id }],
        ),
        DealerOrderAction::OpenDispute { reason } => {
            require_reason(reason)?;
            (
                DealerOrderStatus::Disputed,
                vec![DomainEvent::DealerOrderDisputeOpened {
                    dealer_order_id,
                    reason: reason.clone(),
                }],
            )
        }
        DealerOrderAction::ResolveDispute => (
            DealerOrderStatus::Delivered,
            vec![DomainEvent::DealerOrderDisputeResolved { dealer_order_id }],
        ),
        DealerOrderAction::Cancel { reason } => {
            require_reason(reason)?;
            (
                DealerOrderStatus::Cancelled,
                vec![DomainEvent::DealerOrderCancelled {
                    dealer_order_id,
                    reason: reason.clone(),
                }],
            )
        }
    };

    check_edge(current, target, actor)?;
    Ok(TransitionOutcome {
        from: EntityStatus::DealerOrder(current),
        next: EntityStatus::DealerOrder(target),
        events,
    })
}

fn quotation_transition(
    quotation_id: Uuid,
    current: QuotationStatus,
    action: &QuotationAction,
    actor: ActorRole,
) -> Result<TransitionOutcome, LifecycleError> {
    let (target, events) = match action {
        QuotationAction::Submit => (
            QuotationStatus::Pending,
            vec![DomainEvent::QuotationSubmitted { quotation_id }],
        ),
        QuotationAction::Approve => (
            QuotationStatus::Approved,
            vec![DomainEvent::QuotationApproved { quotation_id }],
        ),
        QuotationAction::Reject { reason } => (
            QuotationStatus::Rejected,
            vec![DomainEvent::QuotationRejected {
                quotation_id,
                reason: reason.clone(),
            }],
        ),
    };

    check_edge(current, target, actor)?;
    Ok(TransitionOutcome {
        from: EntityStatus::Quotation(current),
        next: EntityStatus::Quotation(target),
        events,
    })
}

fn test_drive_transition(
    test_drive_id: Uuid,
    current: TestDriveStatus,
    action: &TestDriveAction,
    actor: ActorRole,
) -> Result<TransitionOutcome, LifecycleError> {
    let (target, events) = match action {
        TestDriveAction::Confirm => (
            TestDriveStatus::Confirmed,
            vec![DomainEvent::TestDriveConfirmed { test_drive_id }],
        ),
        TestDriveAction::Complete => (
            TestDriveStatus::Completed,
            vec![DomainEvent::TestDriveCompleted { test_drive_id }],
        ),
        TestDriveAction::Cancel { reason } => {
            require_reason(reason)?;
            (
                TestDriveStatus::Cancelled,
                vec![DomainEvent::TestDriveCancelled {
                    test_drive_id,
                    reason: reason.clone(),
                }],
            )
        }
    };

    check_edge(current, target, actor)?;
    Ok(TransitionOutcome {
        from: EntityStatus::TestDrive(current),
        next: EntityStatus::TestDrive(target),
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_request(
        current: OrderStatus,
        action: OrderAction,
        actor: ActorRole,
    ) -> TransitionRequest {
        TransitionRequest {
            entity_id: Uuid::new_v4(),
            current: EntityStatus::Order(current),
            action: LifecycleAction::Order(action),
            actor,
        }
    }

    #[test]
    fn test_staff_cannot_confirm_manager_edge() {
        let req = order_request(OrderStatus::Pending, OrderAction::Confirm, ActorRole::Staff);
        assert_eq!(
            request_transition(&req),
            Err(LifecycleError::Unauthorized {
                required: ActorRole::Manager,
                actual: ActorRole::Staff,
            })
        );
    }

    #[test]
    fn test_manager_confirms_pending_order() {
        let req = order_request(
            OrderStatus::Pending,
            OrderAction::Confirm,
            ActorRole::Manager,
        );
        let outcome = request_transition(&req).unwrap();

        assert_eq!(outcome.next, EntityStatus::Order(OrderStatus::Confirmed));
        assert_eq!(
            outcome.events,
            vec![DomainEvent::OrderConfirmed {
                order_id: req.entity_id
            }]
        );
    }

    #[test]
    fn test_completion_requests_invoice() {
        let req = order_request(
            OrderStatus::Delivering,
            OrderAction::Complete,
            ActorRole::Staff,
        );
        let outcome = request_transition(&req).unwrap();
        assert!(outcome
            .events
            .contains(&DomainEvent::InvoiceRequested {
                order_id: req.entity_id
            }));
    }

    #[test]
    fn test_cancel_without_reason_is_validation_error() {
        let req = order_request(
            OrderStatus::Pending,
            OrderAction::Cancel {
                reason: "   ".to_string(),
            },
            ActorRole::Staff,
        );
        assert!(matches!(
            request_transition(&req),
            Err(LifecycleError::Validation(_))
        ));
    }

    #[test]
    fn test_cancel_carries_reason_in_event() {
        let req = order_request(
            OrderStatus::Confirmed,
            OrderAction::Cancel {
                reason: "financing fell through".to_string(),
            },
            ActorRole::Staff,
        );
        let outcome = request_transition(&req).unwrap();
        assert_eq!(
            outcome.events,
            vec![DomainEvent::OrderCancelled {
                order_id: req.entity_id,
                reason: "financing fell through".to_string(),
            }]
        );
    }

    #[test]
    fn test_terminal_order_rejects_everything() {
        for current in [OrderStatus::Completed, OrderStatus::Cancelled] {
            let req = order_request(current, OrderAction::Confirm, ActorRole::Admin);
            assert!(matches!(
                request_transition(&req),
                Err(LifecycleError::IllegalTransition { .. })
            ));
        }
    }

    #[test]
    fn test_quotation_judgement_needs_manager() {
        let req = TransitionRequest {
            entity_id: Uuid::new_v4(),
            current: EntityStatus::Quotation(QuotationStatus::Pending),
            action: LifecycleAction::Quotation(QuotationAction::Approve),
            actor: ActorRole::Staff,
        };
        assert!(matches!(
            request_transition(&req),
            Err(LifecycleError::Unauthorized { .. })
        ));

        let req = TransitionRequest {
            actor: ActorRole::Manager,
            ..req
        };
        let outcome = request_transition(&req).unwrap();
        assert_eq!(
            outcome.next,
            EntityStatus::Quotation(QuotationStatus::Approved)
        );
    }

    #[test]
    fn test_judged_quotation_cannot_be_rejudged() {
        for current in [
            QuotationStatus::Approved,
            QuotationStatus::Rejected,
            QuotationStatus::Expired,
        ] {
            let req = TransitionRequest {
                entity_id: Uuid::new_v4(),
                current: EntityStatus::Quotation(current),
                action: LifecycleAction::Quotation(QuotationAction::Reject { reason: None }),
                actor: ActorRole::Admin,
            };
            assert!(matches!(
                request_transition(&req),
                Err(LifecycleError::IllegalTransition { .. })
            ));
        }
    }

    #[test]
    fn test_dispute_resolution_round_trip() {
        let id = Uuid::new_v4();
        let open = TransitionRequest {
            entity_id: id,
            current: EntityStatus::DealerOrder(DealerOrderStatus::Delivered),
            action: LifecycleAction::DealerOrder(DealerOrderAction::OpenDispute {
                reason: "vehicle arrived with body damage".to_string(),
            }),
            actor: ActorRole::Staff,
        };
        let opened = request_transition(&open).unwrap();
        assert_eq!(
            opened.next,
            EntityStatus::DealerOrder(DealerOrderStatus::Disputed)
        );

        let resolve = TransitionRequest {
            entity_id: id,
            current: opened.next,
            action: LifecycleAction::DealerOrder(DealerOrderAction::ResolveDispute),
            actor: ActorRole::Manager,
        };
        let resolved = request_transition(&resolve).unwrap();
        assert_eq!(
            resolved.next,
            EntityStatus::DealerOrder(DealerOrderStatus::Delivered)
        );
    }

    #[test]
    fn test_customer_can_cancel_own_test_drive() {
        let req = TransitionRequest {
            entity_id: Uuid::new_v4(),
            current: EntityStatus::TestDrive(TestDriveStatus::Confirmed),
            action: LifecycleAction::TestDrive(TestDriveAction::Cancel {
                reason: "schedule conflict".to_string(),
            }),
            actor: ActorRole::Customer,
        };
        let outcome = request_transition(&req).unwrap();
        assert_eq!(
            outcome.next,
            EntityStatus::TestDrive(TestDriveStatus::Cancelled)
        );
    }

    #[test]
    #[should_panic(expected = "does not apply to entity kind")]
    fn test_mismatched_action_kind_aborts() {
        let req = TransitionRequest {
            entity_id: Uuid::new_v4(),
            current: EntityStatus::Order(OrderStatus::Pending),
            action: LifecycleAction::Quotation(QuotationAction::Approve),
            actor: ActorRole::Admin,
        };
        let _ = request_transition(&req);
    }
}
