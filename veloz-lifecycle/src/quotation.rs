use crate::controller::{LifecycleError, TransitionOutcome};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use veloz_shared::{ActorRole, DomainEvent, EntityStatus, QuotationStatus, StatusGraph};

/// Only the staff member who drafted a quotation may edit it, and only
/// while it is still a draft.
pub fn can_edit_quotation(status: QuotationStatus, actor: ActorRole, is_creator: bool) -> bool {
    status == QuotationStatus::Draft && is_creator && actor.at_least(ActorRole::Staff)
}

/// Deadline-driven expiry. No actor is involved: the transition is legal
/// for any live quotation once its validity deadline has passed.
pub fn expire_quotation(
    quotation_id: Uuid,
    current: QuotationStatus,
    valid_until: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<TransitionOutcome, LifecycleError> {
    if current.is_terminal() {
        return Err(LifecycleError::IllegalTransition {
            from: format!("{:?}", current),
            to: format!("{:?}", QuotationStatus::Expired),
        });
    }
    if now <= valid_until {
        return Err(LifecycleError::Validation(
            "validity deadline has not passed".to_string(),
        ));
    }

    Ok(TransitionOutcome {
        from: EntityStatus::Quotation(current),
        next: EntityStatus::Quotation(QuotationStatus::Expired),
        events: vec![DomainEvent::QuotationExpired { quotation_id }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_only_creator_edits_drafts() {
        assert!(can_edit_quotation(
            QuotationStatus::Draft,
            ActorRole::Staff,
            true
        ));
        assert!(!can_edit_quotation(
            QuotationStatus::Draft,
            ActorRole::Staff,
            false
        ));
        assert!(!can_edit_quotation(
            QuotationStatus::Pending,
            ActorRole::Staff,
            true
        ));
        assert!(!can_edit_quotation(
            QuotationStatus::Draft,
            ActorRole::Customer,
            true
        ));
    }

    #[test]
    fn test_expiry_after_deadline() {
        let now = Utc::now();
        let outcome = expire_quotation(
            Uuid::new_v4(),
            QuotationStatus::Pending,
            now - Duration::hours(1),
            now,
        )
        .unwrap();
        assert_eq!(
            outcome.next,
            EntityStatus::Quotation(QuotationStatus::Expired)
        );
    }

    #[test]
    fn test_expiry_before_deadline_rejected() {
        let now = Utc::now();
        assert!(matches!(
            expire_quotation(
                Uuid::new_v4(),
                QuotationStatus::Pending,
                now + Duration::days(3),
                now,
            ),
            Err(LifecycleError::Validation(_))
        ));
    }

    #[test]
    fn test_judged_quotation_never_expires() {
        let now = Utc::now();
        for current in [
            QuotationStatus::Approved,
            QuotationStatus::Rejected,
            QuotationStatus::Expired,
        ] {
            assert!(matches!(
                expire_quotation(Uuid::new_v4(), current, now - Duration::hours(1), now),
                Err(LifecycleError::IllegalTransition { .. })
            ));
        }
    }
}
