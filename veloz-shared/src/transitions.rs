use crate::role::ActorRole;
use crate::status::{DealerOrderStatus, EntityStatus, OrderStatus, QuotationStatus, TestDriveStatus};

/// One legal edge in a transition table: the target state plus the minimal
/// role allowed to traverse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<S: 'static> {
    pub to: S,
    pub min_role: ActorRole,
}

/// Static transition table for one status family.
///
/// Any (from, to) pair not present in the table is illegal regardless of
/// role; terminal states have no outgoing edges.
pub trait StatusGraph: Sized + Copy + Eq + 'static {
    fn outgoing(self) -> &'static [Edge<Self>];

    fn is_terminal(self) -> bool {
        self.outgoing().is_empty()
    }
}

/// Pure legality lookup. Fails closed: unknown edges are illegal.
pub fn can_transition<S: StatusGraph>(from: S, to: S, role: ActorRole) -> bool {
    from.outgoing()
        .iter()
        .any(|edge| edge.to == to && role.at_least(edge.min_role))
}

/// Minimal role required for an edge, if the edge exists at all.
pub fn required_role<S: StatusGraph>(from: S, to: S) -> Option<ActorRole> {
    from.outgoing()
        .iter()
        .find(|edge| edge.to == to)
        .map(|edge| edge.min_role)
}

/// All states reachable from `from` in one step, irrespective of role.
pub fn next_allowed<S: StatusGraph>(from: S) -> Vec<S> {
    from.outgoing().iter().map(|edge| edge.to).collect()
}

impl StatusGraph for OrderStatus {
    fn outgoing(self) -> &'static [Edge<Self>] {
        use OrderStatus::*;
        match self {
            Pending => &[
                Edge { to: Confirmed, min_role: ActorRole::Manager },
                Edge { to: Cancelled, min_role: ActorRole::Staff },
            ],
            Confirmed => &[
                Edge { to: Delivering, min_role: ActorRole::Staff },
                Edge { to: Cancelled, min_role: ActorRole::Staff },
            ],
            Delivering => &[
                Edge { to: Completed, min_role: ActorRole::Staff },
                Edge { to: Cancelled, min_role: ActorRole::Staff },
            ],
            Completed | Cancelled => &[],
        }
    }
}

impl StatusGraph for DealerOrderStatus {
    fn outgoing(self) -> &'static [Edge<Self>] {
        use DealerOrderStatus::*;
        match self {
            Pending => &[
                Edge { to: Confirmed, min_role: ActorRole::Manager },
                Edge { to: Cancelled, min_role: ActorRole::Staff },
            ],
            Confirmed => &[
                Edge { to: InTransit, min_role: ActorRole::Staff },
                Edge { to: Cancelled, min_role: ActorRole::Staff },
            ],
            InTransit => &[
                Edge { to: Delivered, min_role: ActorRole::Staff },
                Edge { to: Disputed, min_role: ActorRole::Staff },
            ],
            // Delivered is final unless a dispute is opened against it.
            Delivered => &[Edge { to: Disputed, min_role: ActorRole::Staff }],
            Disputed => &[
                Edge { to: Delivered, min_role: ActorRole::Manager },
                Edge { to: Cancelled, min_role: ActorRole::Manager },
            ],
            Cancelled => &[],
        }
    }
}

impl StatusGraph for QuotationStatus {
    fn outgoing(self) -> &'static [Edge<Self>] {
        use QuotationStatus::*;
        match self {
            Draft => &[
                // Expiry edges are deadline-driven; the role is not consulted
                // on that path, only the edge's existence.
                Edge { to: Pending, min_role: ActorRole::Staff },
                Edge { to: Expired, min_role: ActorRole::Customer },
            ],
            Pending => &[
                Edge { to: Approved, min_role: ActorRole::Manager },
                Edge { to: Rejected, min_role: ActorRole::Manager },
                Edge { to: Expired, min_role: ActorRole::Customer },
            ],
            Approved | Rejected | Expired => &[],
        }
    }
}

impl StatusGraph for TestDriveStatus {
    fn outgoing(self) -> &'static [Edge<Self>] {
        use TestDriveStatus::*;
        match self {
            Pending => &[
                Edge { to: Confirmed, min_role: ActorRole::Staff },
                Edge { to: Cancelled, min_role: ActorRole::Customer },
            ],
            Confirmed => &[
                Edge { to: Completed, min_role: ActorRole::Staff },
                Edge { to: Cancelled, min_role: ActorRole::Customer },
            ],
            Completed | Cancelled => &[],
        }
    }
}

impl EntityStatus {
    /// Kind-dispatched legality check.
    ///
    /// Mixing entity kinds is programmer error, not user input, and aborts
    /// loudly.
    pub fn can_transition_to(self, to: EntityStatus, role: ActorRole) -> bool {
        match (self, to) {
            (EntityStatus::Order(f), EntityStatus::Order(t)) => can_transition(f, t, role),
            (EntityStatus::DealerOrder(f), EntityStatus::DealerOrder(t)) => {
                can_transition(f, t, role)
            }
            (EntityStatus::Quotation(f), EntityStatus::Quotation(t)) => can_transition(f, t, role),
            (EntityStatus::TestDrive(f), EntityStatus::TestDrive(t)) => can_transition(f, t, role),
            (from, to) => panic!(
                "mismatched entity kinds: {:?} -> {:?}",
                from.kind(),
                to.kind()
            ),
        }
    }

    pub fn is_terminal(self) -> bool {
        match self {
            EntityStatus::Order(s) => s.is_terminal(),
            EntityStatus::DealerOrder(s) => s.is_terminal(),
            EntityStatus::Quotation(s) => s.is_terminal(),
            EntityStatus::TestDrive(s) => s.is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ORDER: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Delivering,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    #[test]
    fn test_order_forward_chain() {
        assert!(can_transition(
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            ActorRole::Manager
        ));
        assert!(can_transition(
            OrderStatus::Confirmed,
            OrderStatus::Delivering,
            ActorRole::Staff
        ));
        assert!(can_transition(
            OrderStatus::Delivering,
            OrderStatus::Completed,
            ActorRole::Staff
        ));
        // No skipping ahead
        assert!(!can_transition(
            OrderStatus::Pending,
            OrderStatus::Completed,
            ActorRole::Admin
        ));
    }

    #[test]
    fn test_fails_closed_on_role() {
        // The edge exists but staff rank is below the manager minimum
        assert!(!can_transition(
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            ActorRole::Staff
        ));
    }

    #[test]
    fn test_terminal_states_have_no_edges() {
        assert!(next_allowed(OrderStatus::Completed).is_empty());
        assert!(next_allowed(OrderStatus::Cancelled).is_empty());
        assert!(next_allowed(QuotationStatus::Approved).is_empty());
        assert!(next_allowed(QuotationStatus::Rejected).is_empty());
        assert!(next_allowed(QuotationStatus::Expired).is_empty());
        assert!(next_allowed(DealerOrderStatus::Cancelled).is_empty());
        assert!(next_allowed(TestDriveStatus::Completed).is_empty());
    }

    #[test]
    fn test_cancel_reachable_from_every_active_order_state() {
        for from in ALL_ORDER {
            if from.is_terminal() {
                continue;
            }
            assert!(
                next_allowed(from).contains(&OrderStatus::Cancelled),
                "{:?} should allow cancellation",
                from
            );
        }
    }

    #[test]
    fn test_dispute_edges() {
        assert!(can_transition(
            DealerOrderStatus::InTransit,
            DealerOrderStatus::Disputed,
            ActorRole::Staff
        ));
        assert!(can_transition(
            DealerOrderStatus::Delivered,
            DealerOrderStatus::Disputed,
            ActorRole::Staff
        ));
        // Resolution paths need a manager
        assert!(!can_transition(
            DealerOrderStatus::Disputed,
            DealerOrderStatus::Delivered,
            ActorRole::Staff
        ));
        assert!(can_transition(
            DealerOrderStatus::Disputed,
            DealerOrderStatus::Cancelled,
            ActorRole::Manager
        ));
        // Disputes never open from pending stock orders
        assert!(!can_transition(
            DealerOrderStatus::Pending,
            DealerOrderStatus::Disputed,
            ActorRole::Admin
        ));
    }

    #[test]
    fn test_transition_closure_stays_in_taxonomy() {
        // Every reachable state has its own row in the table, so walking
        // edges can never leave the enum.
        for from in ALL_ORDER {
            for to in next_allowed(from) {
                assert!(ALL_ORDER.contains(&to));
            }
        }
    }

    #[test]
    #[should_panic(expected = "mismatched entity kinds")]
    fn test_kind_mismatch_aborts() {
        EntityStatus::Order(OrderStatus::Pending).can_transition_to(
            EntityStatus::Quotation(QuotationStatus::Pending),
            ActorRole::Admin,
        );
    }
}
