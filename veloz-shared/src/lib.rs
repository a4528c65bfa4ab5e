pub mod events;
pub mod role;
pub mod status;
pub mod transitions;

pub use events::DomainEvent;
pub use role::ActorRole;
pub use status::{
    DealerOrderStatus, EntityKind, EntityStatus, OrderStatus, QuotationStatus, TestDriveStatus,
};
pub use transitions::{can_transition, next_allowed, required_role, Edge, StatusGraph};
