use serde::{Deserialize, Serialize};

/// Actor roles supplied by the external authentication service.
///
/// Roles form a ladder: an edge annotated with a minimal role also admits
/// every role above it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorRole {
    Customer,
    Staff,
    Manager,
    Admin,
}

impl ActorRole {
    fn rank(self) -> u8 {
        match self {
            ActorRole::Customer => 0,
            ActorRole::Staff => 1,
            ActorRole::Manager => 2,
            ActorRole::Admin => 3,
        }
    }

    /// True if this role meets or exceeds the required minimum.
    pub fn at_least(self, required: ActorRole) -> bool {
        self.rank() >= required.rank()
    }
}
