use serde::{Deserialize, Serialize};

/// Retail order status in the sales lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Delivering,
    Completed,
    Cancelled,
}

/// Dealer-to-manufacturer order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealerOrderStatus {
    Pending,
    Confirmed,
    InTransit,
    Delivered,
    Cancelled,
    Disputed,
}

/// Quotation status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotationStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    Expired,
}

/// Test drive appointment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestDriveStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// The entity families tracked by the lifecycle core
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Order,
    DealerOrder,
    Quotation,
    TestDrive,
}

/// A status tagged with the entity family it belongs to.
///
/// Lets callers that handle mixed entity kinds (listing screens, the
/// lifecycle controller) carry one value instead of four parallel fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    Order(OrderStatus),
    DealerOrder(DealerOrderStatus),
    Quotation(QuotationStatus),
    TestDrive(TestDriveStatus),
}

impl EntityStatus {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityStatus::Order(_) => EntityKind::Order,
            EntityStatus::DealerOrder(_) => EntityKind::DealerOrder,
            EntityStatus::Quotation(_) => EntityKind::Quotation,
            EntityStatus::TestDrive(_) => EntityKind::TestDrive,
        }
    }
}
