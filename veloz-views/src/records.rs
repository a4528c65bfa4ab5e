use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use veloz_shared::{OrderStatus, QuotationStatus};

/// Order snapshot as the external persistence service returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: Uuid,
    pub customer_name: String,
    pub vehicle_model: String,
    /// VND base units.
    pub total_amount: i64,
    pub status: OrderStatus,
    pub payment_ref: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Quotation snapshot from the persistence service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationRecord {
    pub id: Uuid,
    pub created_by: Uuid,
    pub customer_name: String,
    pub vehicle_model: String,
    pub quoted_price: i64,
    pub status: QuotationStatus,
    pub valid_until: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
