use crate::records::{OrderRecord, QuotationRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;
use veloz_shared::{OrderStatus, QuotationStatus};

/// Boundary to the external order/quotation persistence service.
///
/// The core only reads snapshots and writes back a computed status; all
/// storage, serialization over the wire, and retry policy live behind this
/// trait.
#[async_trait]
pub trait DealerStore: Send + Sync {
    async fn get_order(
        &self,
        id: Uuid,
    ) -> Result<Option<OrderRecord>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_quotation(
        &self,
        id: Uuid,
    ) -> Result<Option<QuotationRecord>, Box<dyn std::error::Error + Send + Sync>>;

    async fn set_order_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn set_quotation_status(
        &self,
        id: Uuid,
        status: QuotationStatus,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn list_orders(
        &self,
    ) -> Result<Vec<OrderRecord>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_quotations(
        &self,
    ) -> Result<Vec<QuotationRecord>, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory store used by tests and local demos.
#[derive(Default)]
pub struct InMemoryDealerStore {
    orders: RwLock<HashMap<Uuid, OrderRecord>>,
    quotations: RwLock<HashMap<Uuid, QuotationRecord>>,
}

impl InMemoryDealerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_order(&self, order: OrderRecord) {
        self.orders.write().unwrap().insert(order.id, order);
    }

    pub fn seed_quotation(&self, quotation: QuotationRecord) {
        self.quotations
            .write()
            .unwrap()
            .insert(quotation.id, quotation);
    }
}

#[async_trait]
impl DealerStore for InMemoryDealerStore {
    async fn get_order(
        &self,
        id: Uuid,
    ) -> Result<Option<OrderRecord>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.orders.read().unwrap().get(&id).cloned())
    }

    async fn get_quotation(
        &self,
        id: Uuid,
    ) -> Result<Option<QuotationRecord>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.quotations.read().unwrap().get(&id).cloned())
    }

    async fn set_order_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut orders = self.orders.write().unwrap();
        let order = orders.get_mut(&id).ok_or("order not found")?;
        order.status = status;
        order.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn set_quotation_status(
        &self,
        id: Uuid,
        status: QuotationStatus,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut quotations = self.quotations.write().unwrap();
        let quotation = quotations.get_mut(&id).ok_or("quotation not found")?;
        quotation.status = status;
        Ok(())
    }

    async fn list_orders(
        &self,
    ) -> Result<Vec<OrderRecord>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.orders.read().unwrap().values().cloned().collect())
    }

    async fn list_quotations(
        &self,
    ) -> Result<Vec<QuotationRecord>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.quotations.read().unwrap().values().cloned().collect())
    }
}
