use crate::records::{OrderRecord, QuotationRecord};
use crate::repository::DealerStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use veloz_shared::{next_allowed, OrderStatus, QuotationStatus};

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageRequest {
    /// 1-based page index.
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// One row of the order listing screen. `next_statuses` comes straight from
/// the shared transition table so screens never re-derive legality ad hoc.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRow {
    pub id: Uuid,
    pub customer_name: String,
    pub vehicle_model: String,
    pub total_amount: i64,
    pub status: OrderStatus,
    pub next_statuses: Vec<OrderStatus>,
}

impl From<OrderRecord> for OrderRow {
    fn from(record: OrderRecord) -> Self {
        let next_statuses = next_allowed(record.status);
        Self {
            id: record.id,
            customer_name: record.customer_name,
            vehicle_model: record.vehicle_model,
            total_amount: record.total_amount,
            status: record.status,
            next_statuses,
        }
    }
}

fn paginate<T>(mut items: Vec<T>, req: PageRequest) -> Page<T> {
    let page_size = req.page_size.max(1);
    let page = req.page.max(1);
    let total = items.len();
    let total_pages = (total as u32).div_ceil(page_size);

    // Widen before multiplying; page and page_size are caller-supplied
    let start = (page as u64 - 1) * page_size as u64;
    let items = if start >= total as u64 {
        Vec::new()
    } else {
        let start = start as usize;
        items
            .drain(start..total.min(start + page_size as usize))
            .collect()
    };

    Page {
        items,
        total,
        page,
        page_size,
        total_pages,
    }
}

/// Status-filtered, newest-first order listing.
pub async fn load_order_list(
    store: &dyn DealerStore,
    filter: Option<OrderStatus>,
    req: PageRequest,
) -> Result<Page<OrderRow>, Box<dyn std::error::Error + Send + Sync>> {
    let mut orders = store.list_orders().await?;
    if let Some(status) = filter {
        orders.retain(|order| order.status == status);
    }
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let rows = orders.into_iter().map(OrderRow::from).collect();
    Ok(paginate(rows, req))
}

/// Status-filtered, newest-first quotation listing.
pub async fn load_quotation_list(
    store: &dyn DealerStore,
    filter: Option<QuotationStatus>,
    req: PageRequest,
) -> Result<Page<QuotationRecord>, Box<dyn std::error::Error + Send + Sync>> {
    let mut quotations = store.list_quotations().await?;
    if let Some(status) = filter {
        quotations.retain(|quotation| quotation.status == status);
    }
    quotations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(paginate(quotations, req))
}
