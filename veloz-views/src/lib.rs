pub mod aggregator;
pub mod records;
pub mod repository;

pub use aggregator::{load_order_list, load_quotation_list, OrderRow, Page, PageRequest};
pub use records::{OrderRecord, QuotationRecord};
pub use repository::{DealerStore, InMemoryDealerStore};
