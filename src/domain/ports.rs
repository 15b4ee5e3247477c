use async_trait::async_trait;

use super::errors::DomainError;
use super::order::{OrdersPage, PageRequest};

/// Supplier of already-deserialized order pages. Pagination state and
/// authentication live behind this boundary.
#[async_trait]
pub trait OrderSource: Send + Sync + 'static {
    async fn fetch_page(&self, page: PageRequest) -> Result<OrdersPage, DomainError>;
}
