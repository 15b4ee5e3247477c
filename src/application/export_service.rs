use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::errors::DomainError;
use crate::domain::order::{OrdersPage, PageRequest};
use crate::domain::ports::OrderSource;
use crate::export::{project_orders, to_csv, Column};

/// A produced CSV document plus the filename it should be saved under.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

pub struct ExportService {
    source: Arc<dyn OrderSource>,
}

impl ExportService {
    pub fn new(source: Arc<dyn OrderSource>) -> Self {
        Self { source }
    }

    pub async fn load_page(&self, page: PageRequest) -> Result<OrdersPage, DomainError> {
        self.source.fetch_page(page).await
    }

    /// Fetch one page and serialize the selected orders under the given
    /// column set.
    pub async fn export_selected(
        &self,
        page: PageRequest,
        selected: &HashSet<String>,
        columns: &[Column],
    ) -> Result<CsvExport, DomainError> {
        let page = self.source.fetch_page(page).await?;
        let rows = project_orders(&page.orders, selected);
        log::info!(
            "Exporting {} rows from {} selected orders",
            rows.len(),
            selected.len()
        );
        Ok(CsvExport {
            filename: export_filename(Utc::now()),
            content: to_csv(&rows, columns),
        })
    }
}

/// Timestamp-suffixed download name, e.g. `orders_export_1704207840000.csv`.
pub fn export_filename(at: DateTime<Utc>) -> String {
    format!("orders_export_{}.csv", at.timestamp_millis())
}
