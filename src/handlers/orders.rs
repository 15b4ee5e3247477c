use std::collections::HashSet;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ExportService;
use crate::domain::money::{format_amount, format_timestamp_utc};
use crate::domain::order::{Order, PageRequest};
use crate::errors::AppError;
use crate::export::{Column, CUSTOMER_COLUMNS, STANDARD_COLUMNS};

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct PageParams {
    /// Page size. Defaults to 25, maximum 250.
    #[serde(default = "default_first")]
    pub first: i64,
    /// Continuation cursor from a previous page's `end_cursor`.
    pub after: Option<String>,
}

fn default_first() -> i64 {
    25
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: String,
    pub name: String,
    /// Created-at rendered as "YYYY-MM-DD HH:MM UTC".
    pub created_at: String,
    pub item_count: usize,
    /// Order total with two decimal places, empty when unknown.
    pub total: String,
    /// Short human-readable summary of the first few line items.
    pub items_preview: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListOrdersResponse {
    pub items: Vec<OrderResponse>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExportProfile {
    #[default]
    Standard,
    Customer,
}

impl ExportProfile {
    fn columns(self) -> &'static [Column] {
        match self {
            ExportProfile::Standard => STANDARD_COLUMNS,
            ExportProfile::Customer => CUSTOMER_COLUMNS,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExportOrdersRequest {
    /// Ids of the orders the user marked for export.
    pub ids: Vec<String>,
    #[serde(default)]
    pub profile: ExportProfile,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
///
/// Returns one page of orders shaped for the admin table. A failed upstream
/// fetch surfaces as 502, or 403 with a remediation hint when the failure is
/// classified as permission-denied.
#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("first" = Option<i64>, Query, description = "Page size (default 25, max 250)"),
        ("after" = Option<String>, Query, description = "Continuation cursor"),
    ),
    responses(
        (status = 200, description = "One page of orders", body = ListOrdersResponse),
        (status = 403, description = "API credentials lack access to order data"),
        (status = 502, description = "Upstream fetch failed"),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    service: web::Data<ExportService>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let page = service
        .load_page(PageRequest {
            first: params.first.clamp(1, 250),
            after: params.after,
        })
        .await?;

    let items: Vec<OrderResponse> = page.orders.iter().map(order_response).collect();

    Ok(HttpResponse::Ok().json(ListOrdersResponse {
        items,
        has_next_page: page.has_next_page,
        end_cursor: page.end_cursor,
    }))
}

/// POST /orders/export
///
/// Fetches one page of orders, projects the ones whose id appears in `ids`,
/// and responds with a CSV attachment. An empty selection produces a CSV
/// containing only the header row.
#[utoipa::path(
    post,
    path = "/orders/export",
    request_body = ExportOrdersRequest,
    params(
        ("first" = Option<i64>, Query, description = "Page size (default 25, max 250)"),
        ("after" = Option<String>, Query, description = "Continuation cursor"),
    ),
    responses(
        (status = 200, description = "CSV download", body = String, content_type = "text/csv"),
        (status = 403, description = "API credentials lack access to order data"),
        (status = 502, description = "Upstream fetch failed"),
    ),
    tag = "orders"
)]
pub async fn export_orders(
    service: web::Data<ExportService>,
    query: web::Query<PageParams>,
    body: web::Json<ExportOrdersRequest>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let body = body.into_inner();
    let selected: HashSet<String> = body.ids.into_iter().collect();

    let export = service
        .export_selected(
            PageRequest {
                first: params.first.clamp(1, 250),
                after: params.after,
            },
            &selected,
            body.profile.columns(),
        )
        .await?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", export.filename),
        ))
        .body(export.content))
}

fn order_response(order: &Order) -> OrderResponse {
    OrderResponse {
        id: order.id.clone(),
        name: order.name.clone(),
        created_at: format_timestamp_utc(&order.created_at),
        item_count: order.line_items.len(),
        total: format_amount(order.total.as_ref().map(|m| &m.amount)),
        items_preview: line_item_preview(order),
    }
}

/// First three line items as `name [sku] × qty = total`, with an overflow
/// suffix; a dash when the order has none.
fn line_item_preview(order: &Order) -> String {
    if order.line_items.is_empty() {
        return "—".to_string();
    }

    let shown: Vec<String> = order
        .line_items
        .iter()
        .take(3)
        .map(|li| {
            let mut part = li.title.clone();
            if let Some(sku) = &li.sku {
                part.push_str(&format!(" [{sku}]"));
            }
            part.push_str(&format!(" × {}", li.quantity));
            if let Some(total) = &li.line_total {
                part.push_str(&format!(" = {}", format_amount(Some(&total.amount))));
            } else if let Some(price) = &li.unit_price {
                part.push_str(&format!(" @ {}", format_amount(Some(&price.amount))));
            }
            part
        })
        .collect();

    let mut preview = shown.join("; ");
    if order.line_items.len() > 3 {
        preview.push_str(&format!(" …(+{})", order.line_items.len() - 3));
    }
    preview
}
