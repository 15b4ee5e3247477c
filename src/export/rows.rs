use std::collections::HashSet;

use bigdecimal::BigDecimal;

use crate::domain::money::{format_amount, format_timestamp_utc};
use crate::domain::order::Order;

/// One flat, display-ready export row. Every field is already formatted;
/// absent values are the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRow {
    pub order_id: String,
    pub order_name: String,
    pub created_at: String,
    pub order_total: String,
    pub line_item_title: String,
    pub sku: String,
    pub quantity: String,
    pub line_item_price: String,
    pub line_item_total: String,
    pub customer_name: String,
    pub customer_email: String,
    pub currency: String,
}

/// Flatten one order into export rows: one row per line item, or a single
/// summary row with empty line-item fields when the order has none.
pub fn project_order(order: &Order) -> Vec<ExportRow> {
    let base = ExportRow {
        order_id: order.id.clone(),
        order_name: order.name.clone(),
        created_at: format_timestamp_utc(&order.created_at),
        order_total: format_amount(order.total.as_ref().map(|m| &m.amount)),
        customer_name: order
            .customer
            .as_ref()
            .and_then(|c| c.display_name.clone())
            .unwrap_or_default(),
        customer_email: order
            .customer
            .as_ref()
            .and_then(|c| c.email.clone())
            .unwrap_or_default(),
        ..ExportRow::default()
    };

    if order.line_items.is_empty() {
        return vec![base];
    }

    order
        .line_items
        .iter()
        .map(|li| {
            let unit_price = li.unit_price.as_ref().map(|m| &m.amount);
            // Fall back to unit price × quantity when no discounted total
            // was reported.
            let line_total = li
                .line_total
                .as_ref()
                .map(|m| m.amount.clone())
                .or_else(|| unit_price.map(|p| p * BigDecimal::from(li.quantity)));

            ExportRow {
                line_item_title: li.title.clone(),
                sku: li.sku.clone().unwrap_or_default(),
                quantity: li.quantity.to_string(),
                line_item_price: format_amount(unit_price),
                line_item_total: format_amount(line_total.as_ref()),
                currency: li
                    .unit_price
                    .as_ref()
                    .and_then(|m| m.currency.clone())
                    .unwrap_or_default(),
                ..base.clone()
            }
        })
        .collect()
}

/// Project the orders whose id is in `selected`, preserving input order.
/// An empty selection yields an empty row set.
pub fn project_orders(orders: &[Order], selected: &HashSet<String>) -> Vec<ExportRow> {
    orders
        .iter()
        .filter(|o| selected.contains(&o.id))
        .flat_map(project_order)
        .collect()
}
