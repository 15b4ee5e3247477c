use std::borrow::Cow;

use super::rows::ExportRow;

/// One exportable column: a header name plus the row field it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    OrderName,
    CreatedAt,
    OrderTotal,
    LineItemTitle,
    Sku,
    Quantity,
    LineItemPrice,
    LineItemTotal,
    Id,
    OrderId,
    CustomerName,
    CustomerEmail,
    Currency,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::OrderName => "order",
            Column::CreatedAt => "createdAt",
            Column::OrderTotal => "orderTotal",
            Column::LineItemTitle => "lineItemTitle",
            Column::Sku => "sku",
            Column::Quantity => "quantity",
            Column::LineItemPrice => "lineItemPrice",
            Column::LineItemTotal => "lineItemTotal",
            Column::Id => "id",
            Column::OrderId => "order_id",
            Column::CustomerName => "customer_name",
            Column::CustomerEmail => "customer_email",
            Column::Currency => "currency",
        }
    }

    fn value<'a>(&self, row: &'a ExportRow) -> &'a str {
        match self {
            Column::OrderName => &row.order_name,
            Column::CreatedAt => &row.created_at,
            Column::OrderTotal => &row.order_total,
            Column::LineItemTitle => &row.line_item_title,
            Column::Sku => &row.sku,
            Column::Quantity => &row.quantity,
            Column::LineItemPrice => &row.line_item_price,
            Column::LineItemTotal => &row.line_item_total,
            Column::Id | Column::OrderId => &row.order_id,
            Column::CustomerName => &row.customer_name,
            Column::CustomerEmail => &row.customer_email,
            Column::Currency => &row.currency,
        }
    }
}

/// Column set used by the plain export action.
pub const STANDARD_COLUMNS: &[Column] = &[
    Column::OrderName,
    Column::CreatedAt,
    Column::OrderTotal,
    Column::LineItemTitle,
    Column::Sku,
    Column::Quantity,
    Column::LineItemPrice,
    Column::LineItemTotal,
    Column::Id,
];

/// Standard columns plus the customer-facing extras.
pub const CUSTOMER_COLUMNS: &[Column] = &[
    Column::OrderName,
    Column::CreatedAt,
    Column::OrderTotal,
    Column::LineItemTitle,
    Column::Sku,
    Column::Quantity,
    Column::LineItemPrice,
    Column::LineItemTotal,
    Column::Id,
    Column::OrderId,
    Column::CustomerName,
    Column::CustomerEmail,
    Column::Currency,
];

/// Quote a field only when it contains a comma, a double quote, or a
/// newline; internal double quotes are doubled. Everything else, including
/// leading/trailing whitespace, passes through unchanged.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Serialize rows under the given column set. Lines are joined with a single
/// `\n` and the output carries no trailing newline.
pub fn to_csv(rows: &[ExportRow], columns: &[Column]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|c| c.header())
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            columns
                .iter()
                .map(|c| escape(c.value(row)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}
