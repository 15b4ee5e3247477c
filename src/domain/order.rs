use bigdecimal::BigDecimal;

/// A decimal amount plus optional currency code. Upstream transports amounts
/// as strings to avoid floating-point precision loss; amounts that fail to
/// parse never reach this type (see `money::parse_amount`).
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    pub amount: BigDecimal,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Customer {
    pub display_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LineItem {
    pub id: String,
    pub title: String,
    pub sku: Option<String>,
    pub quantity: i64,
    pub unit_price: Option<Money>,
    /// Discounted line total as reported upstream. When absent it is
    /// derivable as `unit_price × quantity` if `unit_price` is present.
    pub line_total: Option<Money>,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    /// Human-facing order number, e.g. "#1001".
    pub name: String,
    /// ISO-8601 timestamp, kept raw until display formatting.
    pub created_at: String,
    pub total: Option<Money>,
    pub customer: Option<Customer>,
    /// Upstream response order preserved; may be empty.
    pub line_items: Vec<LineItem>,
}

/// One fetched page of orders. The continuation token is managed by the
/// caller and passes through untouched.
#[derive(Debug, Clone, Default)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub first: i64,
    pub after: Option<String>,
}
