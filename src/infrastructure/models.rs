//! Wire shapes of the Admin GraphQL orders query. These mirror the JSON
//! payload exactly (connection/edges/nodes, camelCase names) and are
//! converted into domain views at this boundary, applying amount parsing so
//! malformed money never crosses into the domain.

use serde::Deserialize;

use crate::domain::money::parse_amount;
use crate::domain::order::{Customer, LineItem, Money, Order, OrdersPage};

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<ResponseData>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ResponseData {
    pub orders: Option<OrdersConnection>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrdersConnection {
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub edges: Vec<OrderEdge>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrderEdge {
    pub node: OrderNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderNode {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub total_price_set: Option<MoneyBag>,
    pub customer: Option<CustomerNode>,
    #[serde(default)]
    pub line_items: LineItemConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerNode {
    pub display_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LineItemConnection {
    #[serde(default)]
    pub edges: Vec<LineItemEdge>,
}

#[derive(Debug, Deserialize)]
pub struct LineItemEdge {
    pub node: LineItemNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemNode {
    pub id: String,
    pub name: Option<String>,
    pub sku: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    pub original_unit_price_set: Option<MoneyBag>,
    pub discounted_total_set: Option<MoneyBag>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyBag {
    pub shop_money: Option<MoneyV2>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    pub amount: Option<String>,
    pub currency_code: Option<String>,
}

fn into_money(bag: Option<MoneyBag>) -> Option<Money> {
    let shop_money = bag?.shop_money?;
    let amount = parse_amount(shop_money.amount.as_deref())?;
    Some(Money {
        amount,
        currency: shop_money.currency_code,
    })
}

impl From<LineItemNode> for LineItem {
    fn from(node: LineItemNode) -> Self {
        LineItem {
            id: node.id,
            title: node.name.unwrap_or_default(),
            sku: node.sku,
            quantity: node.quantity,
            unit_price: into_money(node.original_unit_price_set),
            line_total: into_money(node.discounted_total_set),
        }
    }
}

impl From<OrderNode> for Order {
    fn from(node: OrderNode) -> Self {
        Order {
            id: node.id,
            name: node.name,
            created_at: node.created_at,
            total: into_money(node.total_price_set),
            customer: node.customer.map(|c| Customer {
                display_name: c.display_name,
                email: c.email,
            }),
            line_items: node
                .line_items
                .edges
                .into_iter()
                .map(|e| e.node.into())
                .collect(),
        }
    }
}

impl From<OrdersConnection> for OrdersPage {
    fn from(conn: OrdersConnection) -> Self {
        OrdersPage {
            orders: conn.edges.into_iter().map(|e| e.node.into()).collect(),
            has_next_page: conn.page_info.has_next_page,
            end_cursor: conn.page_info.end_cursor,
        }
    }
}
