//! Integration tests: boot the real server on a free port with a stubbed
//! order source and drive the list + export flows over HTTP.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use orders_export::build_server;
use orders_export::domain::errors::{classify_fetch_failure, DomainError};
use orders_export::domain::money::parse_amount;
use orders_export::domain::order::{Customer, LineItem, Money, Order, OrdersPage, PageRequest};
use orders_export::domain::ports::OrderSource;
use reqwest::Client;
use serde_json::Value;

fn free_port() -> u16 {
    // Bind to port 0 to let the OS assign a free port, then release it.
    // There is a small TOCTOU window, but it is acceptable for test usage.
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind failed")
        .local_addr()
        .expect("addr failed")
        .port()
}

/// Wait until the server answers anything at all on `/orders`.
async fn wait_for_http(base: &str) {
    let client = Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
        .unwrap();
    let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
    loop {
        if tokio::time::Instant::now() > deadline {
            panic!("server did not become ready within 10 s");
        }
        if client.get(format!("{base}/orders")).send().await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}

async fn start_server(source: Arc<dyn OrderSource>) -> String {
    let port = free_port();
    let server = build_server(source, "127.0.0.1", port).expect("Failed to bind server");
    tokio::spawn(server);
    let base = format!("http://127.0.0.1:{port}");
    wait_for_http(&base).await;
    base
}

// ── Stub sources ─────────────────────────────────────────────────────────────

struct StubOrderSource {
    page: OrdersPage,
}

#[async_trait]
impl OrderSource for StubOrderSource {
    async fn fetch_page(&self, _page: PageRequest) -> Result<OrdersPage, DomainError> {
        Ok(self.page.clone())
    }
}

struct DeniedOrderSource;

#[async_trait]
impl OrderSource for DeniedOrderSource {
    async fn fetch_page(&self, _page: PageRequest) -> Result<OrdersPage, DomainError> {
        Err(classify_fetch_failure(
            "This app is not approved to access the Order object.".to_string(),
        ))
    }
}

fn money(amount: &str) -> Option<Money> {
    parse_amount(Some(amount)).map(|amount| Money {
        amount,
        currency: Some("EUR".to_string()),
    })
}

fn sample_page() -> OrdersPage {
    OrdersPage {
        orders: vec![
            Order {
                id: "gid://shop/Order/1".to_string(),
                name: "#1001".to_string(),
                created_at: "2024-01-02T15:04:00Z".to_string(),
                total: money("19.98"),
                customer: Some(Customer {
                    display_name: Some("Jane Doe".to_string()),
                    email: Some("jane@example.com".to_string()),
                }),
                line_items: vec![LineItem {
                    id: "gid://shop/LineItem/1".to_string(),
                    title: "Widget".to_string(),
                    sku: Some("W-1".to_string()),
                    quantity: 2,
                    unit_price: money("9.99"),
                    line_total: None,
                }],
            },
            Order {
                id: "gid://shop/Order/2".to_string(),
                name: "#1002".to_string(),
                created_at: "2024-01-03T08:30:00Z".to_string(),
                total: None,
                customer: None,
                line_items: vec![],
            },
        ],
        has_next_page: false,
        end_cursor: Some("cursor-2".to_string()),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_orders_returns_the_page_shaped_for_the_admin_table() {
    let base = start_server(Arc::new(StubOrderSource {
        page: sample_page(),
    }))
    .await;

    let resp = Client::new()
        .get(format!("{base}/orders"))
        .send()
        .await
        .expect("GET /orders failed");
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.expect("invalid JSON body");
    assert_eq!(body["has_next_page"], Value::Bool(false));
    assert_eq!(body["end_cursor"].as_str(), Some("cursor-2"));

    let items = body["items"].as_array().expect("items should be an array");
    assert_eq!(items.len(), 2);

    assert_eq!(items[0]["name"].as_str(), Some("#1001"));
    assert_eq!(items[0]["created_at"].as_str(), Some("2024-01-02 15:04 UTC"));
    assert_eq!(items[0]["total"].as_str(), Some("19.98"));
    assert_eq!(items[0]["item_count"].as_i64(), Some(1));
    assert_eq!(
        items[0]["items_preview"].as_str(),
        Some("Widget [W-1] × 2 @ 9.99")
    );

    // An order without line items renders an empty-but-valid table row.
    assert_eq!(items[1]["item_count"].as_i64(), Some(0));
    assert_eq!(items[1]["total"].as_str(), Some(""));
    assert_eq!(items[1]["items_preview"].as_str(), Some("—"));
}

#[tokio::test]
async fn export_returns_a_csv_attachment_for_the_selected_orders() {
    let base = start_server(Arc::new(StubOrderSource {
        page: sample_page(),
    }))
    .await;

    let resp = Client::new()
        .post(format!("{base}/orders/export"))
        .json(&serde_json::json!({ "ids": ["gid://shop/Order/1"] }))
        .send()
        .await
        .expect("POST /orders/export failed");
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/csv"), "got {content_type}");

    let disposition = resp
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        disposition.starts_with("attachment; filename=\"orders_export_"),
        "got {disposition}"
    );
    assert!(disposition.ends_with(".csv\""), "got {disposition}");

    let csv = resp.text().await.expect("failed to read CSV body");
    assert_eq!(
        csv,
        "order,createdAt,orderTotal,lineItemTitle,sku,quantity,lineItemPrice,lineItemTotal,id\n\
         #1001,2024-01-02 15:04 UTC,19.98,Widget,W-1,2,9.99,19.98,gid://shop/Order/1"
    );
}

#[tokio::test]
async fn export_with_customer_profile_adds_the_extra_columns() {
    let base = start_server(Arc::new(StubOrderSource {
        page: sample_page(),
    }))
    .await;

    let resp = Client::new()
        .post(format!("{base}/orders/export"))
        .json(&serde_json::json!({
            "ids": ["gid://shop/Order/1"],
            "profile": "customer"
        }))
        .send()
        .await
        .expect("POST /orders/export failed");
    assert_eq!(resp.status(), 200);

    let csv = resp.text().await.expect("failed to read CSV body");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some(
            "order,createdAt,orderTotal,lineItemTitle,sku,quantity,lineItemPrice,lineItemTotal,id,order_id,customer_name,customer_email,currency"
        )
    );
    assert_eq!(
        lines.next(),
        Some(
            "#1001,2024-01-02 15:04 UTC,19.98,Widget,W-1,2,9.99,19.98,gid://shop/Order/1,gid://shop/Order/1,Jane Doe,jane@example.com,EUR"
        )
    );
    assert_eq!(lines.next(), None);
}

#[tokio::test]
async fn export_with_empty_selection_yields_header_only() {
    let base = start_server(Arc::new(StubOrderSource {
        page: sample_page(),
    }))
    .await;

    let resp = Client::new()
        .post(format!("{base}/orders/export"))
        .json(&serde_json::json!({ "ids": [] }))
        .send()
        .await
        .expect("POST /orders/export failed");
    assert_eq!(resp.status(), 200);

    let csv = resp.text().await.expect("failed to read CSV body");
    assert_eq!(
        csv,
        "order,createdAt,orderTotal,lineItemTitle,sku,quantity,lineItemPrice,lineItemTotal,id"
    );
}

#[tokio::test]
async fn permission_denied_surfaces_as_403_with_a_hint() {
    let base = start_server(Arc::new(DeniedOrderSource)).await;

    let resp = Client::new()
        .get(format!("{base}/orders"))
        .send()
        .await
        .expect("GET /orders failed");
    assert_eq!(resp.status(), 403);

    let body: Value = resp.json().await.expect("invalid JSON body");
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("not approved to access the Order object"));
    assert!(!body["hint"].as_str().unwrap_or_default().is_empty());
}
