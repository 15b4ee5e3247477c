use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::errors::{classify_fetch_failure, DomainError};
use crate::domain::order::{OrdersPage, PageRequest};
use crate::domain::ports::OrderSource;

use super::models::{GraphQlResponse, OrdersConnection};

/// One page of orders with nested line items, newest first. Line items are
/// capped at 100 per order by the API.
pub const ORDERS_WITH_LINES_QUERY: &str = r#"
  query OrdersWithLines($first: Int!, $after: String) {
    orders(first: $first, after: $after, reverse: true, sortKey: CREATED_AT) {
      pageInfo { hasNextPage endCursor }
      edges {
        node {
          id
          name
          createdAt
          totalPriceSet { shopMoney { amount currencyCode } }
          customer { displayName email }
          lineItems(first: 100) {
            edges {
              node {
                id
                name
                sku
                quantity
                originalUnitPriceSet { shopMoney { amount currencyCode } }
                discountedTotalSet { shopMoney { amount } }
              }
            }
          }
        }
      }
    }
  }
"#;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Order source backed by the Shopify Admin GraphQL API.
pub struct ShopifyOrderSource {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl ShopifyOrderSource {
    pub fn new(shop_domain: &str, token: &str, api_version: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http,
            endpoint: admin_endpoint(shop_domain, api_version),
            token: token.to_string(),
        }
    }
}

fn admin_endpoint(shop_domain: &str, api_version: &str) -> String {
    format!("https://{shop_domain}/admin/api/{api_version}/graphql.json")
}

#[async_trait]
impl OrderSource for ShopifyOrderSource {
    async fn fetch_page(&self, page: PageRequest) -> Result<OrdersPage, DomainError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Shopify-Access-Token", &self.token)
            .json(&json!({
                "query": ORDERS_WITH_LINES_QUERY,
                "variables": { "first": page.first, "after": page.after },
            }))
            .send()
            .await
            .map_err(|e| classify_fetch_failure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_fetch_failure(format!(
                "HTTP {} {}\n{}",
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                body
            )));
        }

        let payload: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Fetch(format!("Invalid GraphQL response: {e}")))?;

        // Entitlement failures arrive with HTTP 200 in the `errors` array,
        // so classification has to run on this channel too.
        if let Some(errors) = payload.errors.filter(|errs| !errs.is_empty()) {
            let message = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(classify_fetch_failure(message));
        }

        let connection: OrdersConnection = payload
            .data
            .and_then(|d| d.orders)
            .unwrap_or_default();

        log::debug!("Fetched {} orders", connection.edges.len());
        Ok(connection.into())
    }
}
