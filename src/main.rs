use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use orders_export::build_server;
use orders_export::infrastructure::ShopifyOrderSource;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let shop_domain =
        env::var("SHOPIFY_SHOP_DOMAIN").expect("SHOPIFY_SHOP_DOMAIN must be set");
    let token = env::var("SHOPIFY_ADMIN_TOKEN").expect("SHOPIFY_ADMIN_TOKEN must be set");
    let api_version =
        env::var("SHOPIFY_API_VERSION").unwrap_or_else(|_| "2024-07".to_string());
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");

    let source = Arc::new(ShopifyOrderSource::new(&shop_domain, &token, &api_version));

    log::info!("Starting server at http://{}:{}", host, port);

    build_server(source, &host, port)?.await
}
