pub mod application;
pub mod domain;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod infrastructure;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::ExportService;
use domain::ports::OrderSource;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::orders::list_orders, handlers::orders::export_orders),
    components(schemas(
        handlers::orders::ListOrdersResponse,
        handlers::orders::OrderResponse,
        handlers::orders::ExportOrdersRequest,
        handlers::orders::ExportProfile,
    )),
    tags((name = "orders", description = "Order listing and CSV export"))
)]
pub struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    source: Arc<dyn OrderSource>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(ExportService::new(source));
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .service(
                web::scope("/orders")
                    .route("", web::get().to(handlers::orders::list_orders))
                    .route("/export", web::post().to(handlers::orders::export_orders)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
