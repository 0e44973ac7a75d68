use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use common::types::{Health, MessageBody};
use service::product::ProductService;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::errors::SERVER_ERROR_MSG;
use crate::openapi::ApiDoc;

pub mod pages;
pub mod products;

pub const LIVENESS_TEXT: &str = "Product catalog API is running";

/// Shared handler state. Cloned per request; the service holds only `Arc`s.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: ProductService,
}

impl ServerState {
    pub fn new(catalog: ProductService) -> Self { Self { catalog } }
}

pub async fn index() -> &'static str {
    LIVENESS_TEXT
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn security_headers() -> [(HeaderName, HeaderValue); 5] {
    [
        (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
        (header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
        (header::X_DNS_PREFETCH_CONTROL, HeaderValue::from_static("off")),
        (HeaderName::from_static("cross-origin-opener-policy"), HeaderValue::from_static("same-origin")),
    ]
}

fn panic_response(_err: Box<dyn std::any::Any + Send>) -> Response {
    tracing::error!(event = "handler_panic", "request handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(MessageBody::new(SERVER_ERROR_MSG))).into_response()
}

/// Mount the five product operations under `prefix`.
fn product_routes(router: Router<ServerState>, prefix: &str) -> Router<ServerState> {
    router
        .route(prefix, get(products::list).post(products::create))
        .route(
            &format!("{prefix}/:id"),
            get(products::get).put(products::update).delete(products::delete),
        )
}

/// Build the full application router: liveness, JSON API (bare and `/api`
/// prefixed), HTML page, and the OpenAPI document, wrapped in the HTTP hardening layers.
pub fn build_router(state: ServerState, cors: CorsLayer, body_limit: usize) -> Router {
    let mut app = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/product/:id", get(pages::product_page));
    app = product_routes(app, "/products");
    app = product_routes(app, "/api/products");

    let app = app
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(panic_response as fn(_) -> _));

    let app = security_headers()
        .into_iter()
        .fold(app, |app, (name, value)| app.layer(SetResponseHeaderLayer::if_not_present(name, value)));

    app.layer(cors).layer(
        TraceLayer::new_for_http()
            // one span per request: method, uri, version
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            .on_request(
                DefaultOnRequest::new()
                    .level(Level::INFO),
            )
            // status and latency
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            // 5xx
            .on_failure(
                DefaultOnFailure::new()
                    .level(Level::ERROR),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use service::product::InMemoryProductRepository;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let catalog = ProductService::new(Arc::new(InMemoryProductRepository::new()), Default::default());
        build_router(ServerState::new(catalog), CorsLayer::very_permissive(), 1024)
    }

    #[tokio::test]
    async fn root_is_plain_text_liveness() {
        let res = app().oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["x-content-type-options"], "nosniff");
        assert_eq!(res.headers()["x-frame-options"], "SAMEORIGIN");
        assert_eq!(res.headers()["referrer-policy"], "no-referrer");
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], LIVENESS_TEXT.as_bytes());
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let res = app().oneshot(Request::get("/nope").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn oversized_body_is_413() {
        let big = format!(r#"{{"name":"{}"}}"#, "x".repeat(4096));
        let req = Request::post("/api/products")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(big))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
