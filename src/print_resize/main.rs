use axum::{
    extract::DefaultBodyLimit,
    http::header::HeaderName,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

mod application;
mod domain;
mod infrastructure;

use application::resize_service::ResizeService;
use infrastructure::axum_handler::{index_handler, resize_handler, AppState};
use infrastructure::image_resizer::DefaultImageResizer;

// multipartボディの上限 (写真のアップロードを想定して20MiB)
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[tokio::main]
async fn main() {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(vec![HeaderName::from_static("content-type")]);

    let resize_service = Arc::new(ResizeService::new(Arc::new(DefaultImageResizer::new())));
    let state = Arc::new(AppState { resize_service });

    let app = Router::new()
        .route("/", get(index_handler).post(resize_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(state);

    // サーバーの開始
    axum::Server::bind(&"0.0.0.0:3300".parse().unwrap())
        .serve(app.into_make_service())
        .await
        .unwrap();
}
