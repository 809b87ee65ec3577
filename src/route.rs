pub mod users;

use axum::{
    body::{Body, HttpBody},
    extract::Request,
    http::{Method, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Result},
    routing::get,
    Router,
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::{
    error::{
        kind::{MethodNotAllowed, NotFound},
        AppErrorDetail, Logged,
    },
    state::AppState,
};

pub fn app_with(state: AppState) -> NormalizePath<Router<()>> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
pub fn app() -> NormalizePath<Router<()>> {
    app_with(Default::default())
}
pub fn router(state: AppState) -> Router<()> {
    Router::new()
        .route("/api/users", get(users::users))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware::from_fn(logging))
        .with_state(state)
}

pub async fn not_found(uri: Uri) -> Result<()> {
    Err(AppErrorDetail::<NotFound, _>::new(StatusCode::NOT_FOUND, Logged(""), uri.to_string()))?
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> Result<()> {
    let source = Logged(format!("{} {}", method, uri));
    Err(AppErrorDetail::<MethodNotAllowed, _>::new(StatusCode::METHOD_NOT_ALLOWED, source, method.to_string()))?
}

pub async fn logging(req: Request<Body>, next: Next) -> impl IntoResponse {
    let (method, uri) = (req.method().clone(), req.uri().clone());
    let res = next.run(req).await;
    let (status, bytes) = (res.status(), res.size_hint().lower());
    tracing::info!("{} {} {} {}", status, method, uri, bytes);
    res
}
