// Preview server
//
// Serves the pre-rendered page under the deployment base path, the static
// assets next to it, and a health check. The page never changes at runtime,
// so it is rendered once when the state is built.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use tower::ServiceExt;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::{BasePath, RenderOptions, SiteConfig};
use crate::content::SiteContent;
use crate::error::Result;
use crate::page::{render_document, PageComposer, PageSummary};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub page: Arc<String>,
    pub summary: Arc<PageSummary>,
    pub base_path: BasePath,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(content: &SiteContent, options: RenderOptions, assets_dir: impl Into<PathBuf>) -> Result<Self> {
        content.log_issues();

        tracing::info!("Rendering page for base path {}...", options.base_path);
        let page = render_document(content, &options)?;
        let summary = PageSummary::of(&PageComposer::new(options.clone()).compose(content));

        Ok(Self {
            page: Arc::new(page),
            summary: Arc::new(summary),
            base_path: options.base_path,
            assets_dir: assets_dir.into(),
        })
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        Self::new(&SiteContent::portfolio(), config.render_options(), &config.assets_dir)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Page and assets both live under the base path, which may be "/"
        .fallback(serve_site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "page": *state.summary,
    }))
}

async fn serve_site(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method();
    if *method != Method::GET && *method != Method::HEAD {
        return AppError::MethodNotAllowed(method.clone()).into_response();
    }

    let path = request.uri().path().to_string();
    let base = state.base_path.as_str();

    if path == base || path == state.base_path.join("index.html") {
        return Html(state.page.as_str().to_owned()).into_response();
    }

    // "/personal-site" without the trailing slash, and the bare root
    if path == base.trim_end_matches('/') || path == "/" {
        return Redirect::permanent(base).into_response();
    }

    match path.strip_prefix(base) {
        Some(rest) => serve_asset(&state, rest, request).await,
        None => AppError::NotFound(format!("{} not found", path)).into_response(),
    }
}

async fn serve_asset(state: &AppState, rest: &str, request: Request) -> Response {
    let uri: Uri = match format!("/{}", rest).parse() {
        Ok(uri) => uri,
        Err(_) => return AppError::NotFound(format!("{} not found", rest)).into_response(),
    };

    let (mut parts, body) = request.into_parts();
    parts.uri = uri;
    let request = Request::from_parts(parts, body);

    match ServeDir::new(&state.assets_dir).oneshot(request).await {
        Ok(response) => response.map(Body::new).into_response(),
        Err(e) => AppError::Internal(e.to_string()).into_response(),
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    Internal(String),
    NotFound(String),
    MethodNotAllowed(Method),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::MethodNotAllowed(method) => {
                let body = Json(serde_json::json!({
                    "error": format!("{} not allowed", method)
                }));
                return (
                    StatusCode::METHOD_NOT_ALLOWED,
                    [(header::ALLOW, "GET, HEAD")],
                    body,
                )
                    .into_response();
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
