//! Dev server: renders both pages per request from the query string, and
//! serves the generated tree and the assets as files.

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::render::Renderer;
use crate::routes::{PageQuery, Routes, PORTFOLIO_PATH};
use crate::view::{ListingView, Session};
use crate::SiteIndex;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    config: Arc<SiteConfig>,
    renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Result<Self, SiteError> {
        Ok(Self {
            config: Arc::new(config),
            renderer: Arc::new(Renderer::new()?),
        })
    }

    fn session(&self, query: &PageQuery) -> Session {
        let mut session = Session::new(self.config.as_ref().clone(), Routes::Query)
            .with_listing(ListingView::with_state(query.view_state()));
        session.set_locale(query.locale(self.config.default_locale));
        session
    }
}

/// Handler failure, answered with a plain 500.
pub struct ServerError(SiteError);

impl From<SiteError> for ServerError {
    fn from(err: SiteError) -> Self {
        ServerError(err)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let generated = ServeDir::new(&state.config.output_dir);
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(landing))
        .route(PORTFOLIO_PATH, get(portfolio))
        .route("/site.json", get(site_index))
        .nest_service("/dist", generated)
        .fallback_service(assets)
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

/// Raw query pairs; repeated keys are folded by [`PageQuery::from_pairs`].
type Pairs = Query<Vec<(String, String)>>;

async fn landing(
    State(state): State<AppState>,
    Query(pairs): Pairs,
) -> Result<Html<String>, ServerError> {
    let page = state.session(&PageQuery::from_pairs(pairs)).landing_page();
    Ok(Html(state.renderer.landing(&page)?))
}

async fn portfolio(
    State(state): State<AppState>,
    Query(pairs): Pairs,
) -> Result<Html<String>, ServerError> {
    let page = state.session(&PageQuery::from_pairs(pairs)).listing_page();
    Ok(Html(state.renderer.listing(&page)?))
}

async fn site_index() -> Json<SiteIndex> {
    Json(SiteIndex::build())
}
