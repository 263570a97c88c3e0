//! HTTP route handlers for the page server.
//!
//! Handlers are kept thin: every decision (404, noindex, chunk bounds) is
//! made by the engine.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::debug;

use pseo_core::config::SITEMAP_CACHE_CONTROL;
use pseo_core::metadata::PageMetadata;
use pseo_core::quality::quality_grade;
use pseo_core::sitemap::parse_chunk_id;

use super::models::{HubResponse, HubsResponse, PageResponse};
use super::templates;
use super::AppState;

// =============================================================================
// Page Handlers
// =============================================================================

/// GET `/` - Category overview.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(templates::render_index(&state.engine.hub_overview()))
}

/// GET `/ai/{slug}` - Rendered page, or 404 when the page is missing or
/// fails the hard quality bar.
pub async fn page(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    let engine = &state.engine;
    let page = engine.page_by_slug(&slug);

    match page {
        Some(page) if !engine.should_return_404(Some(&page)) => {
            let metadata = PageMetadata::for_page(&page, engine.config().sitemap.origin());
            Html(templates::render_page(&page, &metadata)).into_response()
        }
        _ => {
            debug!(slug = %slug, "serving not found");
            (
                StatusCode::NOT_FOUND,
                Html(templates::render_not_found(&PageMetadata::not_found())),
            )
                .into_response()
        }
    }
}

/// GET `/ai/category/{category}` - Category hub, or 404 for an unknown id.
pub async fn category_page(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Response {
    let engine = &state.engine;
    match engine.category_hub(&category) {
        Some(hub) => {
            let metadata = PageMetadata::for_category(hub.category, engine.config().sitemap.origin());
            Html(templates::render_category(&hub, &metadata)).into_response()
        }
        None => {
            debug!(category = %category, "unknown category");
            (
                StatusCode::NOT_FOUND,
                Html(templates::render_not_found(&PageMetadata::not_found())),
            )
                .into_response()
        }
    }
}

// =============================================================================
// API Handlers
// =============================================================================

/// GET `/api/pages/{slug}` - Page, quality result and metadata as JSON.
///
/// 404 under the same rule as `/ai/{slug}`, so blocked pages are not
/// exposed through the API either.
pub async fn api_page(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<PageResponse>, StatusCode> {
    let engine = &state.engine;
    let page = engine
        .page_by_slug(&slug)
        .filter(|page| !engine.should_return_404(Some(page)))
        .ok_or(StatusCode::NOT_FOUND)?;

    let quality = engine.check_quality(&page);
    let metadata = engine.metadata(&slug);
    Ok(Json(PageResponse {
        grade: quality_grade(quality.score),
        quality,
        metadata,
        page,
    }))
}

/// GET `/api/hubs` - All categories grouped by type.
pub async fn api_hubs(State(state): State<Arc<AppState>>) -> Json<HubsResponse> {
    Json(HubsResponse::from(&state.engine.hub_overview()))
}

/// GET `/api/hubs/{category}` - One category hub.
pub async fn api_hub(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<HubResponse>, StatusCode> {
    state
        .engine
        .category_hub(&category)
        .map(|hub| Json(HubResponse::from(&hub)))
        .ok_or(StatusCode::NOT_FOUND)
}

// =============================================================================
// Sitemap Handlers
// =============================================================================

/// GET `/sitemap.xml` - Sitemap index.
pub async fn sitemap_index(State(state): State<Arc<AppState>>) -> Response {
    xml_response(state.engine.sitemap_index_xml(Utc::now()))
}

/// GET `/sitemaps/static.xml` - Home, landing and category hub URLs.
pub async fn static_sitemap(State(state): State<Arc<AppState>>) -> Response {
    xml_response(state.engine.static_sitemap_xml(Utc::now()))
}

/// GET `/sitemaps/programmatic/{id}` - One chunk of qualified pages.
///
/// `id` may carry a `.xml` suffix. Invalid ids are a 400, ids past the last
/// chunk a 404.
pub async fn programmatic_sitemap(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let chunk_id = match parse_chunk_id(&id) {
        Ok(chunk_id) => chunk_id,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    match state.engine.sitemap_chunk(chunk_id) {
        Some(chunk) => xml_response(chunk.to_xml()),
        None => (StatusCode::NOT_FOUND, "Sitemap chunk not found").into_response(),
    }
}

fn xml_response(body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/xml"),
            (header::CACHE_CONTROL, SITEMAP_CACHE_CONTROL),
        ],
        body,
    )
        .into_response()
}
