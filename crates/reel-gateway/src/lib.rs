//! HTTP gateway for the Reel movie catalog service.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::{Path as AxumPath, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use reel_core::{parse_movie_index, Catalog, CatalogError, MovieRecord};

mod landing_page;

use landing_page::render_landing_page;

const LANDING_ENDPOINT: &str = "/";
const MOVIES_ENDPOINT: &str = "/api/movies";
const MOVIES_FILTER_ENDPOINT: &str = "/api/movies/filter";
const MOVIE_ENDPOINT: &str = "/api/movies/{id}";

#[derive(Debug, Clone)]
/// Listen configuration for the catalog gateway.
pub struct CatalogGatewayConfig {
    pub bind: String,
}

impl Default for CatalogGatewayConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Shared server state owning the catalog. Handlers never hold the lock
/// across an await point, so positional identity and read-your-writes hold
/// under the multi-threaded runtime.
pub struct CatalogServerState {
    catalog: Mutex<Catalog>,
}

impl CatalogServerState {
    pub fn with_seed_data() -> Self {
        Self {
            catalog: Mutex::new(Catalog::with_seed_data()),
        }
    }

    fn catalog(&self) -> MutexGuard<'_, Catalog> {
        self.catalog
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Wire error carrying an HTTP status and the flat `{"error": message}`
/// body every failure surfaces as.
pub struct CatalogApiError {
    status: StatusCode,
    message: String,
}

impl CatalogApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    fn not_found() -> Self {
        CatalogError::NotFound.into()
    }
}

impl From<CatalogError> for CatalogApiError {
    fn from(error: CatalogError) -> Self {
        let status = match error {
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::MissingGenreParameter
            | CatalogError::MissingFields
            | CatalogError::YearNotANumber => StatusCode::BAD_REQUEST,
        };
        Self::new(status, error.to_string())
    }
}

impl IntoResponse for CatalogApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Run the movie catalog gateway until ctrl-c.
pub async fn run_catalog_gateway(config: CatalogGatewayConfig) -> Result<()> {
    let bind_addr: SocketAddr = config
        .bind
        .parse()
        .with_context(|| format!("invalid --bind '{}': expected host:port", config.bind))?;
    let state = Arc::new(CatalogServerState::with_seed_data());

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind catalog gateway on {bind_addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve catalog gateway listen address")?;
    tracing::info!(addr = %local_addr, seed_records = state.catalog().len(), "movie catalog gateway listening");

    let app = build_catalog_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("catalog gateway server exited unexpectedly")?;
    Ok(())
}

pub fn build_catalog_router(state: Arc<CatalogServerState>) -> Router {
    Router::new()
        .route(LANDING_ENDPOINT, get(handle_landing_page))
        .route(
            MOVIES_ENDPOINT,
            get(handle_list_movies).post(handle_create_movie),
        )
        .route(MOVIES_FILTER_ENDPOINT, get(handle_filter_movies))
        .route(
            MOVIE_ENDPOINT,
            get(handle_get_movie)
                .put(handle_replace_movie)
                .delete(handle_delete_movie),
        )
        .with_state(state)
}

async fn handle_landing_page() -> Html<String> {
    Html(render_landing_page())
}

async fn handle_list_movies(State(state): State<Arc<CatalogServerState>>) -> Response {
    let movies = state.catalog().list().to_vec();
    (StatusCode::OK, Json(movies)).into_response()
}

#[derive(Debug, Deserialize)]
struct GenreFilterQuery {
    genre: Option<String>,
}

async fn handle_filter_movies(
    State(state): State<Arc<CatalogServerState>>,
    Query(query): Query<GenreFilterQuery>,
) -> Response {
    // An empty genre= value counts as absent, same as no parameter at all.
    let Some(genre) = query.genre.filter(|value| !value.is_empty()) else {
        return CatalogApiError::from(CatalogError::MissingGenreParameter).into_response();
    };
    let matches = state.catalog().filter_by_genre(&genre);
    (StatusCode::OK, Json(matches)).into_response()
}

async fn handle_get_movie(
    State(state): State<Arc<CatalogServerState>>,
    AxumPath(id): AxumPath<String>,
) -> Response {
    let catalog = state.catalog();
    match parse_movie_index(&id).and_then(|index| catalog.get(index).cloned()) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => CatalogApiError::from(error).into_response(),
    }
}

async fn handle_create_movie(
    State(state): State<Arc<CatalogServerState>>,
    body: Bytes,
) -> Response {
    let record = match parse_movie_payload(&body) {
        Ok(record) => record,
        Err(error) => return error.into_response(),
    };
    let index = state.catalog().create(record.clone());
    tracing::debug!(index, title = %record.title, "movie created");
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn handle_replace_movie(
    State(state): State<Arc<CatalogServerState>>,
    AxumPath(id): AxumPath<String>,
    body: Bytes,
) -> Response {
    let mut catalog = state.catalog();
    // Id range is validated before the payload: a bad id on a request with
    // a bad body is a 404, not a 400.
    let index = match parse_movie_index(&id) {
        Ok(index) if index < catalog.len() => index,
        _ => return CatalogApiError::not_found().into_response(),
    };
    let record = match parse_movie_payload(&body) {
        Ok(record) => record,
        Err(error) => return error.into_response(),
    };
    match catalog.replace(index, record.clone()) {
        Ok(()) => {
            tracing::debug!(index, title = %record.title, "movie replaced");
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(error) => CatalogApiError::from(error).into_response(),
    }
}

async fn handle_delete_movie(
    State(state): State<Arc<CatalogServerState>>,
    AxumPath(id): AxumPath<String>,
) -> Response {
    let mut catalog = state.catalog();
    let removed = match parse_movie_index(&id).and_then(|index| catalog.delete(index)) {
        Ok(record) => record,
        Err(error) => return CatalogApiError::from(error).into_response(),
    };
    tracing::debug!(title = %removed.title, remaining = catalog.len(), "movie deleted");
    (
        StatusCode::OK,
        Json(json!({ "message": "Movie deleted", "movie": removed })),
    )
        .into_response()
}

fn parse_movie_payload(body: &Bytes) -> Result<MovieRecord, CatalogApiError> {
    let payload = parse_catalog_json_body(body)?;
    MovieRecord::from_payload(&payload).map_err(CatalogApiError::from)
}

/// An empty body reads as an empty object, so every field is simply absent.
fn parse_catalog_json_body(body: &Bytes) -> Result<Value, CatalogApiError> {
    if body.is_empty() {
        return Ok(json!({}));
    }
    serde_json::from_slice(body).map_err(|_| CatalogApiError::bad_request("Malformed JSON body"))
}
