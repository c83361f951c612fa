//! HTTP transport shim over the pair store and diff engine

use crate::codec;
use crate::config::Config;
use crate::diff;
use crate::store::PairStore;
use crate::types::{Comparison, DiffdError, Side};
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Submission body: the base64 payload for one side
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Encoded payload; absent or empty means the submission is rejected
    pub data: Option<String>,
}

/// JSON body attached to every rejection
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    fn with_detail(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: Some(detail.into()),
        }
    }
}

impl IntoResponse for DiffdError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            DiffdError::MissingPayload => {
                (StatusCode::BAD_REQUEST, ErrorBody::new("missing data"))
            }
            DiffdError::MissingSide(side) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new(format!("{} missing", side)),
            ),
            DiffdError::Decode(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::with_detail("decode error", err.to_string()),
            ),
            DiffdError::Config(_) | DiffdError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("internal error"),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Build the service router around one shared store
///
/// The store is constructed by the caller and injected as state, so its
/// lifetime is explicit: one store per served process, shared by every
/// handler clone.
pub fn app(store: PairStore, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/v1/diff/:id/:side", put(submit))
        .route("/v1/diff/:id", get(comparison))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(store)
}

/// Bind the configured address and serve until the process exits
pub async fn serve(config: Config) -> Result<(), DiffdError> {
    let store = PairStore::new();
    let router = app(store, config.max_body_bytes);

    let listener = TcpListener::bind(config.listen).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}

/// Accept one half of an artifact
///
/// The payload text is stored as-is; decoding happens at comparison time,
/// so a submission is only rejected here when the payload field is absent
/// or empty.
async fn submit(
    State(store): State<PairStore>,
    Path((id, side)): Path<(u64, Side)>,
    Json(request): Json<SubmitRequest>,
) -> Result<StatusCode, DiffdError> {
    let data = match request.data {
        Some(data) if !data.is_empty() => data,
        _ => return Err(DiffdError::MissingPayload),
    };

    debug!(id, side = %side, bytes = data.len(), "accepted submission");
    store.put(id, side, data);

    Ok(StatusCode::CREATED)
}

/// Compare the two halves stored for an identifier
///
/// Pull-based and non-blocking: a missing side is reported immediately
/// rather than waited for, and callers poll until both halves are in. The
/// two reads are not atomic as a pair; a concurrent overwrite between them
/// yields some previously committed value for each side.
async fn comparison(
    State(store): State<PairStore>,
    Path(id): Path<u64>,
) -> Result<Json<Comparison>, DiffdError> {
    let left = store
        .get(id, Side::Left)
        .ok_or(DiffdError::MissingSide(Side::Left))?;
    let right = store
        .get(id, Side::Right)
        .ok_or(DiffdError::MissingSide(Side::Right))?;

    let left = codec::decode_payload(&left)?;
    let right = codec::decode_payload(&right)?;

    let outcome = diff::compare(&left, &right);
    debug!(id, outcome = ?outcome, "comparison served");

    Ok(Json(outcome))
}

/// Liveness endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "service": "diffd",
        "version": crate::VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
