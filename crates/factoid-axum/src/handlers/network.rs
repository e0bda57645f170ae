//! Network handler - the cytoscape-ready view of the document.

use axum::Json;
use axum::extract::State;

use crate::dto::NetworkDto;
use crate::error::HttpError;
use crate::state::AppState;

/// Get the current document as cytoscape elements.
pub async fn get(State(state): State<AppState>) -> Result<Json<NetworkDto>, HttpError> {
    let doc = state.store.snapshot().await;
    Ok(Json(NetworkDto::from(&doc)))
}
