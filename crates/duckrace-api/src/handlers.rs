//! REST API endpoint handlers for the roster.
//!
//! Every handler locks the shared [`RosterStore`] through [`AppState`]
//! for exactly one store operation (or, for settings updates, one
//! sequence of operations) and serializes the result.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/ducks` | List the roster in lane order |
//! | `POST` | `/api/ducks` | Add a generated duck |
//! | `DELETE` | `/api/ducks/{id}` | Remove a duck |
//! | `PATCH` | `/api/ducks/{id}` | Merge fields into a duck |
//! | `GET` | `/api/settings` | Race settings |
//! | `PATCH` | `/api/settings` | Update duration and/or winner |
//!
//! [`RosterStore`]: duckrace_core::RosterStore

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use duckrace_core::settings::duration_from_json;
use duckrace_core::{DuckPatch, DuckRecord, WinnerSelection};
use duckrace_types::DuckId;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned by delete and update.
#[derive(Debug, serde::Serialize)]
struct SuccessResponse {
    success: bool,
}

const SUCCESS: SuccessResponse = SuccessResponse { success: true };

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing the roster state and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let duck_count = store.len();
    let settings = store.settings();
    let race_duration = settings.race_duration;
    let winner = settings
        .predetermined_winner_id
        .map_or_else(|| String::from("random"), |id| id.to_string());

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Duck Race</title>
    <style>
        body {{ font-family: sans-serif; padding: 2rem; max-width: 640px; margin: 0 auto; }}
        .metric {{ display: inline-block; border: 1px solid #ccc; border-radius: 6px; padding: 1rem; margin: 0.5rem 0.5rem 0 0; }}
        .label {{ color: #666; font-size: 0.85rem; }}
        .value {{ font-size: 1.5rem; font-weight: bold; }}
        li {{ font-family: monospace; padding: 0.2rem 0; }}
    </style>
</head>
<body>
    <h1>Duck Race</h1>
    <div>
        <div class="metric"><div class="label">Ducks</div><div class="value">{duck_count}</div></div>
        <div class="metric"><div class="label">Race duration (s)</div><div class="value">{race_duration}</div></div>
        <div class="metric"><div class="label">Winner</div><div class="value">{winner}</div></div>
    </div>

    <h2>API Endpoints</h2>
    <ul>
        <li>GET <a href="/api/ducks">/api/ducks</a></li>
        <li>POST /api/ducks</li>
        <li>DELETE /api/ducks/{{id}}</li>
        <li>PATCH /api/ducks/{{id}}</li>
        <li>GET <a href="/api/settings">/api/settings</a></li>
        <li>PATCH /api/settings</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// Ducks
// ---------------------------------------------------------------------------

/// List the roster in lane order.
pub async fn list_ducks(State(state): State<Arc<AppState>>) -> Json<Vec<DuckRecord>> {
    let store = state.store.read().await;
    Json(store.ducks().to_vec())
}

/// Append a generated duck. Responds `201 Created` with the new duck.
pub async fn add_duck(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let record = store.add_duck()?;
    info!(duck_id = %record.duck.id, lane = record.duck.lane, ducks = store.len(), "Duck added");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Remove a duck and renumber the remaining lanes.
pub async fn remove_duck(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_duck_id(&id_str)?;
    let mut store = state.store.write().await;
    store.remove_duck(id)?;
    info!(duck_id = %id, ducks = store.len(), "Duck removed");
    Ok(Json(SUCCESS))
}

/// Merge the request body into a duck's record.
pub async fn update_duck(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(patch): Json<DuckPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_duck_id(&id_str)?;
    let mut store = state.store.write().await;
    store.update_duck(id, &patch)?;
    debug!(
        duck_id = %id,
        fields = ?patch.field_names().collect::<Vec<_>>(),
        "Duck updated"
    );
    Ok(Json(SUCCESS))
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Return the race settings.
pub async fn get_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(store.settings())
}

/// Update `raceDuration` and/or `predeterminedWinnerId`.
///
/// Absent keys are left alone. The duration is applied first and is
/// clamped into range. A winner that names no duck on the roster is
/// logged and skipped; the response still carries the current settings.
/// A non-numeric duration is rejected before anything is written.
/// A `null` or non-object body names no fields and changes nothing.
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let empty = Map::new();
    let body = body.as_object().unwrap_or(&empty);

    let requested_duration = body
        .get("raceDuration")
        .map(duration_from_json)
        .transpose()?;

    let mut store = state.store.write().await;

    if let Some(requested) = requested_duration {
        let stored = store.update_race_duration(requested);
        info!(requested, stored, "Race duration updated");
    }

    if let Some(raw) = body.get("predeterminedWinnerId") {
        let outcome = WinnerSelection::from_json(raw)
            .and_then(|selection| store.set_predetermined_winner(selection));
        match outcome {
            Ok(()) => info!(
                winner = ?store.settings().predetermined_winner_id,
                "Predetermined winner updated"
            ),
            Err(e) => warn!(value = %raw, error = %e, "Predetermined winner not set"),
        }
    }

    Ok(Json(store.settings()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a duck id from a path segment, returning an [`ApiError`] on failure.
fn parse_duck_id(s: &str) -> Result<DuckId, ApiError> {
    s.parse::<u32>()
        .map(DuckId)
        .map_err(|e| ApiError::InvalidId(format!("{s}: {e}")))
}
