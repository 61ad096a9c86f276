//! Profile presentation routes
//!
//! Exposes the loader's observable state to the frontend:
//! - snapshot and per-field reads of the presentation state
//! - a trigger endpoint that kicks off a refresh in the background
//! - a WebSocket that streams every state change as JSON

use axum::{
    Json, Router,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
    routing::{get, post},
};
use futures_util::{SinkExt, StreamExt};
use gitscope_services::services::github::{GithubRepo, GithubUser, ProfileLoader, ProfileViewState};
use gitscope_utils::response::ApiResponse;
use serde::Serialize;
use ts_rs::TS;

use crate::error::ApiError;

/// Acknowledgement returned by the fetch trigger.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct FetchTriggered {
    pub username: String,
    pub message: String,
}

pub fn router(loader: &ProfileLoader) -> Router {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile/user", get(get_profile_user))
        .route("/profile/repos", get(get_profile_repos))
        .route("/profile/fetch", post(trigger_fetch))
        .route("/profile/stream", get(stream_profile_ws))
        .with_state(loader.clone())
}

// ============================================================================
// State read endpoints
// ============================================================================

/// GET /api/profile - full presentation state snapshot
pub async fn get_profile(
    State(loader): State<ProfileLoader>,
) -> Json<ApiResponse<ProfileViewState>> {
    Json(ApiResponse::success(loader.state()))
}

/// GET /api/profile/user - the loaded profile; 404 until a fetch settles
pub async fn get_profile_user(
    State(loader): State<ProfileLoader>,
) -> Result<Json<ApiResponse<GithubUser>>, ApiError> {
    let user = loader.user().ok_or(ApiError::ProfileNotLoaded)?;
    Ok(Json(ApiResponse::success(user)))
}

/// GET /api/profile/repos - the filtered repository list, possibly empty
pub async fn get_profile_repos(
    State(loader): State<ProfileLoader>,
) -> Json<ApiResponse<Vec<GithubRepo>>> {
    Json(ApiResponse::success(loader.repos()))
}

// ============================================================================
// Fetch trigger
// ============================================================================

/// POST /api/profile/fetch - kick off a refresh and return immediately
pub async fn trigger_fetch(
    State(loader): State<ProfileLoader>,
) -> Json<ApiResponse<FetchTriggered>> {
    tracing::info!("Refreshing GitHub data for {}", loader.username());
    loader.fetch_user_data();

    Json(ApiResponse::success(FetchTriggered {
        username: loader.username().to_string(),
        message: "Fetch started in background".to_string(),
    }))
}

// ============================================================================
// State streaming
// ============================================================================

/// GET /api/profile/stream - WebSocket pushing one JSON state per change
pub async fn stream_profile_ws(
    ws: WebSocketUpgrade,
    State(loader): State<ProfileLoader>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| async move {
        let result = handle_profile_stream(socket, loader).await;
        if let Err(e) = result {
            tracing::warn!("profile stream WS closed: {}", e);
        }
    })
}

/// Send the current snapshot on connect, then every subsequent state change.
async fn handle_profile_stream(socket: WebSocket, loader: ProfileLoader) -> anyhow::Result<()> {
    let mut rx = loader.subscribe();
    let (mut sender, mut receiver) = socket.split();

    tokio::spawn(async move { while let Some(Ok(_)) = receiver.next().await {} });

    loop {
        let payload = {
            let state = rx.borrow_and_update();
            serde_json::to_string(&*state)?
        };

        if sender.send(Message::Text(payload.into())).await.is_err() {
            break;
        }

        if rx.changed().await.is_err() {
            break;
        }
    }

    Ok(())
}
