use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::auth::middleware::Identity;
use crate::error::AppResult;
use crate::models::user::{ProfileStats, UserProfile};
use crate::AppState;

/// Idempotent profile creation: a second call for an existing owner id
/// reports existing state instead of duplicating.
pub async fn create_user(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> AppResult<Response> {
    if state.store.find_profile(&identity.user_id).await?.is_some() {
        return Ok((
            StatusCode::OK,
            Json(json!({ "message": "User already exists" })),
        )
            .into_response());
    }

    let profile = UserProfile {
        id: Uuid::new_v4(),
        user_id: identity.user_id.clone(),
        email: identity.email.clone(),
        stats: ProfileStats::default(),
        created_at: Utc::now(),
    };

    let stored = state.store.insert_profile(profile).await?;
    Ok((StatusCode::CREATED, Json(stored)).into_response())
}
