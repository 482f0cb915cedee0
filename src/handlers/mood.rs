use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::Identity;
use crate::error::{AppError, AppResult};
use crate::models::mood::{CreateMoodRequest, MoodEntry};
use crate::AppState;

pub async fn list_mood_entries(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = state.store.list_moods(&identity.user_id).await?;
    Ok(Json(entries))
}

pub async fn create_mood_entry(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<CreateMoodRequest>,
) -> AppResult<(StatusCode, Json<MoodEntry>)> {
    let mood_score = body
        .mood_score
        .ok_or_else(|| AppError::Validation("Missing moodScore".into()))?;
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let now = Utc::now();
    let entry = MoodEntry {
        id: Uuid::new_v4(),
        user_id: identity.user_id.clone(),
        mood_score,
        notes: body.notes.unwrap_or_default(),
        factors: body.factors.unwrap_or_default(),
        date: now,
        created_at: now,
    };

    let stored = state.store.insert_mood(entry).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}
