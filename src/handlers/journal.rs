use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::Identity;
use crate::error::{AppError, AppResult};
use crate::models::journal::{CreateJournalRequest, JournalEntry};
use crate::AppState;

pub async fn list_journal_entries(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> AppResult<Json<Vec<JournalEntry>>> {
    let entries = state.store.list_journals(&identity.user_id).await?;
    Ok(Json(entries))
}

pub async fn create_journal_entry(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<CreateJournalRequest>,
) -> AppResult<(StatusCode, Json<JournalEntry>)> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Title and content must both be present and non-blank.
    let (title, content) = match (&body.title, &body.content) {
        (Some(t), Some(c)) if !t.trim().is_empty() && !c.trim().is_empty() => {
            (t.clone(), c.clone())
        }
        _ => return Err(AppError::Validation("Missing title or content".into())),
    };

    let now = Utc::now();
    let entry = JournalEntry {
        id: Uuid::new_v4(),
        user_id: identity.user_id.clone(),
        title,
        content,
        tags: body.tags.unwrap_or_default(),
        created_at: now,
        updated_at: now,
    };

    let stored = state.store.insert_journal(entry).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}
