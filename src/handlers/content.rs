use axum::Json;
use serde_json::{json, Value};

use crate::content;

pub async fn list_myths() -> Json<Value> {
    Json(json!({
        "categories": content::MYTH_CATEGORIES,
        "myths": content::MYTHS,
    }))
}

pub async fn list_stories() -> Json<Value> {
    Json(json!({
        "categories": content::STORY_CATEGORIES,
        "stories": content::STORIES,
    }))
}

pub async fn list_prompts() -> Json<Value> {
    Json(json!({
        "journalPrompts": content::JOURNAL_PROMPTS,
        "journalTags": content::JOURNAL_TAGS,
        "moodFactors": content::MOOD_FACTORS,
        "conversationStarters": content::CONVERSATION_STARTERS,
    }))
}
