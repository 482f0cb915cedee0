use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: String,
    pub mood_score: i32,
    pub notes: String,
    pub factors: Vec<String>,
    /// Event time of the mood log; list order key.
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoodRequest {
    /// Required; presence is checked in the handler so a missing score
    /// yields 400 rather than a deserialization rejection.
    #[validate(range(min = 1, max = 10, message = "moodScore must be between 1 and 10"))]
    pub mood_score: Option<i32>,
    pub notes: Option<String>,
    pub factors: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_entry_serializes_camel_case() {
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            user_id: "user_1".into(),
            mood_score: 7,
            notes: String::new(),
            factors: vec!["Sleep".into()],
            date: Utc::now(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("moodScore").is_some());
        assert!(json.get("userId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("mood_score").is_none());
    }
}
