use super::toggle::ToggleSet;

pub const MOOD_MIN: i32 = 1;
pub const MOOD_MAX: i32 = 10;

const MOOD_EMOJIS: [&str; 10] = ["😢", "😟", "😕", "😐", "🙂", "😊", "😄", "😁", "🤩", "🥳"];

const MOOD_LABELS: [&str; 10] = [
    "Terrible",
    "Very Bad",
    "Bad",
    "Poor",
    "Okay",
    "Good",
    "Great",
    "Excellent",
    "Amazing",
    "Perfect",
];

pub fn emoji(score: i32) -> Option<&'static str> {
    mood_index(score).map(|i| MOOD_EMOJIS[i])
}

pub fn label(score: i32) -> Option<&'static str> {
    mood_index(score).map(|i| MOOD_LABELS[i])
}

fn mood_index(score: i32) -> Option<usize> {
    (MOOD_MIN..=MOOD_MAX)
        .contains(&score)
        .then(|| (score - 1) as usize)
}

/// Payload produced by a completed mood capture, mirroring the gateway's
/// `POST /api/mood` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodPayload {
    pub mood_score: i32,
    pub notes: String,
    pub factors: Vec<String>,
}

/// Ephemeral mood-capture form state. Save is unavailable until a score is
/// selected; a successful save clears score, note, and factors together.
#[derive(Debug, Default, Clone)]
pub struct MoodDraft {
    selected: Option<i32>,
    note: String,
    factors: ToggleSet,
}

impl MoodDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a score on the 1-10 scale, replacing any prior selection.
    /// Out-of-range scores are rejected and leave the draft untouched.
    pub fn select(&mut self, score: i32) -> bool {
        if (MOOD_MIN..=MOOD_MAX).contains(&score) {
            self.selected = Some(score);
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<i32> {
        self.selected
    }

    pub fn set_note(&mut self, note: &str) {
        self.note = note.to_string();
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn toggle_factor(&mut self, factor: &str) {
        self.factors.toggle(factor);
    }

    pub fn factors(&self) -> &[String] {
        self.factors.items()
    }

    pub fn can_save(&self) -> bool {
        self.selected.is_some()
    }

    /// Produce the save payload and reset the whole form, or `None` when no
    /// score is selected (save control disabled).
    pub fn save(&mut self) -> Option<MoodPayload> {
        let mood_score = self.selected.take()?;
        Some(MoodPayload {
            mood_score,
            notes: std::mem::take(&mut self.note),
            factors: self.factors.take(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_disabled_without_selection() {
        let mut draft = MoodDraft::new();
        draft.set_note("note without a score");
        assert!(!draft.can_save());
        assert!(draft.save().is_none());
        // A failed save must not discard the note.
        assert_eq!(draft.note(), "note without a score");
    }

    #[test]
    fn test_every_score_round_trips_and_clears() {
        for score in MOOD_MIN..=MOOD_MAX {
            let mut draft = MoodDraft::new();
            assert!(draft.select(score));
            draft.set_note("tired");
            draft.toggle_factor("Sleep");

            let payload = draft.save().expect("save must succeed with a score");
            assert_eq!(payload.mood_score, score);
            assert_eq!(payload.notes, "tired");
            assert_eq!(payload.factors, vec!["Sleep".to_string()]);

            // Atomic reset: all three fields cleared together.
            assert!(draft.selected().is_none());
            assert!(draft.note().is_empty());
            assert!(draft.factors().is_empty());
            assert!(draft.save().is_none());
        }
    }

    #[test]
    fn test_reselection_replaces_prior_score() {
        let mut draft = MoodDraft::new();
        draft.select(3);
        draft.select(9);
        assert_eq!(draft.selected(), Some(9));
    }

    #[test]
    fn test_out_of_range_scores_rejected() {
        let mut draft = MoodDraft::new();
        assert!(!draft.select(0));
        assert!(!draft.select(11));
        assert!(draft.selected().is_none());
    }

    #[test]
    fn test_factor_toggle_is_idempotent_pair() {
        let mut draft = MoodDraft::new();
        draft.toggle_factor("Stress");
        draft.toggle_factor("Stress");
        assert!(draft.factors().is_empty());
    }

    #[test]
    fn test_emoji_and_label_lookup() {
        assert_eq!(emoji(1), Some("😢"));
        assert_eq!(label(1), Some("Terrible"));
        assert_eq!(emoji(10), Some("🥳"));
        assert_eq!(label(10), Some("Perfect"));
        assert_eq!(emoji(0), None);
        assert_eq!(label(11), None);
    }
}
