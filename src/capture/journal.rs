use chrono::NaiveDate;

use super::toggle::ToggleSet;

const DEFAULT_PLACEHOLDER: &str = "What's on your mind today? Write freely...";

/// Payload produced by a completed journal capture, mirroring the
/// gateway's `POST /api/journal` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalPayload {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Ephemeral journal-draft state. A selected prompt only feeds the body
/// placeholder; it never becomes body text on its own.
#[derive(Debug, Default, Clone)]
pub struct JournalDraft {
    title: String,
    body: String,
    tags: ToggleSet,
    prompt: Option<&'static str>,
}

impl JournalDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_body(&mut self, body: &str) {
        self.body = body.to_string();
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.tags.toggle(tag);
    }

    pub fn tags(&self) -> &[String] {
        self.tags.items()
    }

    pub fn select_prompt(&mut self, prompt: &'static str) {
        self.prompt = Some(prompt);
    }

    pub fn clear_prompt(&mut self) {
        self.prompt = None;
    }

    pub fn selected_prompt(&self) -> Option<&'static str> {
        self.prompt
    }

    /// Placeholder shown in the empty body field: the selected prompt if
    /// any, otherwise the stock invitation.
    pub fn body_placeholder(&self) -> &'static str {
        self.prompt.unwrap_or(DEFAULT_PLACEHOLDER)
    }

    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty() && !self.body.trim().is_empty()
    }

    /// Produce the save payload and reset the form, or `None` when title or
    /// body is blank.
    pub fn save(&mut self) -> Option<JournalPayload> {
        if !self.can_save() {
            return None;
        }
        let payload = JournalPayload {
            title: std::mem::take(&mut self.title),
            content: std::mem::take(&mut self.body),
            tags: self.tags.take(),
        };
        self.prompt = None;
        Some(payload)
    }
}

/// Entry as held in the page-local list: synthesized sequential id plus the
/// save-day date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEntry {
    pub id: usize,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
}

/// In-memory list of saved entries, newest first.
#[derive(Debug, Default, Clone)]
pub struct JournalLog {
    entries: Vec<LocalEntry>,
}

impl JournalLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a saved entry with the next sequential id.
    pub fn add(&mut self, payload: JournalPayload, date: NaiveDate) -> &LocalEntry {
        let entry = LocalEntry {
            id: self.entries.len() + 1,
            title: payload.title,
            content: payload.content,
            date,
            tags: payload.tags,
        };
        self.entries.insert(0, entry);
        &self.entries[0]
    }

    pub fn entries(&self) -> &[LocalEntry] {
        &self.entries
    }

    /// Case-insensitive substring match across title, content, and tags.
    /// An empty term matches every entry.
    pub fn search(&self, term: &str) -> Vec<&LocalEntry> {
        let term = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&term)
                    || e.content.to_lowercase().contains(&term)
                    || e.tags.iter().any(|t| t.to_lowercase().contains(&term))
            })
            .collect()
    }
}
