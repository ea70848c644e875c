pub mod models;

use models::{
    Exchange, IngestionConfig, IngestionResult, IngestionStatus, LlmConfig, SelectedFile,
};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Bot text shown while a query is in flight.
pub const PENDING_REPLY: &str = "...";

/// Everything the page can observe. Lives for the process lifetime only,
/// never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Session {
    pub selected_files: Vec<SelectedFile>,
    pub ingestion: IngestionConfig,
    pub llm: LlmConfig,
    pub ingestion_result: IngestionResult,
    pub conversation: Vec<Exchange>,
    pub db_transferred: bool,
}

pub struct SessionState {
    pub session: Mutex<Session>,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Mutex::new(Session::default()),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session.lock().unwrap().clone()
    }

    // ── File selection ──

    /// Replaces the selection wholesale with the newly dropped/chosen set.
    pub fn replace_selection(&self, files: Vec<SelectedFile>) -> Vec<SelectedFile> {
        let mut session = self.session.lock().unwrap();
        session.selected_files = files;
        session.selected_files.clone()
    }

    pub fn selection(&self) -> Vec<SelectedFile> {
        self.session.lock().unwrap().selected_files.clone()
    }

    // ── Configuration ──

    pub fn set_ingestion_config(&self, config: IngestionConfig) {
        self.session.lock().unwrap().ingestion = config;
    }

    pub fn set_llm_config(&self, config: LlmConfig) {
        self.session.lock().unwrap().llm = config;
    }

    pub fn llm_config(&self) -> LlmConfig {
        self.session.lock().unwrap().llm.clone()
    }

    pub fn apply_recommendation(&self, chunk_size: u32, chunk_overlap: u32) {
        let mut session = self.session.lock().unwrap();
        session.ingestion.chunk_size = chunk_size;
        session.ingestion.chunk_overlap = chunk_overlap;
    }

    // ── Ingestion ──

    /// Checks the build precondition and transitions to `Uploading`. Returns
    /// the files and parameters the exchange needs so the caller can release
    /// the lock before going to the network.
    pub fn begin_build(&self) -> Result<(Vec<SelectedFile>, IngestionConfig), String> {
        let mut session = self.session.lock().unwrap();
        if session.selected_files.is_empty() && !session.db_transferred {
            return Err("No files selected".to_string());
        }
        session.ingestion_result = IngestionResult {
            status: IngestionStatus::Uploading,
            message: None,
            preview: None,
            error_detail: None,
        };
        Ok((session.selected_files.clone(), session.ingestion.clone()))
    }

    /// Terminal transition on success: record the summary, clear the selection.
    pub fn complete_build(&self, num_chunks: u64, preview: Option<String>) -> IngestionResult {
        let mut session = self.session.lock().unwrap();
        session.ingestion_result = IngestionResult {
            status: IngestionStatus::Success,
            message: Some(format!("Database built! {} chunks.", num_chunks)),
            preview,
            error_detail: None,
        };
        session.selected_files.clear();
        session.ingestion_result.clone()
    }

    /// Terminal transition on failure: the selection stays untouched.
    pub fn fail_build(&self, detail: String) -> IngestionResult {
        let mut session = self.session.lock().unwrap();
        session.ingestion_result = IngestionResult {
            status: IngestionStatus::Error,
            message: None,
            preview: None,
            error_detail: Some(detail),
        };
        session.ingestion_result.clone()
    }

    pub fn ingestion_result(&self) -> IngestionResult {
        self.session.lock().unwrap().ingestion_result.clone()
    }

    pub fn mark_db_transferred(&self) {
        self.session.lock().unwrap().db_transferred = true;
    }

    // ── Conversation ──

    /// Appends a new exchange with a placeholder reply. Blank prompts are a
    /// no-op and return `None`.
    pub fn append_exchange(&self, user: &str) -> Option<Vec<Exchange>> {
        if user.trim().is_empty() {
            return None;
        }
        let mut session = self.session.lock().unwrap();
        session.conversation.push(Exchange {
            id: uuid::Uuid::new_v4().to_string(),
            user: user.to_string(),
            bot: PENDING_REPLY.to_string(),
            sources: Vec::new(),
            created_at: now_secs(),
        });
        Some(session.conversation.clone())
    }

    /// Resolves the most-recently-appended exchange in place. The UI
    /// serializes query submission, so the last entry is always the one whose
    /// request was in flight.
    pub fn resolve_last_exchange(&self, bot: String, sources: Vec<String>) -> Vec<Exchange> {
        let mut session = self.session.lock().unwrap();
        if let Some(last) = session.conversation.last_mut() {
            last.bot = bot;
            last.sources = sources;
        }
        session.conversation.clone()
    }

    pub fn conversation(&self) -> Vec<Exchange> {
        self.session.lock().unwrap().conversation.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> SelectedFile {
        SelectedFile {
            path: format!("/tmp/{}", name),
            file_name: name.to_string(),
            size: Some(1024),
        }
    }

    #[test]
    fn test_append_then_resolve_is_one_entry() {
        let state = SessionState::new();
        let log = state.append_exchange("What is X?").unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].bot, PENDING_REPLY);

        let log = state.resolve_last_exchange("X is ...".to_string(), Vec::new());
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].user, "What is X?");
        assert_eq!(log[0].bot, "X is ...");
    }

    #[test]
    fn test_blank_prompt_is_noop() {
        let state = SessionState::new();
        assert!(state.append_exchange("").is_none());
        assert!(state.append_exchange("   \t").is_none());
        assert!(state.conversation().is_empty());
    }

    #[test]
    fn test_resolve_targets_last_entry() {
        let state = SessionState::new();
        state.append_exchange("first").unwrap();
        state.resolve_last_exchange("one".to_string(), Vec::new());
        state.append_exchange("second").unwrap();
        let log = state.resolve_last_exchange("two".to_string(), vec!["src".to_string()]);

        assert_eq!(log.len(), 2);
        assert_eq!(log[0].bot, "one");
        assert_eq!(log[1].bot, "two");
        assert_eq!(log[1].sources, vec!["src".to_string()]);
    }

    #[test]
    fn test_begin_build_requires_files_or_import() {
        let state = SessionState::new();
        assert!(state.begin_build().is_err());
        assert_eq!(state.ingestion_result().status, IngestionStatus::Idle);

        state.mark_db_transferred();
        assert!(state.begin_build().is_ok());
        assert_eq!(state.ingestion_result().status, IngestionStatus::Uploading);
    }

    #[test]
    fn test_build_success_clears_selection() {
        let state = SessionState::new();
        state.replace_selection(vec![file("a.pdf"), file("b.csv")]);

        let (files, _) = state.begin_build().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(state.ingestion_result().status, IngestionStatus::Uploading);

        let result = state.complete_build(42, None);
        assert_eq!(result.status, IngestionStatus::Success);
        assert_eq!(result.message.as_deref(), Some("Database built! 42 chunks."));
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_build_failure_keeps_selection() {
        let state = SessionState::new();
        state.replace_selection(vec![file("a.pdf")]);
        state.begin_build().unwrap();

        let result = state.fail_build("API error: 500 - boom".to_string());
        assert_eq!(result.status, IngestionStatus::Error);
        assert_eq!(result.error_detail.as_deref(), Some("API error: 500 - boom"));
        assert_eq!(state.selection().len(), 1);
    }

    #[test]
    fn test_build_is_reenterable_after_error() {
        let state = SessionState::new();
        state.replace_selection(vec![file("a.pdf")]);
        state.begin_build().unwrap();
        state.fail_build("boom".to_string());

        state.begin_build().unwrap();
        let result = state.ingestion_result();
        assert_eq!(result.status, IngestionStatus::Uploading);
        assert!(result.error_detail.is_none());
    }

    #[test]
    fn test_apply_recommendation_overwrites_config_only() {
        let state = SessionState::new();
        state.replace_selection(vec![file("paper.pdf")]);
        state.apply_recommendation(800, 100);

        let session = state.snapshot();
        assert_eq!(session.ingestion.chunk_size, 800);
        assert_eq!(session.ingestion.chunk_overlap, 100);
        assert_eq!(session.selected_files.len(), 1);
    }

    #[test]
    fn test_replace_selection_is_wholesale() {
        let state = SessionState::new();
        state.replace_selection(vec![file("a.pdf"), file("b.csv")]);
        let selection = state.replace_selection(vec![file("c.txt")]);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection[0].file_name, "c.txt");
    }
}
