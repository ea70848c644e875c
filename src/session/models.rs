use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SelectedFile {
    pub path: String,
    pub file_name: String,
    pub size: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IngestionConfig {
    pub chunk_size: u32,
    pub chunk_overlap: u32,
    pub embedding_model: String,
    pub ocr_language: String,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
            embedding_model: "sentence-transformers/all-MiniLM-L6-v2".to_string(),
            ocr_language: "eng".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmConfig {
    pub model: String,
    pub instruction: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "qwen3:1.7b".to_string(),
            instruction: "Answer concisely".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IngestionStatus {
    Idle,
    Uploading,
    Success,
    Error,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IngestionResult {
    pub status: IngestionStatus,
    pub message: Option<String>,
    pub preview: Option<String>,
    pub error_detail: Option<String>,
}

impl Default for IngestionResult {
    fn default() -> Self {
        Self {
            status: IngestionStatus::Idle,
            message: None,
            preview: None,
            error_detail: None,
        }
    }
}

/// One chat turn. `bot` holds a placeholder until the query resolves, then is
/// replaced in place with the answer or an error annotation.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Exchange {
    pub id: String,
    pub user: String,
    pub bot: String,
    pub sources: Vec<String>,
    pub created_at: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub provider: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OcrLanguage {
    pub code: String,
    pub name: String,
}
