pub mod client;

use serde::{Deserialize, Serialize};

/// Base URL of the RAG backend service, fixed at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Result of a knowledge-base build: chunk count plus an optional content preview.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BuildSummary {
    pub num_chunks: u64,
    #[serde(default)]
    pub preview: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChunkRecommendation {
    pub recommended_chunk_size: u32,
    pub recommended_chunk_overlap: u32,
    pub total_file_size_kb: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendStatus {
    pub vector_store_ready: bool,
    pub num_chunks: u64,
}

/// Answer to a retrieval query, with the chunks the backend grounded it on.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QueryAnswer {
    pub content: String,
    pub sources: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
