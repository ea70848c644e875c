use crate::session::models::{IngestionConfig, LlmConfig, ModelInfo, OcrLanguage};
use crate::session::{Session, SessionState};
use tauri::State;

#[tauri::command]
pub fn get_session(state: State<'_, SessionState>) -> Result<Session, String> {
    Ok(state.snapshot())
}

#[tauri::command]
pub fn set_ingestion_config(
    state: State<'_, SessionState>,
    config: IngestionConfig,
) -> Result<(), String> {
    if config.chunk_size == 0 {
        return Err("Chunk size must be positive".to_string());
    }
    if config.chunk_overlap >= config.chunk_size {
        return Err("Chunk overlap must be smaller than chunk size".to_string());
    }
    state.set_ingestion_config(config);
    Ok(())
}

#[tauri::command]
pub fn set_llm_config(state: State<'_, SessionState>, config: LlmConfig) -> Result<(), String> {
    state.set_llm_config(config);
    Ok(())
}

#[tauri::command]
pub fn available_embedding_models() -> Vec<ModelInfo> {
    vec![ModelInfo {
        id: "sentence-transformers/all-MiniLM-L6-v2".into(),
        name: "All-MiniLM-L6-v2".into(),
        provider: "SentenceTransformers".into(),
    }]
}

#[tauri::command]
pub fn available_llm_models() -> Vec<ModelInfo> {
    vec![
        ModelInfo {
            id: "qwen3:1.7b".into(),
            name: "Qwen 3 1.7B".into(),
            provider: "Ollama".into(),
        },
        ModelInfo {
            id: "qwen2:1.7b".into(),
            name: "Qwen 2 1.7B".into(),
            provider: "Ollama".into(),
        },
    ]
}

#[tauri::command]
pub fn available_ocr_languages() -> Vec<OcrLanguage> {
    [
        ("eng", "English"),
        ("deu", "German"),
        ("fra", "French"),
        ("spa", "Spanish"),
        ("auto", "Auto-detect"),
    ]
    .iter()
    .map(|(code, name)| OcrLanguage {
        code: (*code).into(),
        name: (*name).into(),
    })
    .collect()
}
