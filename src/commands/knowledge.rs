use crate::backend::{client, BackendConfig, BackendStatus};
use crate::files;
use crate::session::models::{IngestionResult, SelectedFile};
use crate::session::SessionState;
use serde::Serialize;
use std::path::Path;
use tauri::{AppHandle, Emitter, State};

#[derive(Clone, Serialize)]
struct IngestionEvent {
    result: IngestionResult,
}

fn emit_ingestion(app: &AppHandle, result: IngestionResult) {
    let _ = app.emit("ingestion-updated", IngestionEvent { result });
}

/// Replace the pending selection with the dropped/chosen paths, keeping only
/// supported file types.
#[tauri::command]
pub fn select_files(
    state: State<'_, SessionState>,
    paths: Vec<String>,
) -> Result<Vec<SelectedFile>, String> {
    Ok(state.replace_selection(files::filter_selection(&paths)))
}

/// Ask the backend for chunking parameters suited to the current selection.
/// On success the session config is overwritten with the recommendation.
#[tauri::command]
pub async fn recommend_chunk_settings(state: State<'_, SessionState>) -> Result<String, String> {
    let files = state.selection();
    if files.is_empty() {
        return Err("No files selected".to_string());
    }

    let config = BackendConfig::default();
    let rec = client::recommend_chunk_settings(&config, &files)
        .await
        .map_err(|e| {
            tracing::warn!("chunk recommendation failed: {}", e);
            "Could not get a recommendation. Please try again.".to_string()
        })?;

    state.apply_recommendation(rec.recommended_chunk_size, rec.recommended_chunk_overlap);
    Ok(format!(
        "Recommended chunk size {} with overlap {} for {:.1} KB of documents.",
        rec.recommended_chunk_size, rec.recommended_chunk_overlap, rec.total_file_size_kb
    ))
}

/// Send the selection and ingestion parameters to the backend and track the
/// upload through the `Idle → Uploading → Success/Error` transitions. The
/// trigger control stays disabled while `Uploading`; nothing here serializes
/// concurrent invocations beyond that.
#[tauri::command]
pub async fn build_knowledge_base(
    app: AppHandle,
    state: State<'_, SessionState>,
) -> Result<IngestionResult, String> {
    let (files, params) = state.begin_build()?;
    emit_ingestion(&app, state.ingestion_result());
    tracing::info!(
        files = files.len(),
        chunk_size = params.chunk_size,
        chunk_overlap = params.chunk_overlap,
        "building knowledge base"
    );

    let config = BackendConfig::default();
    let result = match client::build_db(&config, &files, &params).await {
        Ok(summary) => state.complete_build(summary.num_chunks, summary.preview),
        Err(e) => {
            tracing::warn!("knowledge base build failed: {}", e);
            state.fail_build(e.to_string())
        }
    };

    emit_ingestion(&app, result.clone());
    Ok(result)
}

/// Download the knowledge-base archive into a destination the user picked
/// from a save dialog. Returns the number of bytes written.
#[tauri::command]
pub async fn export_database(dest_path: String) -> Result<u64, String> {
    let config = BackendConfig::default();
    let written = client::download_db(&config, Path::new(&dest_path))
        .await
        .map_err(|e| e.to_string())?;
    tracing::info!(bytes = written, path = %dest_path, "exported knowledge base");
    Ok(written)
}

/// Upload a previously exported archive. A successful import relaxes the
/// build precondition.
#[tauri::command]
pub async fn import_database(state: State<'_, SessionState>, path: String) -> Result<(), String> {
    let config = BackendConfig::default();
    client::upload_db(&config, Path::new(&path))
        .await
        .map_err(|e| e.to_string())?;
    state.mark_db_transferred();
    tracing::info!(path = %path, "imported knowledge base");
    Ok(())
}

/// Read-only probe of the backend's vector store.
#[tauri::command]
pub async fn backend_status() -> Result<BackendStatus, String> {
    let config = BackendConfig::default();
    client::status(&config).await.map_err(|e| e.to_string())
}
