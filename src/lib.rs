mod backend;
mod commands;
mod files;
mod session;

use session::SessionState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(SessionState::new())
        .invoke_handler(tauri::generate_handler![
            commands::knowledge::select_files,
            commands::knowledge::recommend_chunk_settings,
            commands::knowledge::build_knowledge_base,
            commands::knowledge::export_database,
            commands::knowledge::import_database,
            commands::knowledge::backend_status,
            commands::chat::send_query,
            commands::chat::get_conversation,
            commands::settings::get_session,
            commands::settings::set_ingestion_config,
            commands::settings::set_llm_config,
            commands::settings::available_embedding_models,
            commands::settings::available_llm_models,
            commands::settings::available_ocr_languages,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
