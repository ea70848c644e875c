use crate::backend::{client, BackendConfig};
use crate::session::models::Exchange;
use crate::session::SessionState;
use serde::Serialize;
use tauri::{AppHandle, Emitter, State};

/// Fixed retrieval depth for every query.
const TOP_K: u32 = 5;

#[derive(Clone, Serialize)]
struct ConversationEvent {
    conversation: Vec<Exchange>,
}

#[tauri::command]
pub fn get_conversation(state: State<'_, SessionState>) -> Result<Vec<Exchange>, String> {
    Ok(state.conversation())
}

/// Append the user's prompt with a placeholder reply, query the backend, then
/// replace the placeholder in place with the answer or an error annotation.
/// The input stays disabled while a request is outstanding, so at most one
/// query is ever in flight.
#[tauri::command]
pub async fn send_query(
    app: AppHandle,
    state: State<'_, SessionState>,
    prompt: String,
) -> Result<Vec<Exchange>, String> {
    // Blank input: no network call, no log mutation.
    let Some(log) = state.append_exchange(&prompt) else {
        return Ok(state.conversation());
    };
    let _ = app.emit("conversation-updated", ConversationEvent { conversation: log });

    let llm = state.llm_config();
    let full_prompt = format!("{}\n\n{}", llm.instruction, prompt);

    let config = BackendConfig::default();
    let log = match client::query(&config, &full_prompt, &llm.model, TOP_K).await {
        Ok(answer) => state.resolve_last_exchange(answer.content, answer.sources),
        Err(e) => {
            tracing::warn!("query failed: {}", e);
            state.resolve_last_exchange(format!("Error: {}", e), Vec::new())
        }
    };

    let _ = app.emit(
        "conversation-updated",
        ConversationEvent {
            conversation: log.clone(),
        },
    );
    Ok(log)
}
