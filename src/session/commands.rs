use std::collections::HashMap;

use tauri::{AppHandle, Emitter, State};

use crate::{
    analytics::{self, ScorePoint},
    models::Record,
    session::{SessionController, SessionSnapshot},
    AppState,
};

fn controller_from_state(state: &State<'_, AppState>) -> SessionController {
    state.session.clone()
}

#[tauri::command]
pub async fn submit_message(
    state: State<'_, AppState>,
    app_handle: AppHandle,
    text: String,
) -> Result<Record, String> {
    let controller = controller_from_state(&state);
    let record = controller.submit(&text).await.map_err(|e| e.to_string())?;

    app_handle
        .emit("message-classified", &record)
        .map_err(|e| e.to_string())?;

    Ok(record)
}

#[tauri::command]
pub async fn clear_history(
    state: State<'_, AppState>,
    app_handle: AppHandle,
) -> Result<usize, String> {
    let controller = controller_from_state(&state);
    let dropped = controller.clear_history().await.map_err(|e| e.to_string())?;

    app_handle
        .emit("history-cleared", dropped)
        .map_err(|e| e.to_string())?;

    Ok(dropped)
}

#[tauri::command]
pub async fn get_session_state(state: State<'_, AppState>) -> Result<SessionSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.snapshot().await)
}

#[tauri::command]
pub async fn get_messages(state: State<'_, AppState>) -> Result<Vec<Record>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.current_log().await)
}

/// Log sorted newest-first, the order the history table renders in.
#[tauri::command]
pub async fn get_recent_messages(state: State<'_, AppState>) -> Result<Vec<Record>, String> {
    let controller = controller_from_state(&state);
    Ok(analytics::newest_first(controller.current_log().await))
}

#[tauri::command]
pub async fn get_label_distribution(
    state: State<'_, AppState>,
) -> Result<HashMap<String, usize>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.label_distribution().await)
}

/// Score series sorted oldest-first for the trend chart.
#[tauri::command]
pub async fn get_score_series(state: State<'_, AppState>) -> Result<Vec<ScorePoint>, String> {
    let controller = controller_from_state(&state);
    Ok(analytics::chronological(controller.score_series().await))
}
