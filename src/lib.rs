mod analytics;
mod classifier;
mod models;
mod session;
mod store;

use classifier::ClassifierHandle;
use session::{
    commands::{
        clear_history, get_label_distribution, get_messages, get_recent_messages,
        get_score_series, get_session_state, submit_message,
    },
    SessionController,
};
use store::AnnotationStore;
use tauri::Manager;

pub(crate) struct AppState {
    pub(crate) session: SessionController,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("SentiStream starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let store = AnnotationStore::new();
            let classifier = ClassifierHandle::new();

            app.manage(AppState {
                session: SessionController::new(store, classifier),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            submit_message,
            clear_history,
            get_session_state,
            get_messages,
            get_recent_messages,
            get_label_distribution,
            get_score_series,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
