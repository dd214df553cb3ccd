//! Churn Insight Core - Main Entry Point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod logic;
pub mod constants;

use api::commands;
use logic::artifacts::ArtifactBundle;
use logic::history::HistoryStore;

// --- Window Control Commands (Manual Implementation) ---
#[tauri::command]
async fn window_minimize(window: tauri::Window) {
    let _ = window.minimize();
}

#[tauri::command]
async fn window_toggle_maximize(window: tauri::Window) {
    if let Ok(is_max) = window.is_maximized() {
        if is_max {
            let _ = window.unmaximize();
        } else {
            let _ = window.maximize();
        }
    }
}

#[tauri::command]
async fn window_close(window: tauri::Window) {
    let _ = window.close();
}

#[tauri::command]
async fn window_start_drag(window: tauri::Window) {
    let _ = window.start_dragging();
}

#[tauri::command]
async fn show_main_window(window: tauri::Window) {
    let _ = window.show();
    let _ = window.set_focus();
}
// -----------------------------------------------------

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    // Artifacts load exactly once. A missing or inconsistent artifact set is
    // fatal: there is no degraded mode, so abort with a clear message.
    let bundle = match ArtifactBundle::load(&constants::ARTIFACT_DIR) {
        Ok(bundle) => bundle,
        Err(e) => {
            log::error!("Failed to initialize artifacts: {}", e);
            eprintln!(
                "Fatal: cannot start without model artifacts ({}). \
                 Set CHURN_ARTIFACT_DIR or place them under ./{}.",
                e,
                constants::DEFAULT_ARTIFACT_DIR
            );
            std::process::exit(1);
        }
    };

    tauri::Builder::default()
        .manage(bundle)
        .manage(HistoryStore::new())
        .invoke_handler(tauri::generate_handler![
            // Window Controls (Manual)
            window_minimize,
            window_toggle_maximize,
            window_close,
            window_start_drag,
            show_main_window,
            // Status Commands
            commands::get_model_status,
            commands::get_input_options,
            // Prediction Commands
            commands::predict_churn,
            commands::get_risk_factors,
            commands::get_radar_profile,
            // History Commands
            commands::save_prediction,
            commands::get_prediction_history,
            commands::clear_prediction_history,
            // Batch Commands
            commands::upload_batch_csv,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
