// Module declarations
mod commands;
mod core;
mod models;

use commands::viewer::{
    close_tab, list_tabs, open_archive, open_dropped_paths, restore_all_tabs, restore_last_tab,
    search_tab, select_tab, ViewerState,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    if let Err(e) = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger init failed: {}", e);
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .manage(ViewerState::new())
        .invoke_handler(tauri::generate_handler![
            open_archive,
            open_dropped_paths,
            close_tab,
            select_tab,
            restore_last_tab,
            restore_all_tabs,
            search_tab,
            list_tabs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
