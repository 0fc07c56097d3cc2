//! Build-time configuration
//!
//! The page has no process environment, so settings are baked in when
//! the bundle is compiled (e.g. `TODO_BACKEND=firestore trunk build`).

use log::LevelFilter;
use todo_core::AppConfig;

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "TODO_BACKEND" => option_env!("TODO_BACKEND"),
        "TODO_COLLECTION" => option_env!("TODO_COLLECTION"),
        "TODO_TOGGLE_MODE" => option_env!("TODO_TOGGLE_MODE"),
        "TODO_SEED_SAMPLES" => option_env!("TODO_SEED_SAMPLES"),
        "TODO_REFETCH_INTERVAL_SECS" => option_env!("TODO_REFETCH_INTERVAL_SECS"),
        "FIRESTORE_ENDPOINT" => option_env!("FIRESTORE_ENDPOINT"),
        "FIREBASE_API_KEY" => option_env!("FIREBASE_API_KEY"),
        "FIREBASE_AUTH_DOMAIN" => option_env!("FIREBASE_AUTH_DOMAIN"),
        "FIREBASE_PROJECT_ID" => option_env!("FIREBASE_PROJECT_ID"),
        "FIREBASE_STORAGE_BUCKET" => option_env!("FIREBASE_STORAGE_BUCKET"),
        "FIREBASE_MESSAGING_SENDER_ID" => option_env!("FIREBASE_MESSAGING_SENDER_ID"),
        "FIREBASE_APP_ID" => option_env!("FIREBASE_APP_ID"),
        "FIREBASE_MEASUREMENT_ID" => option_env!("FIREBASE_MEASUREMENT_ID"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn load() -> AppConfig {
    AppConfig::from_lookup(build_env)
}

pub fn log_level() -> LevelFilter {
    option_env!("TODO_LOG")
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Info)
}
