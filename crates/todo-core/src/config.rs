//! Configuration
//!
//! Connection parameters and app settings, read once at start-up from
//! environment-style key/value lookups. Nothing is validated: a missing
//! Firebase value becomes an empty string and remote calls fail later.

use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com";
pub const DEFAULT_COLLECTION: &str = "todos";

/// Firebase web-app connection parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: String,
}

impl FirebaseConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            api_key: get("FIREBASE_API_KEY"),
            auth_domain: get("FIREBASE_AUTH_DOMAIN"),
            project_id: get("FIREBASE_PROJECT_ID"),
            storage_bucket: get("FIREBASE_STORAGE_BUCKET"),
            messaging_sender_id: get("FIREBASE_MESSAGING_SENDER_ID"),
            app_id: get("FIREBASE_APP_ID"),
            measurement_id: get("FIREBASE_MEASUREMENT_ID"),
        }
    }
}

/// Which store backs the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendKind {
    #[default]
    Local,
    Firestore,
}

impl BackendKind {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" | "firebase" | "remote" => BackendKind::Firestore,
            _ => BackendKind::Local,
        }
    }
}

/// What the persisted store writes when a todo's checkmark is clicked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleMode {
    /// Always writes `completed = true`; a completed todo can't be reopened
    #[default]
    CompleteOnly,
    /// Writes the negation of the displayed state
    Flip,
}

impl ToggleMode {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "flip" | "toggle" => ToggleMode::Flip,
            _ => ToggleMode::CompleteOnly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: BackendKind,
    pub firebase: FirebaseConfig,
    /// Firestore collection holding the todos
    pub collection: String,
    /// Base URL of the Firestore REST API (or an emulator)
    pub endpoint: String,
    pub toggle_mode: ToggleMode,
    /// Seed the local store with the sample todos
    pub seed_samples: bool,
    /// Poll the remote collection at this interval; `None` disables polling
    pub refetch_interval: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            firebase: FirebaseConfig::default(),
            collection: DEFAULT_COLLECTION.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            toggle_mode: ToggleMode::default(),
            seed_samples: true,
            refetch_interval: None,
        }
    }
}

impl AppConfig {
    /// Build from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let config = Self {
            backend: lookup("TODO_BACKEND")
                .map(|v| BackendKind::from_str(&v))
                .unwrap_or(defaults.backend),
            firebase: FirebaseConfig::from_lookup(&lookup),
            collection: lookup("TODO_COLLECTION")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.collection),
            endpoint: lookup("FIRESTORE_ENDPOINT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.endpoint),
            toggle_mode: lookup("TODO_TOGGLE_MODE")
                .map(|v| ToggleMode::from_str(&v))
                .unwrap_or(defaults.toggle_mode),
            seed_samples: lookup("TODO_SEED_SAMPLES")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_samples),
            refetch_interval: lookup("TODO_REFETCH_INTERVAL_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        };

        if config.backend == BackendKind::Firestore {
            if config.firebase.project_id.is_empty() {
                log::warn!("FIREBASE_PROJECT_ID is not set, remote calls will fail");
            }
            if config.firebase.api_key.is_empty() {
                log::warn!("FIREBASE_API_KEY is not set");
            }
        }
        config
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
