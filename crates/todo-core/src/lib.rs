//! Todo List Core
//!
//! Layered architecture:
//! - domain: todo entity, ids and summary counts
//! - repository: storage abstraction, in-memory and Firestore backends
//! - store: the local and persisted data layers behind the page
//! - render: pure page model consumed by the UI

pub mod config;
pub mod domain;
pub mod render;
pub mod repository;
pub mod store;
pub mod view_state;

pub use config::{AppConfig, BackendKind, FirebaseConfig, ToggleMode};
pub use domain::{DomainError, DomainResult, Summary, Todo, TodoId};
pub use render::{render_page, ListBody, PageModel, RowAction, RowMode, RowModel};
pub use repository::{FirestoreRepository, InMemoryRepository, TodoRepository};
pub use store::{CacheUpdate, LocalStore, PersistedStore, TodoState};
pub use view_state::{EditDraft, ViewState};
