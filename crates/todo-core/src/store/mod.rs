//! Store Layer
//!
//! The two interchangeable data layers behind the page.

mod ids;
mod local;
mod persisted;
mod state;


pub use ids::IdGenerator;
pub use local::LocalStore;
pub use persisted::PersistedStore;
pub use state::{CacheUpdate, TodoState};
