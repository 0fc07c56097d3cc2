//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory_repo;
pub mod firestore;


pub use traits::TodoRepository;
pub use memory_repo::InMemoryRepository;
pub use firestore::FirestoreRepository;
