//! Firestore-backed storage

pub mod document;
mod firestore_repo;

pub use firestore_repo::FirestoreRepository;
