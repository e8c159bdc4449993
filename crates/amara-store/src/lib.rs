//! amara-store
//!
//! In-memory storage collaborator for the screening core: assessments,
//! care plans, and user goals, keyed by user id. The API server holds one
//! [`store::MemoryStore`] and shares it across request handlers.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::MemoryStore;
