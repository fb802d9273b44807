pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod store;

// Export API types
pub use api::{create_router, AppState};

// Export error types
pub use error::{ApiError, ApiResult};

// Export all model types
pub use model::*;

// Export store types
pub use store::{DocumentStore, FirebaseStore, MemoryStore};
