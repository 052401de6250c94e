// Shared kernel used by the catalog module

pub mod config; // Engine configuration
pub mod errors; // Shared error types
pub mod utils; // Logging and validation helpers

// Re-exports for convenience
pub use config::{CatalogConfig, CatalogConfigBuilder};
pub use errors::{AppError, AppResult};
