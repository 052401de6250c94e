pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::*;
pub use repositories::CatalogSource;
pub use services::{CodeSorter, IconCursor, IconResolver, NameNormalizer, SearchIndex, TagHasher};
pub use value_objects::*;
