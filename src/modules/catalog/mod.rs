pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::CatalogService;
pub use domain::{
    CatalogEntity, CatalogSource, CodeSorter, IconCursor, IconResolver, NameNormalizer, Project,
    Script, SearchIndex, TagHasher,
};
pub use infrastructure::JsonCatalogSource;
