pub mod demo_video;
pub mod material_tag;
pub mod name_variants;
pub mod project_code;
pub mod search_filters;

pub use demo_video::{DemoVideo, VideoKind};
pub use material_tag::MaterialTag;
pub use name_variants::NameVariants;
pub use project_code::ProjectCode;
pub use search_filters::{CatalogFacets, FilterValue, SearchFilters, ALL_SENTINEL};
