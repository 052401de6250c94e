pub mod code_sorter;
pub mod icon_resolver;
pub mod id_allocator;
pub mod name_normalizer;
pub mod search_index;
pub mod tag_hasher;

// Primary exports
pub use code_sorter::CodeSorter;
pub use icon_resolver::{IconCursor, IconResolver, ICON_EXTENSIONS};
pub use id_allocator::IdAllocator;
pub use name_normalizer::{NameNormalizer, NamePipeline, NameTransformation};
pub use search_index::{NormalizedQuery, SearchIndex};
pub use tag_hasher::TagHasher;
