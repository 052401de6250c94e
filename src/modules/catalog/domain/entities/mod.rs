pub mod catalog_entity;
pub mod project;
pub mod script;

pub use catalog_entity::CatalogEntity;
pub use project::{Project, MATERIAL_FIELD};
pub use script::{Script, CATEGORY_FIELD};
