pub mod json_source;

pub use json_source::{JsonCatalogSource, PROJECTS_FILE, SCRIPTS_FILE};
