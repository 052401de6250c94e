use crate::modules::catalog::domain::entities::{Project, Script};
use crate::shared::errors::AppResult;

/// Port for the static data the catalog is built from
pub trait CatalogSource: Send + Sync {
    fn load_scripts(&self) -> AppResult<Vec<Script>>;

    fn load_projects(&self) -> AppResult<Vec<Project>>;
}
