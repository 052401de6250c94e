pub mod modules;
pub mod shared;

pub use modules::catalog::{
    CatalogEntity, CatalogService, CatalogSource, CodeSorter, IconCursor, IconResolver,
    JsonCatalogSource, NameNormalizer, Project, Script, SearchIndex, TagHasher,
};
pub use shared::{AppError, AppResult, CatalogConfig};

/// Load configuration, start logging and open the bundled catalog.
pub fn bootstrap() -> AppResult<CatalogService> {
    shared::utils::init_logger();

    let config = CatalogConfig::from_env()?;

    log::info!("Loading catalog from {}", config.data_dir.display());
    let source = JsonCatalogSource::from_config(&config);
    CatalogService::load(&source, config)
}
