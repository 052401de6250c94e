/// Test helper functions and service builders
use super::factories::{ProjectFactory, ScriptFactory};
use dynamo_catalog_lib::modules::catalog::{
    application::CatalogService,
    domain::entities::{Project, Script},
};
use dynamo_catalog_lib::shared::CatalogConfig;

pub fn sample_scripts() -> Vec<Script> {
    vec![
        ScriptFactory::named("Add Revision")
            .with_description("Adds a revision to every selected sheet")
            .with_category("Documentation")
            .with_tags(vec!["Sheets", "Revisions"])
            .with_logo("/logos/add-revision.png")
            .build(),
        ScriptFactory::named("Wall Finish")
            .with_description("Creates finish walls along room boundaries")
            .with_category("Modelling")
            .with_tags(vec!["Walls", "Rooms"])
            .with_video("https://www.youtube.com/embed/finish")
            .build(),
        ScriptFactory::named("Room Tags")
            .with_description("Tags every room in the active view")
            .with_category("Documentation")
            .with_tags(vec!["Rooms", "Tags"])
            .build(),
        ScriptFactory::new()
            .with_id("creer-elevations")
            .with_name("Créer Élévations")
            .with_description("Génère les élévations intérieures")
            .with_category("Modelling")
            .with_tags(vec!["Views"])
            .with_video("/videos/elevations")
            .build(),
    ]
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        ProjectFactory::coded("141200-00")
            .with_title("Halle Freyssinet")
            .with_material("Concrete")
            .build(),
        ProjectFactory::coded("141168-01")
            .with_title("Pont Neuf")
            .with_material("Steel")
            .build(),
        ProjectFactory::coded("141168-00")
            .with_title("Pont Marie")
            .with_material("Steel")
            .build(),
        ProjectFactory::coded("99-00")
            .with_title("Chalet")
            .with_material("Wood")
            .build(),
    ]
}

/// Service over the sample catalog with default configuration
pub fn build_test_service() -> CatalogService {
    CatalogService::new(CatalogConfig::default(), sample_scripts(), sample_projects())
}
