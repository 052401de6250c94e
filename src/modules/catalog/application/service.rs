use crate::modules::catalog::domain::{
    entities::{CatalogEntity, Project, Script, CATEGORY_FIELD, MATERIAL_FIELD},
    repositories::CatalogSource,
    services::{CodeSorter, IconCursor, IconResolver, IdAllocator, SearchIndex, TagHasher},
    value_objects::{CatalogFacets, DemoVideo, FilterValue, MaterialTag, SearchFilters},
};
use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Presentation-facing entry point over the loaded script and project
/// collections
pub struct CatalogService {
    config: CatalogConfig,
    scripts: Vec<Script>,
    projects: Vec<Project>,
    icon_resolver: IconResolver,
    id_allocator: IdAllocator,
}

impl CatalogService {
    pub fn new(config: CatalogConfig, scripts: Vec<Script>, projects: Vec<Project>) -> Self {
        Self {
            icon_resolver: IconResolver::new(&config),
            id_allocator: IdAllocator::new(),
            config,
            scripts,
            projects,
        }
    }

    pub fn load(source: &dyn CatalogSource, config: CatalogConfig) -> AppResult<Self> {
        let scripts = source.load_scripts()?;
        let projects = source.load_projects()?;
        log::info!(
            "Catalog ready: {} scripts, {} projects",
            scripts.len(),
            projects.len()
        );
        Ok(Self::new(config, scripts, projects))
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn search_scripts(&self, query: &str, filters: &SearchFilters) -> Vec<&Script> {
        SearchIndex::search(&self.scripts, query, filters)
    }

    /// Category and tag options for the filter controls
    pub fn script_facets(&self) -> CatalogFacets {
        SearchIndex::facets(&self.scripts, CATEGORY_FIELD)
    }

    pub fn find_script(&self, id: &str) -> AppResult<&Script> {
        self.scripts
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Script with ID {} not found", id)))
    }

    pub fn find_project(&self, id: &str) -> AppResult<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Project with ID {} not found", id)))
    }

    pub fn filter_projects_by_material(&self, material: FilterValue) -> Vec<&Project> {
        let filters = SearchFilters::new().with_field(MATERIAL_FIELD, material);
        SearchIndex::search(&self.projects, "", &filters)
    }

    pub fn sorted_projects(&self) -> Vec<&Project> {
        CodeSorter::sort(&self.projects)
    }

    pub fn material_tag_for(&self, id: &str) -> MaterialTag {
        TagHasher::assign_label(id)
    }

    pub fn icon_candidates_for(&self, script_id: &str) -> AppResult<Vec<String>> {
        let script = self.find_script(script_id)?;
        Ok(self.icon_resolver.candidates_for(script))
    }

    pub fn icon_cursor_for(&self, script_id: &str) -> AppResult<IconCursor> {
        let script = self.find_script(script_id)?;
        Ok(self.icon_resolver.cursor_for(script))
    }

    pub fn demo_video_for(&self, script_id: &str) -> AppResult<DemoVideo> {
        let script = self.find_script(script_id)?;
        Ok(DemoVideo::resolve(
            script.video_url.as_deref(),
            &self.config.default_video,
        ))
    }

    /// Prepend a new script. A blank id is allocated from the name; an
    /// explicit id must not clash with an existing one.
    pub fn add_script(&mut self, mut script: Script) -> AppResult<&Script> {
        Validator::validate_display_name("Script", &script.id, &script.name)?;

        if script.id.trim().is_empty() {
            script.id = self
                .id_allocator
                .allocate(&script.name, self.scripts.iter().map(|s| s.id.as_str()));
        } else if self.scripts.iter().any(|s| s.id == script.id) {
            return Err(AppError::ValidationError(format!(
                "Script with ID {} already exists",
                script.id
            )));
        }

        log::info!("Adding script '{}' ({})", script.name, script.id());
        self.scripts.insert(0, script);
        Ok(&self.scripts[0])
    }

    pub fn remove_script(&mut self, id: &str) -> AppResult<Script> {
        let index = self
            .scripts
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Script with ID {} not found", id)))?;

        log::info!("Removing script {}", id);
        Ok(self.scripts.remove(index))
    }
}
