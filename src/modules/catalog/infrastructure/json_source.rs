use std::fs;
use std::path::{Path, PathBuf};

use crate::modules::catalog::domain::{
    entities::{Project, Script},
    repositories::CatalogSource,
};
use crate::shared::config::CatalogConfig;
use crate::shared::errors::AppResult;
use crate::shared::utils::{LogContext, Validator};

pub const SCRIPTS_FILE: &str = "scripts.json";
pub const PROJECTS_FILE: &str = "projects.json";

#[derive(Debug, Clone)]
enum JsonInput {
    Inline(String),
    File(PathBuf),
}

impl JsonInput {
    fn read(&self) -> AppResult<(String, String)> {
        match self {
            JsonInput::Inline(json) => Ok((json.clone(), "inline JSON".to_string())),
            JsonInput::File(path) => {
                let json = fs::read_to_string(path).inspect_err(|e| {
                    LogContext::error_with_context(e, &format!("Reading {}", path.display()));
                })?;
                Ok((json, path.display().to_string()))
            }
        }
    }
}

/// Catalog source backed by the bundled `scripts.json` / `projects.json`
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    scripts: JsonInput,
    projects: JsonInput,
}

impl JsonCatalogSource {
    pub fn from_strings(scripts_json: impl Into<String>, projects_json: impl Into<String>) -> Self {
        Self {
            scripts: JsonInput::Inline(scripts_json.into()),
            projects: JsonInput::Inline(projects_json.into()),
        }
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            scripts: JsonInput::File(dir.join(SCRIPTS_FILE)),
            projects: JsonInput::File(dir.join(PROJECTS_FILE)),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::from_dir(&config.data_dir)
    }

    /// Parse and validate a scripts array
    pub fn parse_scripts(json: &str) -> AppResult<Vec<Script>> {
        let scripts: Vec<Script> = serde_json::from_str(json)?;

        for script in &scripts {
            Validator::validate_entity_id("Script", &script.id)?;
            Validator::validate_display_name("Script", &script.id, &script.name)?;
        }
        Validator::validate_unique_ids("Script", scripts.iter().map(|s| s.id.as_str()))?;

        Ok(scripts)
    }

    /// Parse and validate a projects array
    pub fn parse_projects(json: &str) -> AppResult<Vec<Project>> {
        let projects: Vec<Project> = serde_json::from_str(json)?;

        for project in &projects {
            Validator::validate_entity_id("Project", &project.id)?;
            Validator::validate_display_name("Project", &project.id, &project.title)?;
        }
        Validator::validate_unique_ids("Project", projects.iter().map(|p| p.id.as_str()))?;

        Ok(projects)
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load_scripts(&self) -> AppResult<Vec<Script>> {
        let (json, origin) = self.scripts.read()?;
        LogContext::catalog_load("scripts", &origin, None);
        let scripts = Self::parse_scripts(&json)?;
        LogContext::catalog_load("scripts", &origin, Some(scripts.len()));
        Ok(scripts)
    }

    fn load_projects(&self) -> AppResult<Vec<Project>> {
        let (json, origin) = self.projects.read()?;
        LogContext::catalog_load("projects", &origin, None);
        let projects = Self::parse_projects(&json)?;
        LogContext::catalog_load("projects", &origin, Some(projects.len()));
        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    const SCRIPTS: &str = r#"[
        {"id":"add-revision","name":"Add Revision","description":"Adds a revision","category":"Documentation","tags":["Sheets"]},
        {"id":"purge","name":"Purge","description":"Purges unused","category":"Cleanup","tags":[]}
    ]"#;

    const PROJECTS: &str = r#"[
        {"id":"p1","code":"141168-00","title":"Pont Marie","material":"Steel","embedUrl":"https://speckle.xyz/embed?s=1"}
    ]"#;

    #[test]
    fn test_load_inline_catalog() {
        let source = JsonCatalogSource::from_strings(SCRIPTS, PROJECTS);
        assert_eq!(source.load_scripts().unwrap().len(), 2);
        assert_eq!(source.load_projects().unwrap()[0].code, "141168-00");
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let json = r#"[{"id":"","name":"X","description":"","category":"Misc"}]"#;
        let err = JsonCatalogSource::parse_scripts(json).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let json = r#"[{"id":"p1","code":"1-00","title":"  "}]"#;
        assert!(JsonCatalogSource::parse_projects(json).is_err());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {"id":"a","name":"A","description":"","category":"Misc"},
            {"id":"a","name":"B","description":"","category":"Misc"}
        ]"#;
        assert!(JsonCatalogSource::parse_scripts(json).is_err());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = JsonCatalogSource::parse_scripts("{not json").unwrap_err();
        assert!(matches!(err, AppError::SerializationError(_)));
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let source = JsonCatalogSource::from_dir("/definitely/not/here");
        assert!(matches!(source.load_scripts(), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_from_dir_reads_files() {
        let dir = std::env::temp_dir().join(format!("dynamo-catalog-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SCRIPTS_FILE), SCRIPTS).unwrap();
        fs::write(dir.join(PROJECTS_FILE), PROJECTS).unwrap();

        let config = CatalogConfig {
            data_dir: dir.clone(),
            ..CatalogConfig::default()
        };
        let source = JsonCatalogSource::from_config(&config);
        assert_eq!(source.load_scripts().unwrap()[1].id, "purge");
        assert_eq!(source.load_projects().unwrap().len(), 1);

        fs::remove_dir_all(&dir).ok();
    }
}
