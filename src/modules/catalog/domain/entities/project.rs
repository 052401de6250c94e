use serde::{Deserialize, Serialize};
use specta::Type;

use super::catalog_entity::CatalogEntity;

pub const MATERIAL_FIELD: &str = "material";

/// A structural project as stored in `projects.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub code: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default)]
    pub embed_url: String,
}

impl Project {
    pub fn new(id: impl Into<String>, code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            title: title.into(),
            material: None,
            embed_url: String::new(),
        }
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_embed_url(mut self, url: impl Into<String>) -> Self {
        self.embed_url = url.into();
        self
    }

    /// Heading used by the detail view, e.g. `141168-00 - Pont Marie`
    pub fn heading(&self) -> String {
        format!("{} - {}", self.code, self.title)
    }
}

impl CatalogEntity for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.code.as_str()];
        if let Some(material) = &self.material {
            fields.push(material);
        }
        fields
    }

    fn category_value(&self, field: &str) -> Option<&str> {
        match field {
            MATERIAL_FIELD => self.material.as_deref(),
            _ => None,
        }
    }

    fn structured_code(&self) -> Option<&str> {
        Some(&self.code)
    }
}
