use serde::{Deserialize, Serialize};
use specta::Type;

use super::catalog_entity::CatalogEntity;

pub const CATEGORY_FIELD: &str = "category";

/// A Dynamo script entry as stored in `scripts.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Script {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            tags: Vec::new(),
            logo: None,
            icon: None,
            steps: None,
            video_url: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = Some(steps.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }
}

impl CatalogEntity for Script {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.description.as_str()]
    }

    fn multi_valued_fields(&self) -> Vec<&[String]> {
        vec![self.tags.as_slice()]
    }

    fn category_value(&self, field: &str) -> Option<&str> {
        match field {
            CATEGORY_FIELD => Some(&self.category),
            _ => None,
        }
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    // Logo first, then icon
    fn explicit_hints(&self) -> Vec<&str> {
        self.logo
            .iter()
            .chain(self.icon.iter())
            .map(String::as_str)
            .collect()
    }
}
