/// Test data factories using builder pattern
///
/// Provides convenient methods to create catalog records with sensible defaults
use dynamo_catalog_lib::modules::catalog::domain::entities::{Project, Script};

pub struct ScriptFactory {
    id: String,
    name: String,
    description: String,
    category: String,
    tags: Vec<String>,
    logo: Option<String>,
    icon: Option<String>,
    video_url: Option<String>,
}

impl Default for ScriptFactory {
    fn default() -> Self {
        Self {
            id: "test-script".to_string(),
            name: "Test Script".to_string(),
            description: "A script used in tests".to_string(),
            category: "Utilities".to_string(),
            tags: Vec::new(),
            logo: None,
            icon: None,
            video_url: None,
        }
    }
}

impl ScriptFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script whose id is the slug of its name, as the bundled data has it
    pub fn named(name: &str) -> Self {
        let id = name.to_lowercase().replace(' ', "-");
        Self::default().with_id(&id).with_name(name)
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(String::from).collect();
        self
    }

    pub fn with_logo(mut self, logo: &str) -> Self {
        self.logo = Some(logo.to_string());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_video(mut self, url: &str) -> Self {
        self.video_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> Script {
        let mut script = Script::new(self.id, self.name, self.description, self.category)
            .with_tags(self.tags);
        script.logo = self.logo;
        script.icon = self.icon;
        script.video_url = self.video_url;
        script
    }
}

pub struct ProjectFactory {
    id: String,
    code: String,
    title: String,
    material: Option<String>,
}

impl Default for ProjectFactory {
    fn default() -> Self {
        Self {
            id: "p-test".to_string(),
            code: "100000-00".to_string(),
            title: "Test Project".to_string(),
            material: None,
        }
    }
}

impl ProjectFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project identified by its code
    pub fn coded(code: &str) -> Self {
        Self::default().with_id(&format!("p-{}", code)).with_code(code)
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = code.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_material(mut self, material: &str) -> Self {
        self.material = Some(material.to_string());
        self
    }

    pub fn build(self) -> Project {
        let project = Project::new(self.id, self.code, self.title);
        match self.material {
            Some(material) => project.with_material(material),
            None => project,
        }
    }
}
