use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::modules::catalog::domain::value_objects::NameVariants;

static NON_SLUG_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Transformation that can be applied to a display name
///
/// Each transformation is composable and testable in isolation.
pub trait NameTransformation: Send + Sync {
    fn transform(&self, name: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Trims and collapses whitespace runs to a single space
#[derive(Debug, Clone)]
pub struct CollapseWhitespaceTransform;

impl NameTransformation for CollapseWhitespaceTransform {
    fn transform(&self, name: &str) -> String {
        name.split_whitespace().collect::<Vec<&str>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "CollapseWhitespace"
    }
}

/// Canonical decomposition followed by removal of combining diacritical
/// marks (U+0300..=U+036F). The output is left decomposed.
#[derive(Debug, Clone)]
pub struct StripAccentsTransform;

impl StripAccentsTransform {
    fn is_combining_mark(c: char) -> bool {
        ('\u{0300}'..='\u{036F}').contains(&c)
    }
}

impl NameTransformation for StripAccentsTransform {
    fn transform(&self, name: &str) -> String {
        name.nfd().filter(|c| !Self::is_combining_mark(*c)).collect()
    }

    fn name(&self) -> &'static str {
        "StripAccents"
    }
}

/// Converts name to lowercase
#[derive(Debug, Clone)]
pub struct LowercaseTransform;

impl NameTransformation for LowercaseTransform {
    fn transform(&self, name: &str) -> String {
        name.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "Lowercase"
    }
}

/// Drops everything outside `[a-z0-9\s-]`; expects lowercased input
#[derive(Debug, Clone)]
pub struct SlugCharsTransform;

impl NameTransformation for SlugCharsTransform {
    fn transform(&self, name: &str) -> String {
        NON_SLUG_CHARS_RE.replace_all(name, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "SlugChars"
    }
}

/// Replaces each whitespace run with a fixed separator
#[derive(Debug, Clone)]
pub struct JoinWhitespaceTransform {
    separator: &'static str,
}

impl JoinWhitespaceTransform {
    pub fn new(separator: &'static str) -> Self {
        Self { separator }
    }
}

impl NameTransformation for JoinWhitespaceTransform {
    fn transform(&self, name: &str) -> String {
        WHITESPACE_RUN_RE
            .replace_all(name, self.separator)
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "JoinWhitespace"
    }
}

/// Collapses runs of hyphens to one
#[derive(Debug, Clone)]
pub struct CollapseHyphensTransform;

impl NameTransformation for CollapseHyphensTransform {
    fn transform(&self, name: &str) -> String {
        HYPHEN_RUN_RE.replace_all(name, "-").into_owned()
    }

    fn name(&self) -> &'static str {
        "CollapseHyphens"
    }
}

/// Ordered pipeline of name transformations
///
/// Uses the builder pattern for composability and testability.
#[derive(Default)]
pub struct NamePipeline {
    transformations: Vec<Box<dyn NameTransformation>>,
}

impl NamePipeline {
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    pub fn with(mut self, transformation: impl NameTransformation + 'static) -> Self {
        self.transformations.push(Box::new(transformation));
        self
    }

    pub fn apply(&self, name: &str) -> String {
        let mut result = name.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }
}

/// Derives every comparable form of a display name.
///
/// All variants are computed from the canonical (trimmed, collapsed) name
/// and depend on nothing but their input.
pub struct NameNormalizer {
    canonical: NamePipeline,
    folded: NamePipeline,
    slug: NamePipeline,
    snake_case: NamePipeline,
    lowercase: NamePipeline,
}

impl NameNormalizer {
    pub fn new() -> Self {
        Self {
            canonical: NamePipeline::new().with(CollapseWhitespaceTransform),
            folded: NamePipeline::new().with(StripAccentsTransform),
            slug: NamePipeline::new()
                .with(StripAccentsTransform)
                .with(LowercaseTransform)
                .with(SlugCharsTransform)
                .with(JoinWhitespaceTransform::new("-"))
                .with(CollapseHyphensTransform),
            snake_case: NamePipeline::new()
                .with(StripAccentsTransform)
                .with(JoinWhitespaceTransform::new("_")),
            lowercase: NamePipeline::new().with(LowercaseTransform),
        }
    }

    pub fn normalize(&self, name: &str) -> NameVariants {
        let canonical = self.canonical.apply(name);

        NameVariants {
            folded_no_accents: self.folded.apply(&canonical),
            slug: self.slug.apply(&canonical),
            snake_case: self.snake_case.apply(&canonical),
            lowercase: self.lowercase.apply(&canonical),
            canonical,
        }
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
