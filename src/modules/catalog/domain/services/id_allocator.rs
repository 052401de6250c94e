use std::collections::HashSet;

use super::name_normalizer::{
    CollapseHyphensTransform, JoinWhitespaceTransform, LowercaseTransform, NamePipeline,
    SlugCharsTransform,
};

const FALLBACK_PREFIX: &str = "script";

/// Derives ids for entries appended to a collection.
///
/// The id slug does not fold accents: accented letters are dropped with the
/// other characters outside `[a-z0-9\s-]`. Edge hyphens are kept.
pub struct IdAllocator {
    slug: NamePipeline,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            slug: NamePipeline::new()
                .with(LowercaseTransform)
                .with(SlugCharsTransform)
                .with(JoinWhitespaceTransform::new("-"))
                .with(CollapseHyphensTransform),
        }
    }

    pub fn slugify(&self, name: &str) -> String {
        self.slug.apply(name.trim())
    }

    /// Slug of `name`, made unique against `existing` with `-2`, `-3`, ...
    /// Names without a usable slug get `script-{n + 1}` for `n` existing ids.
    pub fn allocate<'a, I>(&self, name: &str, existing: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let taken: HashSet<&str> = existing.into_iter().collect();
        let base = self.slugify(name);

        let mut candidate = if base.is_empty() {
            format!("{}-{}", FALLBACK_PREFIX, taken.len() + 1)
        } else {
            base
        };

        let stem = candidate.clone();
        let mut n = 2;
        while taken.contains(candidate.as_str()) {
            candidate = format!("{}-{}", stem, n);
            n += 1;
        }

        log::debug!("Allocated id '{}' for '{}'", candidate, name);
        candidate
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
