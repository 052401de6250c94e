use serde::{Deserialize, Serialize};
use specta::Type;

/// Comparable forms of one display name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct NameVariants {
    /// Trimmed, whitespace runs collapsed to one space
    pub canonical: String,
    /// Canonical form with combining diacritics removed
    pub folded_no_accents: String,
    /// `[a-z0-9-]` form of the folded name
    pub slug: String,
    /// Folded form with whitespace runs replaced by `_`
    pub snake_case: String,
    /// Canonical form lowercased
    pub lowercase: String,
}

impl NameVariants {
    /// Variants in icon-lookup priority order, duplicates and empties removed
    pub fn distinct_bases(&self) -> Vec<&str> {
        let mut bases: Vec<&str> = Vec::with_capacity(5);
        for variant in [
            self.canonical.as_str(),
            self.folded_no_accents.as_str(),
            self.slug.as_str(),
            self.snake_case.as_str(),
            self.lowercase.as_str(),
        ] {
            if !variant.is_empty() && !bases.contains(&variant) {
                bases.push(variant);
            }
        }
        bases
    }
}
