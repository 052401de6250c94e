use std::collections::HashSet;

use crate::modules::catalog::domain::entities::CatalogEntity;
use crate::shared::config::CatalogConfig;
use crate::shared::utils::LogContext;

use super::name_normalizer::NameNormalizer;

/// Extension trial order for every derived base name
pub const ICON_EXTENSIONS: [&str; 10] = [
    ".png", ".PNG", ".jpg", ".JPG", ".jpeg", ".JPEG", ".svg", ".SVG", ".webp", ".WEBP",
];

/// Builds the ordered list of icon locations to try for an entity.
///
/// The sequence is: explicit hints, then every distinct name variant under
/// the icon directory with each extension, then the placeholder. The
/// placeholder appears exactly once and always last.
pub struct IconResolver {
    normalizer: NameNormalizer,
    icon_dir: String,
    placeholder: String,
}

impl IconResolver {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            normalizer: NameNormalizer::new(),
            icon_dir: config.icon_dir.clone(),
            placeholder: config.placeholder.clone(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Candidate sequence for `display_name`; same input, same output
    pub fn build_candidates<S: AsRef<str>>(
        &self,
        display_name: &str,
        explicit_hints: &[S],
    ) -> Vec<String> {
        let variants = self.normalizer.normalize(display_name);
        let bases = variants.distinct_bases();

        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates: Vec<String> =
            Vec::with_capacity(explicit_hints.len() + bases.len() * ICON_EXTENSIONS.len() + 1);

        let hints = explicit_hints
            .iter()
            .map(|hint| hint.as_ref())
            .filter(|hint| !hint.trim().is_empty())
            .map(str::to_string);

        let derived = bases.iter().flat_map(|base| {
            ICON_EXTENSIONS
                .iter()
                .map(move |ext| format!("{}{}{}", self.icon_dir, base, ext))
        });

        for candidate in hints.chain(derived) {
            if candidate == self.placeholder {
                continue;
            }
            if seen.insert(candidate.clone()) {
                candidates.push(candidate);
            }
        }

        candidates.push(self.placeholder.clone());
        candidates
    }

    pub fn candidates_for<E: CatalogEntity>(&self, entity: &E) -> Vec<String> {
        self.build_candidates(entity.display_name(), &entity.explicit_hints())
    }

    pub fn cursor<S: AsRef<str>>(&self, display_name: &str, explicit_hints: &[S]) -> IconCursor {
        IconCursor {
            candidates: self.build_candidates(display_name, explicit_hints),
            index: 0,
        }
    }

    pub fn cursor_for<E: CatalogEntity>(&self, entity: &E) -> IconCursor {
        self.cursor(entity.display_name(), &entity.explicit_hints())
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

/// Position in a candidate sequence, advanced when a load fails.
///
/// The last candidate is terminal: once reached, `advance` keeps returning
/// `false` and `current` keeps returning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCursor {
    candidates: Vec<String>,
    index: usize,
}

impl IconCursor {
    /// `None` for an empty sequence; a cursor always has a current entry
    pub fn new(candidates: Vec<String>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        Some(Self {
            candidates,
            index: 0,
        })
    }

    pub fn current(&self) -> &str {
        &self.candidates[self.index]
    }

    /// Move to the next candidate; `false` when already at the last one
    pub fn advance(&mut self) -> bool {
        if self.index + 1 < self.candidates.len() {
            LogContext::icon_fallback(self.current(), Some(&self.candidates[self.index + 1]));
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Advance only if `failed` is the candidate currently shown.
    ///
    /// Load-failure events can arrive for a location the cursor has already
    /// moved past; those must not skip a candidate.
    pub fn report_failure(&mut self, failed: &str) -> bool {
        if failed != self.current() {
            log::trace!("Ignoring stale icon failure for {}", failed);
            return false;
        }
        let moved = self.advance();
        if !moved {
            LogContext::icon_fallback(self.current(), None);
        }
        moved
    }

    /// Replace the sequence; the position resets to 0 whenever the full
    /// sequence differs. Returns whether a reset happened.
    pub fn rebind(&mut self, candidates: Vec<String>) -> bool {
        if candidates.is_empty() || candidates == self.candidates {
            return false;
        }
        self.candidates = candidates;
        self.index = 0;
        true
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// True once the terminal candidate is current
    pub fn is_exhausted(&self) -> bool {
        self.index + 1 == self.candidates.len()
    }
}
