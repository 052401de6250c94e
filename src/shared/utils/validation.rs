use std::collections::HashSet;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_entity_id(kind: &str, id: &str) -> Result<(), AppError> {
        if id.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} id cannot be empty",
                kind
            )));
        }
        Ok(())
    }

    pub fn validate_display_name(kind: &str, id: &str, name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} '{}' has an empty name",
                kind, id
            )));
        }
        Ok(())
    }

    /// Ids are the stable identity and the last sort tie-breaker, so a
    /// collection must never carry the same id twice.
    pub fn validate_unique_ids<'a, I>(kind: &str, ids: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate {} id '{}'",
                    kind, id
                )));
            }
        }
        Ok(())
    }
}
