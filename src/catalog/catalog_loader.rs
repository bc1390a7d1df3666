use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::catalog_types::Catalog;
use crate::error::{Result, TypeaheadError};

pub fn load_catalog_from_path(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path)?;
    let catalog = parse_catalog_json(&contents)?;

    log::debug!(
        "Loaded {} suggestions and {} categories from {}",
        catalog.suggestions.len(),
        catalog.categories.len(),
        path.display()
    );

    Ok(catalog)
}

/// Parse a catalog document and reject duplicate suggestion ids
///
/// Dangling category references are left in place.
pub fn parse_catalog_json(content: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(content)
        .map_err(|e| TypeaheadError::InvalidCatalog(e.to_string()))?;

    let mut seen = HashSet::new();
    for suggestion in &catalog.suggestions {
        if !seen.insert(&suggestion.id) {
            return Err(TypeaheadError::DuplicateSuggestionId(
                suggestion.id.to_string(),
            ));
        }
    }

    Ok(catalog)
}

#[cfg(test)]
#[path = "catalog_loader_tests.rs"]
mod catalog_loader_tests;
