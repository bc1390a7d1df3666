mod catalog_loader;
mod catalog_types;
mod sample;

pub use catalog_loader::{load_catalog_from_path, parse_catalog_json};
pub use catalog_types::{Catalog, Category, ItemId, Suggestion};
pub use sample::sample_catalog;
