//! The bundled engineering-school catalog, parsed once per process.

use std::sync::OnceLock;

use models::Catalog;

static CATALOG: OnceLock<Result<Catalog, String>> = OnceLock::new();

/// Shared catalog, or the parse error message if the bundled data is broken.
///
/// # Errors
///
/// Returns the [`models::CatalogError`] text when the embedded JSON is invalid.
pub fn shared() -> Result<&'static Catalog, &'static str> {
    CATALOG
        .get_or_init(|| Catalog::bundled().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(String::as_str)
}
