//! Application Configuration

/// Results per search page
pub const DEFAULT_PER_PAGE: u64 = 100;

/// Catalog application configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub per_page: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}
