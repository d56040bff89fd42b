//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug, Deserialize)]
/// Settings consumed by the command-line driver.
pub struct AppConfig {
    pub database_url: String,
    /// Page size used when a query does not specify `size`.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Insert the two demo teams and their hundred members into an empty store.
    #[serde(default)]
    pub seed_demo_data: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
