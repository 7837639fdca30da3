use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use super::SiteConfig;

/// Locations of the two catalog data sources plus the optional FAQ list.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub products: PathBuf,
    pub fish: PathBuf,
    pub faq: Option<PathBuf>,
}

/// Initializes the site configuration and data locations
/// from `.env` and `CATALOG_*` variables, falling back to the storefront defaults.
pub fn init_site_config() -> (SiteConfig, DataPaths) {
    // Load environment variables from .env file
    dotenv().ok();

    let mut site = SiteConfig::default();
    if let Ok(domain) = env::var("CATALOG_DOMAIN") {
        site = site.with_domain(domain);
    }

    let paths = DataPaths {
        products: env::var("CATALOG_PRODUCTS")
            .map_or_else(|_| PathBuf::from("data/products.json"), PathBuf::from),
        fish: env::var("CATALOG_FISH")
            .map_or_else(|_| PathBuf::from("data/fish-database.json"), PathBuf::from),
        faq: env::var("CATALOG_FAQ").ok().map(PathBuf::from),
    };

    (site, paths)
}
