// Export our modules for use in the binary, the web client and tests
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod render;
pub mod season;
pub mod store;

pub use app::{Action, App, Effect, Page, SharePayload, Sharer};
pub use config::SiteConfig;
pub use domain::{Fish, Price, Product, Season, Tags};
pub use error::CatalogError;
pub use store::DataStore;
