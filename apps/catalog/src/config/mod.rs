#[cfg(not(target_arch = "wasm32"))]
mod env;

#[cfg(not(target_arch = "wasm32"))]
pub use env::{init_site_config, DataPaths};

/// Storefront constants shared by the renderer and the controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub domain: String,
    pub brand: String,
    pub currency: String,
    pub price_marker: String,
    /// Structured-data description for products without one.
    pub default_description: String,
    pub order_anchor: String,
    pub order_form_url: String,
    pub order_form_entry: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain: "https://yourdomain.com".to_string(),
            brand: "崁仔頂小商人".to_string(),
            currency: "TWD".to_string(),
            price_marker: "NT$".to_string(),
            default_description: "新鮮海鮮，來自基隆崁仔頂漁市".to_string(),
            order_anchor: "order-form".to_string(),
            order_form_url: "https://docs.google.com/forms/d/e/1FAIpQLSeSz0oHxaZ0TqcneHpb9CmQ_kuGglYxutF1bMmYJRHJKb5aLA/viewform".to_string(),
            order_form_entry: "entry.xxxxxxxxxx".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into().trim_end_matches('/').to_string();
        self
    }

    /// Absolute image URL used in structured data and link previews.
    pub fn image_url(&self, product_id: &str) -> String {
        format!("{}/images/{product_id}.jpg", self.domain)
    }

    /// Canonical per-product URL.
    pub fn product_url(&self, product_id: &str) -> String {
        format!("{}/#product-{product_id}", self.domain)
    }

    pub fn order_url(&self) -> String {
        format!("{}/#{}", self.domain, self.order_anchor)
    }

    /// Order form URL with the product name prefilled.
    pub fn order_form_prefill_url(&self, product_name: &str) -> String {
        format!(
            "{}?usp=pp_url&{}={}",
            self.order_form_url,
            self.order_form_entry,
            urlencoding::encode(product_name)
        )
    }
}

/// Relative image path used on the cards themselves.
pub fn card_image_path(product_id: &str) -> String {
    format!("images/{product_id}.jpg")
}
