use crate::config::SiteConfig;
use crate::filter::{build_categories, filter_products, ALL_PRODUCTS};
use crate::render::{faq_schema, render_catalog, render_filter_buttons, FaqItem};
use crate::season::{Clock, SystemClock};
use crate::store::DataStore;

use super::page::Effect;

/// Application state: the loaded catalog, site settings and view state.
pub struct App {
    pub store: DataStore,
    pub site: SiteConfig,
    pub active_category: String,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("products", &self.store.products().len())
            .field("site", &self.site)
            .field("active_category", &self.active_category)
            .finish_non_exhaustive()
    }
}

impl App {
    pub fn new(store: DataStore, site: SiteConfig) -> Self {
        Self {
            store,
            site,
            active_category: ALL_PRODUCTS.to_string(),
            clock: Box::new(SystemClock),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn current_month(&self) -> u32 {
        self.clock.current_month()
    }

    pub fn categories(&self) -> Vec<String> {
        build_categories(self.store.products())
    }

    /// Initial view: every card, the filter bar, and the FAQ block when the
    /// page has complete question/answer pairs.
    pub fn startup(&mut self, faq: &[FaqItem]) -> Vec<Effect> {
        let mut effects = vec![
            self.render_category(ALL_PRODUCTS),
            Effect::RenderFilters(render_filter_buttons(&self.categories())),
        ];
        if let Some(json) = faq_schema(faq) {
            effects.push(Effect::AppendHeadScript(json));
        }
        effects
    }

    /// Catalog markup for `label`, re-evaluating seasonality now.
    pub fn render_category(&mut self, label: &str) -> Effect {
        let products = filter_products(self.store.products(), label);
        let html = render_catalog(
            &products,
            self.store.fish_index(),
            self.current_month(),
            &self.site,
        );
        self.active_category = label.to_string();
        Effect::RenderCatalog(html)
    }
}
