use tracing::debug;

use crate::app::page::{Effect, OG_DESCRIPTION, OG_IMAGE, OG_TITLE, OG_URL};
use crate::app::share::SharePayload;
use crate::app::state::App;
use crate::render::render_modal_body;

const PREVIEW_FALLBACK: &str = "新鮮海鮮，立即訂購！";
const PREVIEW_LIMIT: usize = 100;

/// Everything a click on the page can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Filter(String),
    OpenDetail(String),
    Share {
        product_id: String,
        product_name: Option<String>,
    },
    CloseModal,
    PrefillOrder(String),
}

impl App {
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        debug!(?action, "dispatch");
        match action {
            Action::Filter(label) => vec![self.render_category(&label)],
            Action::OpenDetail(product_id) => self.open_detail(&product_id),
            Action::Share {
                product_id,
                product_name,
            } => self.share(&product_id, product_name.as_deref()),
            Action::CloseModal => vec![Effect::HideModal],
            Action::PrefillOrder(product_name) => self.prefill_order(&product_name),
        }
    }

    /// Detail modal plus link-preview tags. Unknown ids change nothing.
    pub fn open_detail(&self, product_id: &str) -> Vec<Effect> {
        let Some(product) = self.store.product(product_id) else {
            return Vec::new();
        };

        let preview: String = product
            .description()
            .unwrap_or(PREVIEW_FALLBACK)
            .chars()
            .take(PREVIEW_LIMIT)
            .collect();

        vec![
            Effect::SetMeta {
                property: OG_TITLE,
                content: format!("{} - {}", product.product_name, self.site.brand),
            },
            Effect::SetMeta {
                property: OG_DESCRIPTION,
                content: format!("{preview}..."),
            },
            Effect::SetMeta {
                property: OG_IMAGE,
                content: self.site.image_url(&product.product_id),
            },
            Effect::SetMeta {
                property: OG_URL,
                content: self.site.product_url(&product.product_id),
            },
            Effect::ShowModal(render_modal_body(product)),
        ]
    }

    /// Share request for a known product. The click's name wins over the catalog's.
    pub fn share(&self, product_id: &str, product_name: Option<&str>) -> Vec<Effect> {
        let Some(product) = self.store.product(product_id) else {
            return Vec::new();
        };

        let name = product_name
            .filter(|name| !name.is_empty())
            .unwrap_or(&product.product_name);
        vec![Effect::Share(SharePayload::new(
            &self.site,
            &product.product_id,
            name,
        ))]
    }

    /// Points the order form at a prefilled URL and moves the visitor there.
    pub fn prefill_order(&self, product_name: &str) -> Vec<Effect> {
        vec![Effect::PrefillOrder {
            form_src: self.site.order_form_prefill_url(product_name),
            anchor: self.site.order_anchor.clone(),
        }]
    }
}
