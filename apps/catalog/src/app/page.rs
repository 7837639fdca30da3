use std::collections::BTreeMap;

use crate::app::share::SharePayload;

/// Link-preview meta properties the detail view rewrites.
pub const OG_TITLE: &str = "og:title";
pub const OG_DESCRIPTION: &str = "og:description";
pub const OG_IMAGE: &str = "og:image";
pub const OG_URL: &str = "og:url";

/// A view update produced by a controller. Hosts apply these in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the catalog container's content.
    RenderCatalog(String),
    /// Replace the filter bar's content.
    RenderFilters(String),
    SetMeta {
        property: &'static str,
        content: String,
    },
    /// Fill the modal body and make the modal visible.
    ShowModal(String),
    HideModal,
    /// Point the order form at `form_src`, hide the modal and scroll to
    /// `anchor`. Hosts without an order form frame skip all three.
    PrefillOrder {
        form_src: String,
        anchor: String,
    },
    AppendHeadScript(String),
    /// Hand a payload to the share controller.
    Share(SharePayload),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modal {
    pub visible: bool,
    pub body_html: String,
}

/// In-memory stand-in for the document, used by the headless binary and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub catalog_html: String,
    pub filters_html: String,
    pub meta: BTreeMap<&'static str, String>,
    pub modal: Modal,
    pub order_form_src: Option<String>,
    pub scroll_target: Option<String>,
    pub head_scripts: Vec<String>,
    pub pending_shares: Vec<SharePayload>,
}

impl Page {
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::RenderCatalog(html) => self.catalog_html = html,
            Effect::RenderFilters(html) => self.filters_html = html,
            Effect::SetMeta { property, content } => {
                self.meta.insert(property, content);
            }
            Effect::ShowModal(body) => {
                self.modal.body_html = body;
                self.modal.visible = true;
            }
            Effect::HideModal => self.modal.visible = false,
            Effect::PrefillOrder { form_src, anchor } => {
                self.order_form_src = Some(form_src);
                self.modal.visible = false;
                self.scroll_target = Some(anchor);
            }
            Effect::AppendHeadScript(json) => self.head_scripts.push(json),
            Effect::Share(payload) => self.pending_shares.push(payload),
        }
    }

    pub fn apply_all(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    pub fn meta(&self, property: &str) -> Option<&str> {
        self.meta.get(property).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_keeps_modal_content() {
        let mut page = Page::default();
        page.apply_all([Effect::ShowModal("<h2>蛤蜊</h2>".to_string()), Effect::HideModal]);

        assert!(!page.modal.visible);
        assert_eq!(page.modal.body_html, "<h2>蛤蜊</h2>");
    }

    #[test]
    fn test_prefill_order_hides_modal_and_scrolls() {
        let mut page = Page::default();
        page.apply_all([
            Effect::ShowModal("<h2>蛤蜊</h2>".to_string()),
            Effect::PrefillOrder {
                form_src: "https://forms.example/viewform?usp=pp_url".to_string(),
                anchor: "order-form".to_string(),
            },
        ]);

        assert!(!page.modal.visible);
        assert_eq!(
            page.order_form_src.as_deref(),
            Some("https://forms.example/viewform?usp=pp_url")
        );
        assert_eq!(page.scroll_target.as_deref(), Some("order-form"));
    }

    #[test]
    fn test_meta_overwrites_by_property() {
        let mut page = Page::default();
        page.apply(Effect::SetMeta {
            property: OG_TITLE,
            content: "first".to_string(),
        });
        page.apply(Effect::SetMeta {
            property: OG_TITLE,
            content: "second".to_string(),
        });

        assert_eq!(page.meta(OG_TITLE), Some("second"));
        assert_eq!(page.meta.len(), 1);
    }
}
