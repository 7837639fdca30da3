use std::cell::RefCell;
use std::rc::Rc;

use seafood_catalog::app::interaction::{resolve_click, CardContext, ClickTarget};
use seafood_catalog::app::{ActionTag, ShareOutcome};
use seafood_catalog::error::CatalogError;
use seafood_catalog::render::FaqItem;
use seafood_catalog::store::{FISH_SOURCE, PRODUCTS_SOURCE};
use seafood_catalog::{Action, App, DataStore, Effect, SiteConfig};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, Element, Event, Request, RequestInit, RequestMode, Response, ScrollBehavior,
    ScrollIntoViewOptions,
};

mod share;

use share::BrowserShare;

type BrowserSharer = seafood_catalog::Sharer<BrowserShare>;

const PRODUCTS_URL: &str = "data/products.json";
const FISH_URL: &str = "data/fish-database.json";

const CATALOG_ID: &str = "product-list-container";
const FILTERS_ID: &str = "filter-buttons-container";
const MODAL_ID: &str = "product-modal";
const MODAL_BODY_ID: &str = "modal-body-content";
const VISIBLE_CLASS: &str = "visible";

fn main() {
    spawn_local(async {
        if let Err(error) = start().await {
            web_sys::console::error_1(&format!("資料載入失敗: {error}").into());
        }
    });
}

async fn start() -> Result<(), CatalogError> {
    // Both sources must arrive before anything renders
    let (products, fish) = futures::try_join!(
        fetch_text(PRODUCTS_URL, PRODUCTS_SOURCE),
        fetch_text(FISH_URL, FISH_SOURCE)
    )?;
    let store = DataStore::from_json(&products, &fish)?;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Ok(());
    };

    let app = Rc::new(RefCell::new(App::new(store, SiteConfig::default())));
    let sharer = Rc::new(BrowserSharer::new(BrowserShare));

    let faq = scan_faq(&document);
    let effects = app.borrow_mut().startup(&faq);
    apply_effects(&document, &sharer, effects);

    bind_catalog(&document, &app, &sharer);
    bind_filters(&document, &app, &sharer);
    bind_modal(&document, &app, &sharer);

    Ok(())
}

async fn fetch_text(url: &str, source_name: &str) -> Result<String, CatalogError> {
    let fail = |error: JsValue| CatalogError::fetch(source_name, describe(&error));

    let window =
        web_sys::window().ok_or_else(|| CatalogError::fetch(source_name, "no window"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(fail)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fail)?
        .dyn_into()
        .map_err(fail)?;

    if !response.ok() {
        return Err(CatalogError::fetch(
            source_name,
            format!("HTTP {}", response.status()),
        ));
    }

    let body = JsFuture::from(response.text().map_err(fail)?)
        .await
        .map_err(fail)?;

    body.as_string()
        .ok_or_else(|| CatalogError::fetch(source_name, "response body is not text"))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn scan_faq(document: &Document) -> Vec<FaqItem> {
    let Ok(items) = document.query_selector_all(".qa-item") else {
        return Vec::new();
    };

    (0..items.length())
        .filter_map(|index| items.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|item| {
            let text = |selector: &str| {
                item.query_selector(selector)
                    .ok()
                    .flatten()
                    .and_then(|element| element.text_content())
            };
            FaqItem {
                question: text("dt"),
                answer: text("dd"),
            }
        })
        .collect()
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

fn click_target(target: &Element) -> ClickTarget {
    let card = closest(target, ".product-card").map(|card| CardContext {
        first_product_id: card
            .query_selector(".btn[data-product-id]")
            .ok()
            .flatten()
            .and_then(|button| button.get_attribute("data-product-id")),
    });

    ClickTarget {
        card,
        product_id: target.get_attribute("data-product-id"),
        product_name: target.get_attribute("data-product-name"),
        action: target.get_attribute("data-action"),
    }
}

fn modal_action(target: &Element) -> Option<Action> {
    if target.id() == MODAL_ID || closest(target, ".modal-close-btn").is_some() {
        return Some(Action::CloseModal);
    }

    let selector = format!(r#"[data-action="{}"]"#, ActionTag::Order.as_str());
    let cta = closest(target, &selector)?;
    Some(Action::PrefillOrder(
        cta.get_attribute("data-product-name").unwrap_or_default(),
    ))
}

fn filter_action(target: &Element) -> Option<Action> {
    let button = closest(target, ".filter-btn")?;
    let label = button
        .get_attribute("data-category")
        .or_else(|| button.text_content())?;
    Some(Action::Filter(label))
}

/// One delegated listener per container, so re-rendered children stay wired.
fn listen(
    document: &Document,
    element_id: &str,
    app: &Rc<RefCell<App>>,
    sharer: &Rc<BrowserSharer>,
    resolve: fn(&Element) -> Option<Action>,
) {
    let Some(container) = document.get_element_by_id(element_id) else {
        return;
    };

    let document = document.clone();
    let app = Rc::clone(app);
    let sharer = Rc::clone(sharer);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(action) = event_element(&event).and_then(|target| resolve(&target)) else {
            return;
        };
        let effects = app.borrow_mut().dispatch(action);
        apply_effects(&document, &sharer, effects);
    });

    if let Err(error) =
        container.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
    {
        web_sys::console::error_1(&error);
    }
    handler.forget();
}

fn bind_catalog(document: &Document, app: &Rc<RefCell<App>>, sharer: &Rc<BrowserSharer>) {
    listen(document, CATALOG_ID, app, sharer, |target| {
        resolve_click(&click_target(target))
    });
}

fn bind_filters(document: &Document, app: &Rc<RefCell<App>>, sharer: &Rc<BrowserSharer>) {
    listen(document, FILTERS_ID, app, sharer, filter_action);
}

fn bind_modal(document: &Document, app: &Rc<RefCell<App>>, sharer: &Rc<BrowserSharer>) {
    listen(document, MODAL_ID, app, sharer, modal_action);
}

fn set_inner_html(document: &Document, element_id: &str, html: &str) {
    if let Some(element) = document.get_element_by_id(element_id) {
        element.set_inner_html(html);
    }
}

fn set_modal_visible(document: &Document, visible: bool) {
    let Some(modal) = document.get_element_by_id(MODAL_ID) else {
        return;
    };
    let classes = modal.class_list();
    let result = if visible {
        classes.add_1(VISIBLE_CLASS)
    } else {
        classes.remove_1(VISIBLE_CLASS)
    };
    if let Err(error) = result {
        web_sys::console::error_1(&error);
    }
}

fn apply_effects(document: &Document, sharer: &Rc<BrowserSharer>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::RenderCatalog(html) => set_inner_html(document, CATALOG_ID, &html),
            Effect::RenderFilters(html) => set_inner_html(document, FILTERS_ID, &html),
            Effect::SetMeta { property, content } => {
                let selector = format!(r#"meta[property="{property}"]"#);
                if let Ok(Some(meta)) = document.query_selector(&selector) {
                    meta.set_attribute("content", &content).ok();
                }
            }
            Effect::ShowModal(body) => {
                set_inner_html(document, MODAL_BODY_ID, &body);
                set_modal_visible(document, true);
            }
            Effect::HideModal => set_modal_visible(document, false),
            Effect::PrefillOrder { form_src, anchor } => {
                let Ok(Some(frame)) = document.query_selector(".google-form-container iframe")
                else {
                    continue;
                };
                frame.set_attribute("src", &form_src).ok();
                set_modal_visible(document, false);
                if let Some(target) = document.get_element_by_id(&anchor) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            Effect::AppendHeadScript(json) => {
                let (Some(head), Ok(script)) = (document.head(), document.create_element("script"))
                else {
                    continue;
                };
                script.set_attribute("type", "application/ld+json").ok();
                script.set_text_content(Some(&json));
                head.append_child(&script).ok();
            }
            Effect::Share(payload) => {
                let sharer = Rc::clone(sharer);
                spawn_local(async move {
                    if let ShareOutcome::Failed(error) = sharer.share(&payload).await {
                        web_sys::console::warn_1(&format!("分享失敗: {error}").into());
                    }
                });
            }
        }
    }
}
