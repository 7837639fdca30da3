use async_trait::async_trait;
use color_eyre::Result;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use seafood_catalog::app::page::{OG_DESCRIPTION, OG_IMAGE, OG_TITLE, OG_URL};
use seafood_catalog::app::share::{PopupWindow, ShareEnvironment, ShareOutcome, Sharer};
use seafood_catalog::error::ShareError;
use seafood_catalog::filter::{filter_products, ALL_PRODUCTS};
use seafood_catalog::render::{render_document, FaqItem};
use seafood_catalog::season::is_in_season;
use seafood_catalog::{Action, App, Effect, Page, SharePayload};

#[derive(Debug, Serialize)]
struct HeadlessStats {
    month: u32,
    total_products: usize,
    in_season: usize,
    categories: Vec<CategoryCount>,
    seasonal_products: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CategoryCount {
    label: String,
    count: usize,
}

pub async fn render_page(
    app: &mut App,
    faq: &[FaqItem],
    category: Option<&str>,
    out: Option<&Path>,
) -> Result<()> {
    let mut page = Page::default();
    page.apply_all(app.startup(faq));
    if let Some(label) = category.filter(|label| *label != ALL_PRODUCTS) {
        page.apply_all(app.dispatch(Action::Filter(label.to_string())));
    }

    let html = render_document(&page, &app.site, faq);
    match out {
        Some(path) => {
            tokio::fs::write(path, html).await?;
            info!(path = %path.display(), category = %app.active_category, "catalog page written");
        }
        None => println!("{html}"),
    }

    Ok(())
}

pub fn print_categories(app: &App) {
    for label in app.categories() {
        println!("{label}");
    }
}

pub fn print_stats(app: &App, json: bool) -> Result<()> {
    let stats = build_stats(app);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\nCatalog Stats");
    println!("=============");
    println!("Month: {}", stats.month);
    println!("Total products: {}", stats.total_products);
    println!("In season: {}", stats.in_season);

    println!("\nProducts by Category:");
    for category in &stats.categories {
        println!("- {}: {}", category.label, category.count);
    }

    println!("\nIn-season Products:");
    for name in &stats.seasonal_products {
        println!("- {name}");
    }

    Ok(())
}

fn build_stats(app: &App) -> HeadlessStats {
    let month = app.current_month();
    let products = app.store.products();

    let seasonal_products: Vec<String> = products
        .iter()
        .filter(|product| is_in_season(product, app.store.fish_index(), month))
        .map(|product| product.product_name.clone())
        .collect();

    let categories = app
        .categories()
        .into_iter()
        .map(|label| CategoryCount {
            count: filter_products(products, &label).len(),
            label,
        })
        .collect();

    HeadlessStats {
        month,
        total_products: products.len(),
        in_season: seasonal_products.len(),
        categories,
        seasonal_products,
    }
}

pub fn print_detail(app: &mut App, product_id: &str) {
    let Some(page) = detail_page(app, product_id) else {
        debug!(product_id, "detail lookup missed");
        return;
    };

    for property in [OG_TITLE, OG_DESCRIPTION, OG_IMAGE, OG_URL] {
        println!("{property}: {}", page.meta(property).unwrap_or_default());
    }
    println!("\n{}", page.modal.body_html);
}

/// Page state after opening `product_id`, or `None` for an unknown id.
fn detail_page(app: &mut App, product_id: &str) -> Option<Page> {
    let mut page = Page::default();
    page.apply_all(app.dispatch(Action::OpenDetail(product_id.to_string())));
    page.modal.visible.then_some(page)
}

pub async fn run_share(app: &mut App, product_id: &str, name: Option<String>) {
    let outcomes = share_with(app, product_id, name, TerminalShare).await;
    if outcomes.is_empty() {
        debug!(product_id, "share lookup missed");
    }
}

/// Share failures are already logged by the sharer and end here.
async fn share_with<E: ShareEnvironment>(
    app: &mut App,
    product_id: &str,
    name: Option<String>,
    env: E,
) -> Vec<ShareOutcome> {
    let effects = app.dispatch(Action::Share {
        product_id: product_id.to_string(),
        product_name: name,
    });

    let sharer = Sharer::new(env);
    let mut outcomes = Vec::new();
    for effect in effects {
        if let Effect::Share(payload) = effect {
            outcomes.push(sharer.share(&payload).await);
        }
    }
    outcomes
}

/// Terminal stand-in for the browser: no share sheet, stdout as clipboard.
struct TerminalShare;

#[async_trait(?Send)]
impl ShareEnvironment for TerminalShare {
    fn has_native_share(&self) -> bool {
        false
    }

    async fn native_share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
        println!("{text}");
        Ok(())
    }

    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }

    fn open_window(&self, popup: &PopupWindow) {
        println!("{}", popup.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seafood_catalog::season::FixedMonth;
    use seafood_catalog::{DataStore, SiteConfig};

    const PRODUCTS: &str = include_str!("../../../data/products.json");
    const FISH: &str = include_str!("../../../data/fish-database.json");

    fn app(month: u32) -> Result<App, seafood_catalog::CatalogError> {
        let store = DataStore::from_json(PRODUCTS, FISH)?;
        Ok(App::new(store, SiteConfig::default()).with_clock(FixedMonth(month)))
    }

    #[test]
    fn test_stats_for_december() -> Result<(), Box<dyn std::error::Error>> {
        let stats = build_stats(&app(12)?);

        assert_eq!(stats.total_products, 6);
        // hairtail range, plus the two tagged products without a specific season
        assert_eq!(
            stats.seasonal_products,
            ["基隆白帶魚", "午仔魚一夜干", "年節海鮮禮盒"]
        );
        assert_eq!(stats.categories[0].label, ALL_PRODUCTS);
        assert_eq!(stats.categories[0].count, 6);
        assert_eq!(stats.categories[1].label, "鮮魚");
        assert_eq!(stats.categories[1].count, 2);

        Ok(())
    }

    #[test]
    fn test_stats_for_april() -> Result<(), Box<dyn std::error::Error>> {
        let stats = build_stats(&app(4)?);

        assert_eq!(
            stats.seasonal_products,
            ["午仔魚一夜干", "紅目鰱", "年節海鮮禮盒"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_render_page_to_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app(7)?;
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("index.html");

        render_page(&mut app, &[], Some("頭足類"), Some(&path)).await?;

        let html = tokio::fs::read_to_string(&path).await?;
        assert_eq!(html.matches(r#"<div class="product-card">"#).count(), 1);
        assert!(html.contains("野生透抽"));
        assert!(html.contains("seasonal-badge"));
        assert_eq!(app.active_category, "頭足類");

        Ok(())
    }

    struct BrokenClipboard;

    #[async_trait(?Send)]
    impl ShareEnvironment for BrokenClipboard {
        fn has_native_share(&self) -> bool {
            false
        }

        async fn native_share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
            Err(ShareError::Unavailable)
        }

        async fn write_clipboard(&self, _text: &str) -> Result<(), ShareError> {
            Err(ShareError::Rejected("NotAllowedError".to_string()))
        }

        fn notify(&self, _message: &str) {}

        fn open_window(&self, _popup: &PopupWindow) {}
    }

    #[test]
    fn test_detail_for_unknown_product_is_empty() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app(7)?;

        assert!(detail_page(&mut app, "NOPE").is_none());
        let page = detail_page(&mut app, "SF001").ok_or("SF001 missing")?;
        assert!(page.meta(OG_TITLE).is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_share_unknown_product_is_quiet() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app(7)?;

        let outcomes = share_with(&mut app, "NOPE", None, BrokenClipboard).await;
        assert!(outcomes.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_share_failure_does_not_abort() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app(7)?;

        let outcomes = share_with(&mut app, "SF001", None, BrokenClipboard).await;
        assert_eq!(
            outcomes,
            [ShareOutcome::Failed(ShareError::Rejected(
                "NotAllowedError".to_string()
            ))]
        );

        Ok(())
    }
}
