use std::collections::HashMap;
use std::fmt::Write;

use crate::app::interaction::ActionTag;
use crate::config::{card_image_path, SiteConfig};
use crate::domain::{Fish, Product};
use crate::render::html::{escape, ld_json_script};
use crate::render::schema::ProductSchema;
use crate::season::is_in_season;

const SEASONAL_BADGE: &str = r#"<div class="seasonal-badge">當季</div>"#;
const PLACEHOLDER_IMAGE: &str = "images/placeholder.jpg";
const NO_DESCRIPTION: &str = "暫無詳細說明。";

/// Markup for every product card, in input order.
pub fn render_catalog(
    products: &[&Product],
    fish_index: &HashMap<String, Fish>,
    month: u32,
    site: &SiteConfig,
) -> String {
    products
        .iter()
        .map(|product| render_card(product, is_in_season(product, fish_index, month), site))
        .collect()
}

fn render_card(product: &Product, in_season: bool, site: &SiteConfig) -> String {
    let id = escape(&product.product_id);
    let name = escape(&product.product_name);

    let specifications = product
        .specifications
        .as_deref()
        .map(|text| escape(text).replace('\n', "<br>"))
        .unwrap_or_default();

    let cba = product
        .cba
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(|text| format!(r#"<p class="product-cba">{}</p>"#, escape(text)))
        .unwrap_or_default();

    let badge = if in_season { SEASONAL_BADGE } else { "" };
    let schema = ld_json_script(&ProductSchema::new(product, site).to_json());

    let mut card = String::new();
    card.push_str(r#"<div class="product-card">"#);
    let _ = write!(
        card,
        r#"<img src="{src}" alt="{name}" class="product-image" onerror="this.onerror=null;this.src='{PLACEHOLDER_IMAGE}';" data-product-id="{id}" data-action="{detail}">"#,
        src = escape(&card_image_path(&product.product_id)),
        detail = ActionTag::Detail.as_str(),
    );
    card.push_str(badge);
    let _ = write!(card, r#"<h3 class="product-title">{name}</h3>"#);
    let _ = write!(card, r#"<p class="product-spec">{specifications}</p>"#);
    let _ = write!(
        card,
        r#"<p class="product-price">{} {}</p>"#,
        escape(&site.price_marker),
        escape(&product.price.to_string())
    );
    card.push_str(&cba);
    card.push_str(r#"<div class="product-card-buttons">"#);
    let _ = write!(
        card,
        r#"<button class="btn detail-btn" data-product-id="{id}" data-action="{}">查看詳情</button>"#,
        ActionTag::Detail.as_str()
    );
    let _ = write!(
        card,
        r#"<button class="btn share-btn" data-product-id="{id}" data-product-name="{name}" data-action="{}">分享</button>"#,
        ActionTag::Share.as_str()
    );
    card.push_str("</div>");
    card.push_str(&schema);
    card.push_str("</div>");
    card
}

/// One button per category label.
pub fn render_filter_buttons(labels: &[String]) -> String {
    labels
        .iter()
        .map(|label| {
            let label = escape(label);
            format!(r#"<button class="filter-btn" data-category="{label}">{label}</button>"#)
        })
        .collect()
}

/// Modal content for a single product.
pub fn render_modal_body(product: &Product) -> String {
    let name = escape(&product.product_name);
    let description = escape(product.description().unwrap_or(NO_DESCRIPTION));

    format!(
        r#"<h2 class="modal-product-title">{name}</h2><p class="modal-product-description">{description}</p><div class="modal-order-cta"><button class="cta-button" data-product-name="{name}" data-action="{order}">我要訂購此商品</button></div>"#,
        order = ActionTag::Order.as_str(),
    )
}
