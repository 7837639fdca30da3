use std::fmt::Write;

use crate::app::page::{Page, OG_DESCRIPTION, OG_IMAGE, OG_TITLE, OG_URL};
use crate::config::SiteConfig;
use crate::render::html::{escape, ld_json_script};
use crate::render::schema::FaqItem;

/// Full standalone page around the current view state.
///
/// Element ids match the ones the browser client binds to, so the output can
/// be served as a static fallback for the wasm page.
pub fn render_document(page: &Page, site: &SiteConfig, faq: &[FaqItem]) -> String {
    let mut out = String::with_capacity(page.catalog_html.len() + 4096);

    out.push_str("<!DOCTYPE html><html lang=\"zh-Hant\"><head><meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    let _ = write!(out, "<title>{}</title>", escape(&site.brand));

    let default_url = format!("{}/", site.domain);
    for (property, fallback) in [
        (OG_TITLE, site.brand.as_str()),
        (OG_DESCRIPTION, site.default_description.as_str()),
        (OG_IMAGE, ""),
        (OG_URL, default_url.as_str()),
    ] {
        let content = page.meta(property).unwrap_or(fallback);
        let _ = write!(
            out,
            r#"<meta property="{property}" content="{}">"#,
            escape(content)
        );
    }
    for script in &page.head_scripts {
        out.push_str(&ld_json_script(script));
    }
    out.push_str("</head><body>");

    let _ = write!(
        out,
        r#"<nav id="filter-buttons-container">{}</nav>"#,
        page.filters_html
    );
    let _ = write!(
        out,
        r#"<main id="product-list-container">{}</main>"#,
        page.catalog_html
    );

    let modal_class = if page.modal.visible { "modal visible" } else { "modal" };
    let _ = write!(
        out,
        r#"<div id="product-modal" class="{modal_class}"><div class="modal-content"><button class="modal-close-btn">&times;</button><div id="modal-body-content">{}</div></div></div>"#,
        page.modal.body_html
    );

    write_faq_section(&mut out, faq);

    let form_src = page
        .order_form_src
        .clone()
        .unwrap_or_else(|| site.order_form_url.clone());
    let _ = write!(
        out,
        r#"<section id="{}"><div class="google-form-container"><iframe src="{}"></iframe></div></section>"#,
        escape(&site.order_anchor),
        escape(&form_src)
    );

    out.push_str("</body></html>");
    out
}

fn write_faq_section(out: &mut String, faq: &[FaqItem]) {
    if faq.is_empty() {
        return;
    }

    out.push_str(r#"<section id="faq">"#);
    for item in faq {
        out.push_str(r#"<dl class="qa-item">"#);
        if let Some(question) = &item.question {
            let _ = write!(out, "<dt>{}</dt>", escape(question));
        }
        if let Some(answer) = &item.answer {
            let _ = write!(out, "<dd>{}</dd>", escape(answer));
        }
        out.push_str("</dl>");
    }
    out.push_str("</section>");
}
