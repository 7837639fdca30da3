//! schema.org structured data for product cards and the FAQ section.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::domain::{Price, Product};

const SCHEMA_CONTEXT: &str = "https://schema.org";
const IN_STOCK: &str = "https://schema.org/InStock";

#[derive(Debug, Serialize)]
pub struct ProductSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    image: String,
    description: String,
    sku: &'a str,
    brand: Brand<'a>,
    offers: Offer<'a>,
}

#[derive(Debug, Serialize)]
struct Brand<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    price_currency: &'a str,
    price: &'a Price,
    availability: &'static str,
    url: String,
}

impl<'a> ProductSchema<'a> {
    pub fn new(product: &'a Product, site: &'a SiteConfig) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            kind: "Product",
            name: &product.product_name,
            image: site.image_url(&product.product_id),
            description: sanitize_description(
                product.description().unwrap_or(&site.default_description),
            ),
            sku: &product.product_id,
            brand: Brand {
                kind: "Brand",
                name: &site.brand,
            },
            offers: Offer {
                kind: "Offer",
                price_currency: &site.currency,
                price: &product.price,
                availability: IN_STOCK,
                url: site.order_url(),
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Quotes are backslash-escaped and newlines collapse to spaces before the
/// value is JSON-encoded.
fn sanitize_description(text: &str) -> String {
    text.replace('"', "\\\"").replace('\n', " ")
}

/// One question/answer pair found on the page. Either side may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct FaqItem {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl FaqItem {
    pub fn new(question: Option<&str>, answer: Option<&str>) -> Self {
        Self {
            question: question.map(str::to_string),
            answer: answer.map(str::to_string),
        }
    }

    fn trimmed(&self) -> Option<(&str, &str)> {
        let question = self.question.as_deref().map(str::trim).filter(|q| !q.is_empty())?;
        let answer = self.answer.as_deref().map(str::trim).filter(|a| !a.is_empty())?;
        Some((question, answer))
    }
}

#[derive(Debug, Serialize)]
struct FaqPage<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "mainEntity")]
    main_entity: Vec<Question<'a>>,
}

#[derive(Debug, Serialize)]
struct Question<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: Answer<'a>,
}

#[derive(Debug, Serialize)]
struct Answer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    text: &'a str,
}

/// `FAQPage` JSON for the complete pairs, or `None` when there are none.
pub fn faq_schema(items: &[FaqItem]) -> Option<String> {
    let questions: Vec<Question<'_>> = items
        .iter()
        .filter_map(FaqItem::trimmed)
        .map(|(question, answer)| Question {
            kind: "Question",
            name: question,
            accepted_answer: Answer {
                kind: "Answer",
                text: answer,
            },
        })
        .collect();

    if questions.is_empty() {
        return None;
    }

    let page = FaqPage {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity: questions,
    };
    serde_json::to_string(&page).ok()
}
