// Render module for seafood_catalog
// Turns catalog data into HTML fragments and schema.org blocks

pub mod cards;
pub mod document;
pub mod html;
pub mod schema;

pub use cards::{render_catalog, render_filter_buttons, render_modal_body};
pub use document::render_document;
pub use schema::{faq_schema, FaqItem};
