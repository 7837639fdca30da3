/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wraps JSON in an `application/ld+json` script element.
///
/// `</` is written as `<\/` so the payload cannot end the element early.
pub fn ld_json_script(json: &str) -> String {
    format!(
        r#"<script type="application/ld+json">{}</script>"#,
        json.replace("</", r"<\/")
    )
}
