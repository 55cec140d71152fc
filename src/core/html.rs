// src/core/html.rs
//
// Small helpers over the parsed document tree (`scraper::Html`).
// Bracket markup identifies many nodes only by inline `style`, so style
// matching is done here, normalized, instead of with CSS attribute selectors.

use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;
use super::sanitize::{normalize_style, normalize_ws};

pub fn selector(css: &'static str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector { css, reason: e.to_string() })
}

/// Visible text of an element, whitespace-normalized.
pub fn text_of(el: &ElementRef) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn attr<'a>(el: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// `<title>` text, normalized. None if absent or blank.
pub fn document_title(doc: &Html) -> Option<String> {
    let sel = selector("title").ok()?;
    let title = doc.select(&sel).next().map(|t| text_of(&t))?;
    (!title.is_empty()).then_some(title)
}

/// Inline style equals `style` (ignoring whitespace, case and a trailing `;`).
pub fn style_is(el: &ElementRef, style: &str) -> bool {
    el.value()
        .attr("style")
        .is_some_and(|s| normalize_style(s) == normalize_style(style))
}

pub fn style_contains(el: &ElementRef, needle: &str) -> bool {
    el.value()
        .attr("style")
        .is_some_and(|s| normalize_style(s).contains(&normalize_style(needle)))
}

/// First descendant matching `sel` with the given inline style.
pub fn first_styled<'a>(scope: &ElementRef<'a>, sel: &Selector, style: &str) -> Option<ElementRef<'a>> {
    scope.select(sel).find(|e| style_is(e, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_lookup_ignores_spacing() {
        let doc = Html::parse_fragment(
            r#"<div id="root"><div style="float: left; margin-left:5px">3</div><div style="">Urban</div></div>"#,
        );
        let div = selector("div").unwrap();
        let root = doc.select(&selector("#root").unwrap()).next().unwrap();

        let left = first_styled(&root, &div, "float:left;margin-left:5px;").unwrap();
        assert_eq!(text_of(&left), "3");

        let venue = first_styled(&root, &div, "").unwrap();
        assert_eq!(text_of(&venue), "Urban");
    }

    #[test]
    fn title_is_normalized() {
        let doc = Html::parse_document("<html><head><title>\n Europe -  Qualifier </title></head></html>");
        assert_eq!(document_title(&doc).as_deref(), Some("Europe - Qualifier"));
    }
}
