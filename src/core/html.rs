// src/core/html.rs
//
// Thin helpers over `scraper` so specs read like the pages they parse.

use scraper::{ElementRef, Selector};

/// Compile a selector literal. Only ever called with static, known-good
/// selectors, so a parse failure is a programming error.
pub fn sel(css: &'static str) -> Selector {
    match Selector::parse(css) {
        Ok(s) => s,
        Err(e) => panic!("invalid selector {css:?}: {e}"),
    }
}

/// All visible text under an element, footnote markers removed,
/// whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    super::sanitize::strip_brackets(&raw)
}

/// Attribute value, or `None` if absent.
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}
