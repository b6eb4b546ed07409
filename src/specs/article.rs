// src/specs/article.rs
//! Scraping *spec* for a class article, used when the extract API has nothing.
//!
//! - Summary: the first body paragraph with visible text.
//! - Image: the first `<img>` in the infobox, kept only if it has alt text
//!   (logos and flags have none), rewritten from thumbnail to full size.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::consts::INFOBOX_TABLE;
use crate::core::html::{attr, sel, text_of};

static BODY_P: LazyLock<Selector> = LazyLock::new(|| sel("div.mw-parser-output > p"));
static ANY_P: LazyLock<Selector> = LazyLock::new(|| sel("body p"));
static INFOBOX: LazyLock<Selector> = LazyLock::new(|| sel(INFOBOX_TABLE));
static IMG: LazyLock<Selector> = LazyLock::new(|| sel("img"));

pub fn first_paragraph(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    doc.select(&BODY_P)
        .chain(doc.select(&ANY_P))
        .map(text_of)
        .find(|t| !t.is_empty())
}

/// Full-resolution URL of the infobox's lead image, if it has one worth showing.
pub fn infobox_image(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let infobox = doc.select(&INFOBOX).next()?;
    let img = infobox.select(&IMG).next()?;

    let alt = attr(img, "alt").unwrap_or("").trim();
    if alt.is_empty() {
        return None;
    }
    let src = attr(img, "src")?;
    Some(full_size_url(src))
}

/// `//upload…/commons/thumb/a/ab/X.jpg/300px-X.jpg` → `https://upload…/commons/a/ab/X.jpg`
pub fn full_size_url(src: &str) -> String {
    let mut parts: Vec<&str> = src.split('/').collect();
    if let Some(i) = parts.iter().position(|p| *p == "thumb") {
        parts.remove(i);
        parts.pop();
    }
    let path = parts.join("/");
    if path.starts_with("//") { join!("https:", &path) } else { path }
}
