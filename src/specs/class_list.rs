// src/specs/class_list.rs
//! Scraping *spec* for the ship-class list page.
//!
//! Purpose:
//! - Find the first `table.wikitable` on the page and decode every data row into
//!   a [`RawRow`] using the fixed column order
//!   `name, type, navy, years, displacement, number`.
//! - Pick up the class article link from the name cell when it is a real article.
//!
//! Non-Responsibilities:
//! - **No normalization or dedup** (that is `records::build`).
//! - **No caching.**

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{DATA_TABLE, MIN_CELLS};
use crate::core::html::{attr, sel, text_of};
use crate::core::net::WikiSource;
use crate::data::RawRow;
use crate::error::{Error, Result, RowError};

static TABLE: LazyLock<Selector> = LazyLock::new(|| sel(DATA_TABLE));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| sel("a[href]"));

/// Rows decoded from one page, plus how many were dropped as malformed.
#[derive(Debug, Default)]
pub struct TableScan {
    pub rows: Vec<RawRow>,
    pub malformed: usize,
}

/// Fetch `page` and decode its class table. One network request, no retries.
pub fn scrape_table(src: &dyn WikiSource, page: &str) -> Result<TableScan> {
    let doc = src.page_html(page).map_err(|e| Error::SourceUnavailable {
        page: s!(page),
        reason: e.to_string(),
    })?;

    let t = std::time::Instant::now();
    let scan = parse_table(&doc).ok_or_else(|| Error::SourceUnavailable {
        page: s!(page),
        reason: s!("no wikitable on page"),
    })?;
    tracing::debug!(page, rows = scan.rows.len(), malformed = scan.malformed, elapsed = ?t.elapsed(), "parsed class table");
    Ok(scan)
}

/// Split out for offline tests. `None` if the page has no data table.
pub fn parse_table(html: &str) -> Option<TableScan> {
    let doc = Html::parse_document(html);
    let table = doc.select(&TABLE).next()?;

    let mut scan = TableScan::default();
    for tr in table_rows(table) {
        match decode_row(tr) {
            Ok(Some(row)) => scan.rows.push(row),
            Ok(None) => {} // header-only row
            Err(e) => {
                tracing::warn!("{e}; skipping");
                scan.malformed += 1;
            }
        }
    }
    Some(scan)
}

/// Rows of `table` itself: direct `<tr>` children and those of its row
/// groups. Rows of tables nested inside cells are not included.
fn table_rows<'a>(table: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    table.children().filter_map(ElementRef::wrap).flat_map(|child| {
        let name = child.value().name();
        let group = matches!(name, "thead" | "tbody" | "tfoot");
        let own = (name == "tr").then_some(child);
        let grouped = group
            .then(|| child.children().filter_map(ElementRef::wrap).filter(|el| el.value().name() == "tr"))
            .into_iter()
            .flatten();
        own.into_iter().chain(grouped)
    })
}

/// `Ok(None)` for rows with no `<td>` cells (headers).
pub fn decode_row(tr: ElementRef<'_>) -> std::result::Result<Option<RawRow>, RowError> {
    let cells: Vec<ElementRef<'_>> = tr
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name().eq_ignore_ascii_case("td"))
        .collect();

    if cells.is_empty() {
        return Ok(None);
    }
    if cells.len() < MIN_CELLS {
        return Err(RowError::Malformed { cells: cells.len(), expected: MIN_CELLS });
    }

    Ok(Some(RawRow {
        name: text_of(cells[0]),
        category: text_of(cells[1]),
        group: text_of(cells[2]),
        date_range: text_of(cells[3]),
        displacement: text_of(cells[4]),
        count: text_of(cells[5]),
        detail_link: detail_link(cells[0]),
    }))
}

/// Article title behind the name cell's first anchor.
///
/// Red links (`?title=…&redlink=1`) and section links (`#…`) don't count.
fn detail_link(cell: ElementRef<'_>) -> Option<String> {
    let a = cell.select(&ANCHOR).next()?;
    let href = attr(a, "href")?;
    if href.contains('?') || href.contains('#') {
        return None;
    }

    if let Some(title) = attr(a, "title").map(str::trim).filter(|t| !t.is_empty()) {
        return Some(s!(title));
    }

    // No title attribute: recover it from the path.
    let slug = href.rsplit('/').next().filter(|s| !s.is_empty())?;
    let decoded = urlencoding::decode(slug).ok()?;
    Some(decoded.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &str) -> String {
        format!(
            r#"<!DOCTYPE html><html><body>
            <table class="navbox"><tr><td>nav</td></tr></table>
            <table class="wikitable sortable">
              <tr><th>Class</th><th>Type</th><th>Navy</th><th>Years</th><th>Displacement</th><th>Number</th></tr>
              {rows}
            </table></body></html>"#
        )
    }

    #[test]
    fn decodes_rows_and_links() {
        let html = page(
            r#"<tr><td><a href="/wiki/Yamato-class_battleship" title="Yamato-class battleship">Yamato</a></td>
                   <td>Battleship</td><td>Imperial Japanese Navy</td><td>1940–1941</td><td>65,000</td><td>2/2</td></tr>"#,
        );
        let scan = parse_table(&html).unwrap();
        assert_eq!(scan.malformed, 0);
        assert_eq!(scan.rows.len(), 1);
        let r = &scan.rows[0];
        assert_eq!(r.name, "Yamato");
        assert_eq!(r.category, "Battleship");
        assert_eq!(r.group, "Imperial Japanese Navy");
        assert_eq!(r.date_range, "1940–1941");
        assert_eq!(r.displacement, "65,000");
        assert_eq!(r.count, "2/2");
        assert_eq!(r.detail_link.as_deref(), Some("Yamato-class battleship"));
    }

    #[test]
    fn skips_first_non_wikitable_and_header_rows() {
        let html = page("");
        let scan = parse_table(&html).unwrap();
        assert!(scan.rows.is_empty());
        assert_eq!(scan.malformed, 0);
    }

    #[test]
    fn short_rows_are_skipped_not_fatal() {
        let html = page(
            r#"<tr><td>Broken</td><td>Destroyer</td></tr>
               <tr><td>Fletcher</td><td>Destroyer</td><td>United States Navy</td><td>1942</td><td>2,050</td><td>175</td></tr>"#,
        );
        let scan = parse_table(&html).unwrap();
        assert_eq!(scan.malformed, 1);
        assert_eq!(scan.rows.len(), 1);
        assert_eq!(scan.rows[0].name, "Fletcher");
        assert_eq!(scan.rows[0].detail_link, None);
    }

    #[test]
    fn red_and_section_links_are_ignored() {
        let html = page(
            r#"<tr><td><a href="/w/index.php?title=Foo_class&action=edit&redlink=1" title="Foo class (page does not exist)">Foo</a></td>
                   <td>Destroyer</td><td>Royal Navy</td><td>1939</td><td>1,000</td><td>4</td></tr>
               <tr><td><a href="/wiki/List_of_things#Bar" title="List of things">Bar</a></td>
                   <td>Destroyer</td><td>Royal Navy</td><td>1939</td><td>1,000</td><td>4</td></tr>"#,
        );
        let scan = parse_table(&html).unwrap();
        assert_eq!(scan.rows.len(), 2);
        assert!(scan.rows.iter().all(|r| r.detail_link.is_none()));
    }

    #[test]
    fn link_without_title_falls_back_to_path() {
        let html = page(
            r#"<tr><td><a href="/wiki/Kong%C5%8D-class_battleship">Kongō</a></td>
                   <td>Battleship</td><td>Imperial Japanese Navy</td><td>1913</td><td>36,600</td><td>4</td></tr>"#,
        );
        let scan = parse_table(&html).unwrap();
        assert_eq!(scan.rows[0].detail_link.as_deref(), Some("Kongō-class battleship"));
    }

    #[test]
    fn rows_of_nested_tables_are_not_rows() {
        let html = page(
            r#"<tr><td>Hunt</td><td>Destroyer</td><td>Royal Navy</td><td>1940</td>
                   <td><table><tr><td>Type I</td></tr><tr><td>1,000</td><td>t</td></tr></table></td><td>86</td></tr>"#,
        );
        let scan = parse_table(&html).unwrap();
        assert_eq!(scan.malformed, 0);
        assert_eq!(scan.rows.len(), 1);
        assert_eq!(scan.rows[0].name, "Hunt");
        assert_eq!(scan.rows[0].count, "86");
    }

    #[test]
    fn explicit_row_groups() {
        let html = r#"<!DOCTYPE html><html><body><table class="wikitable">
            <thead><tr><th>Class</th></tr></thead>
            <tbody><tr><td>Gato</td><td>Submarine</td><td>United States Navy</td><td>1941</td><td>1,525</td><td>77</td></tr></tbody>
            </table></body></html>"#;
        let scan = parse_table(html).unwrap();
        assert_eq!(scan.rows.len(), 1);
        assert_eq!(scan.rows[0].name, "Gato");
    }

    #[test]
    fn no_table_is_none() {
        assert!(parse_table("<html><body><p>nothing</p></body></html>").is_none());
    }
}
