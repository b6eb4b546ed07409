// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use warship_scrape::FetchError;
use warship_scrape::WikiSource;
use warship_scrape::config::consts::{CLASS_LIST_PAGE, WIKI_ROOT};
use warship_scrape::core::net::article_url;

/// One list-table row: name cell text, type, navy, optional article title.
pub struct Row<'a> {
    pub name: &'a str,
    pub hull: &'a str,
    pub navy: &'a str,
    pub link: Option<&'a str>,
}

pub const fn row<'a>(name: &'a str, hull: &'a str, navy: &'a str, link: Option<&'a str>) -> Row<'a> {
    Row { name, hull, navy, link }
}

pub fn list_page(rows: &[Row<'_>]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html><html><body><div class=\"mw-parser-output\">\
         <table class=\"wikitable sortable\"><tr><th>Class</th><th>Type</th><th>Navy</th>\
         <th>Years</th><th>Displacement</th><th>Number</th></tr>",
    );
    for r in rows {
        let name = match r.link {
            Some(t) => format!("<a href=\"/wiki/{}\" title=\"{t}\">{}</a>", t.replace(' ', "_"), r.name),
            None => r.name.to_string(),
        };
        html.push_str(&format!(
            "<tr><td>{name}</td><td>{}</td><td>{}</td><td>1939&#8211;1945</td>\
             <td>1,000</td><td>2</td></tr>",
            r.hull, r.navy
        ));
    }
    html.push_str("</table></div></body></html>");
    html
}

/// Ten classes; three Royal Navy, no submarines.
pub fn fleet() -> Vec<Row<'static>> {
    vec![
        row("Iowa", "Battleship", "United States Navy", Some("Iowa-class battleship")),
        row("Yamato", "Battleship", "Imperial Japanese Navy", Some("Yamato-class battleship")),
        row("Bismarck", "Battleship", "Kriegsmarine", Some("Bismarck-class battleship")),
        row("Littorio", "Battleship", "Regia Marina", Some("Littorio-class battleship")),
        row("Richelieu", "Battleship", "French Navy", Some("Richelieu-class battleship")),
        row("Tribal", "Destroyers", "Royal Navy", Some("Tribal-class destroyer (1936)")),
        row("Illustrious", "Aircraft carrier", "Royal Navy", Some("Illustrious-class aircraft carrier")),
        row("Town (Southampton)", "Light cruiser", "Royal Navy", Some("Town-class cruiser (1936)")),
        row("Tromp", "Light cruiser", "Royal Netherlands Navy", None),
        row("Fletcher", "Destroyer", "United States Navy", Some("Fletcher-class destroyer")),
    ]
}

/// In-memory wiki. Counts list-page fetches so tests can tell cache hits
/// from scrapes.
#[derive(Default)]
pub struct FixtureWiki {
    pub pages: HashMap<String, String>,
    pub extracts: HashMap<String, String>,
    /// Titles whose page fetch fails with a transport error.
    pub broken: Vec<String>,
    pub list_fetches: Cell<usize>,
    pub list_down: Cell<bool>,
}

impl FixtureWiki {
    pub fn with_list(rows: &[Row<'_>]) -> Self {
        let mut w = FixtureWiki::default();
        w.pages.insert(CLASS_LIST_PAGE.to_string(), list_page(rows));
        w
    }

    pub fn article(mut self, title: &str, html: &str) -> Self {
        self.pages.insert(title.to_string(), html.to_string());
        self
    }

    pub fn extract(mut self, title: &str, text: &str) -> Self {
        self.extracts.insert(title.to_string(), text.to_string());
        self
    }
}

impl WikiSource for FixtureWiki {
    fn page_html(&self, title: &str) -> Result<String, FetchError> {
        if title == CLASS_LIST_PAGE {
            self.list_fetches.set(self.list_fetches.get() + 1);
            if self.list_down.get() {
                return Err(FetchError::Status(503));
            }
        }
        if self.broken.iter().any(|b| b == title) {
            return Err(FetchError::Transport("connection reset".to_string()));
        }
        self.pages.get(title).cloned().ok_or(FetchError::NotFound)
    }

    fn intro_extract(&self, title: &str) -> Result<String, FetchError> {
        self.extracts.get(title).cloned().ok_or(FetchError::NotFound)
    }

    fn article_url(&self, title: &str) -> String {
        article_url(WIKI_ROOT, title)
    }
}
