// src/summary.rs
//
// Article summaries for a chosen class, served one paragraph at a time.
//
// The extract API is tried first; if it doesn't know the page we scrape the
// article's first paragraph ourselves. The lead image always comes from the
// article's infobox. Nothing here fails: every problem degrades to an empty
// summary or a placeholder image line.

use std::collections::VecDeque;
use std::fmt;

use crate::config::consts::MANUAL_SUMMARY_MARK;
use crate::core::net::WikiSource;
use crate::error::FetchError;
use crate::specs::article;

/// Remaining paragraphs of the last fetched summary, plus where to read more.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationCursor {
    remaining: VecDeque<String>,
    url: String,
}

/// Returned by [`PaginationCursor::advance`] once every paragraph was handed out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exhausted;

impl PaginationCursor {
    /// Split `text` into paragraphs on line breaks; blank lines are dropped.
    pub fn new(text: &str, url: impl Into<String>) -> Self {
        let remaining = text
            .lines()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
        Self { remaining, url: url.into() }
    }

    /// Next unconsumed paragraph.
    pub fn advance(&mut self) -> Result<String, Exhausted> {
        self.remaining.pop_front().ok_or(Exhausted)
    }

    pub fn remaining(&self) -> usize { self.remaining.len() }
    pub fn is_exhausted(&self) -> bool { self.remaining.is_empty() }

    /// Article URL for "read more online".
    pub fn url(&self) -> &str { &self.url }
}

/// Lead image of an article.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageLink {
    Url(String),
    /// No infobox, no image, or only images without alt text.
    Missing,
    /// Something unexpected went wrong fetching or reading the page.
    Unavailable(String),
}

impl ImageLink {
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageLink::Url(u) => Some(u),
            _ => None,
        }
    }
}

impl fmt::Display for ImageLink {
    /// What to show the user: the URL, nothing, or an explanation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLink::Url(u) => f.write_str(u),
            ImageLink::Missing => Ok(()),
            ImageLink::Unavailable(why) => {
                write!(f, "Unexpected error occurred while trying to load image.\n{why}")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SummaryPage {
    /// The class has no article. Not an error: render a note instead.
    NoDetailPage,
    Found {
        /// First paragraph, if the summary had any text at all.
        first: Option<String>,
        image: ImageLink,
        /// Holds the paragraphs after `first`.
        cursor: PaginationCursor,
    },
}

/// Summary and lead image for the article titled `detail_link`.
pub fn fetch(src: &dyn WikiSource, detail_link: Option<&str>) -> SummaryPage {
    let Some(title) = detail_link else {
        return SummaryPage::NoDetailPage;
    };
    let url = src.article_url(title);

    // The article HTML feeds both the manual summary fallback and the image.
    let page = src.page_html(title);

    let text = match src.intro_extract(title) {
        Ok(text) => text,
        Err(FetchError::NotFound) => {
            tracing::debug!(title, "no extract; scraping first paragraph");
            manual_summary(title, &page).unwrap_or_default()
        }
        Err(e) => {
            tracing::warn!(title, "extract fetch failed: {e}");
            manual_summary(title, &page).unwrap_or_default()
        }
    };

    let image = match &page {
        Ok(html) => article::infobox_image(html).map_or(ImageLink::Missing, ImageLink::Url),
        Err(FetchError::NotFound) => ImageLink::Missing,
        Err(e) => {
            tracing::warn!(title, "image fetch failed: {e}");
            ImageLink::Unavailable(e.to_string())
        }
    };

    let mut cursor = PaginationCursor::new(&text, url);
    let first = cursor.advance().ok();
    SummaryPage::Found { first, image, cursor }
}

fn manual_summary(title: &str, page: &Result<String, FetchError>) -> Option<String> {
    match page {
        Ok(html) => article::first_paragraph(html).map(|p| join!(&p, MANUAL_SUMMARY_MARK)),
        Err(e) => {
            tracing::warn!(title, "manual summary failed: {e}");
            None
        }
    }
}
