// src/core/net.rs
//
// Blocking HTTP access to the wiki. One request per call, no retries.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::options::Options;
use crate::error::FetchError;

/// Where pages come from. The live implementation talks to Wikipedia;
/// tests plug in captured fixtures.
pub trait WikiSource {
    /// Full rendered HTML of the article with this title.
    fn page_html(&self, title: &str) -> Result<String, FetchError>;

    /// Plain-text lead section of the article, paragraphs separated by `\n`.
    /// `Err(FetchError::NotFound)` when the API knows no such page.
    fn intro_extract(&self, title: &str) -> Result<String, FetchError>;

    /// Human-facing URL for an article title.
    fn article_url(&self, title: &str) -> String;
}

/// Build `<root><Title_With_Underscores>` with percent-encoding.
pub fn article_url(wiki_root: &str, title: &str) -> String {
    let slug = title.replace(' ', "_");
    join!(wiki_root, &urlencoding::encode(&slug))
}

pub struct WikiClient {
    client: Client,
    wiki_root: String,
    api_url: String,
}

impl WikiClient {
    pub fn new(opts: &Options) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(opts.timeout_secs))
            .user_agent(opts.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            wiki_root: opts.wiki_root.clone(),
            api_url: opts.api_url.clone(),
        })
    }

    fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        resp.text().map_err(|e| FetchError::Transport(e.to_string()))
    }
}

impl WikiSource for WikiClient {
    fn page_html(&self, title: &str) -> Result<String, FetchError> {
        let url = self.article_url(title);
        tracing::debug!(%url, "GET article");
        self.get_text(&url, &[])
    }

    fn intro_extract(&self, title: &str) -> Result<String, FetchError> {
        tracing::debug!(title, "GET intro extract");
        let body = self.get_text(
            &self.api_url,
            &[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
            ],
        )?;
        parse_extract_response(&body)
    }

    fn article_url(&self, title: &str) -> String {
        article_url(&self.wiki_root, title)
    }
}

#[derive(Deserialize)]
struct ExtractResponse {
    query: Option<ExtractQuery>,
}

#[derive(Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: Vec<ExtractPage>,
}

#[derive(Deserialize)]
struct ExtractPage {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    extract: Option<String>,
}

/// Pull the extract out of a `formatversion=2` query response.
/// A missing/invalid page, or one with no extract, counts as not found.
pub fn parse_extract_response(body: &str) -> Result<String, FetchError> {
    let resp: ExtractResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Transport(e.to_string()))?;

    let page = resp
        .query
        .and_then(|q| q.pages.into_iter().next())
        .ok_or(FetchError::NotFound)?;

    if page.missing || page.invalid {
        return Err(FetchError::NotFound);
    }
    match page.extract {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(FetchError::NotFound),
    }
}
