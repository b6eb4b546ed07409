// src/session.rs
//
// Per-caller "show more" state. Each caller context (one REPL, one chat
// channel) owns its own Session so paging never leaks between callers.

use crate::core::net::WikiSource;
use crate::data::ClassRecord;
use crate::summary::{self, ImageLink, PaginationCursor, SummaryPage};

/// What to show right after a class was picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lead {
    pub first: Option<String>,
    pub image: ImageLink,
}

/// Answer to a "more" request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Continuation {
    Paragraph(String),
    /// Summary used up; point at the full article.
    ReadMore(String),
    /// The last class picked has no article.
    NoDetailPage,
    /// Nothing was picked yet.
    NothingToContinue,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    NoDetailPage,
    Paging(PaginationCursor),
}

#[derive(Debug, Default)]
pub struct Session {
    state: State,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    /// Fetch the summary for `rec` and keep its remaining paragraphs for
    /// [`next_paragraph`](Self::next_paragraph). Replaces any earlier cursor.
    ///
    /// `None` if the class has no article.
    pub fn summary_for(&mut self, src: &dyn WikiSource, rec: &ClassRecord) -> Option<Lead> {
        match summary::fetch(src, rec.detail_link.as_deref()) {
            SummaryPage::NoDetailPage => {
                self.state = State::NoDetailPage;
                None
            }
            SummaryPage::Found { first, image, cursor } => {
                self.state = State::Paging(cursor);
                Some(Lead { first, image })
            }
        }
    }

    pub fn next_paragraph(&mut self) -> Continuation {
        match &mut self.state {
            State::Idle => Continuation::NothingToContinue,
            State::NoDetailPage => Continuation::NoDetailPage,
            State::Paging(cursor) => match cursor.advance() {
                Ok(p) => Continuation::Paragraph(p),
                Err(_) => Continuation::ReadMore(s!(cursor.url())),
            },
        }
    }

    /// Forget the current cursor.
    pub fn reset(&mut self) { self.state = State::Idle; }
}
