// src/cli.rs
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr, bail, eyre};

use crate::config::consts::NO_DETAIL_PAGE;
use crate::config::options::Options;
use crate::core::net::WikiSource;
use crate::data::ClassRecord;
use crate::engine::{Query, QueryEngine};
use crate::error::Error;
use crate::progress::Progress;
use crate::session::{Continuation, Session};

const HELP: &str = include_str!("cli_help.txt");
const PROMPT: &str = "> ";

/// Parse process arguments and run the prompt on stdin/stdout.
pub fn run() -> Result<()> {
    let Some(opts) = parse_cli(env::args().skip(1))? else {
        eprintln!("{HELP}");
        return Ok(());
    };
    crate::log::init(opts.store_dir()).wrap_err("could not open debug log")?;
    tracing::info!(store = %opts.store_dir().display(), "starting");

    let engine = QueryEngine::from_options(&opts)?;
    let stdin = io::stdin();
    let mut repl = Repl::new(engine, io::stdout());
    repl.run(stdin.lock())
}

/// `None` means help was requested.
pub fn parse_cli<I>(args: I) -> Result<Option<Options>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut pages = Vec::new();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--store" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --store"))?;
                opts = opts.with_store_dir(PathBuf::from(v));
            }
            "--page" => pages.push(args.next().ok_or_else(|| eyre!("Missing value for --page"))?),
            "-h" | "--help" => return Ok(None),
            _ => bail!("Unknown arg: {a}"),
        }
    }
    if !pages.is_empty() {
        opts = opts.with_source_pages(pages);
    }
    Ok(Some(opts))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Prints scrape progress as it happens.
struct ConsoleProgress<'a, W: Write> {
    out: &'a mut W,
    done: usize,
    total: usize,
}

impl<W: Write> Progress for ConsoleProgress<'_, W> {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
    }
    fn item_done(&mut self, page: &str, rows: usize, malformed: usize) {
        self.done += 1;
        let _ = write!(self.out, "Fetched {page} ({}/{}): {rows} rows", self.done, self.total);
        let _ = match malformed {
            0 => writeln!(self.out),
            n => writeln!(self.out, ", {n} skipped"),
        };
    }
    fn item_failed(&mut self, page: &str, reason: &str) {
        let _ = writeln!(self.out, "Failed {page}: {reason}");
    }
}

/// One caller context: an engine, its "more" state, and where replies go.
pub struct Repl<S: WikiSource, W: Write> {
    engine: QueryEngine<S>,
    session: Session,
    out: W,
}

impl<S: WikiSource, W: Write> Repl<S, W> {
    pub fn new(engine: QueryEngine<S>, out: W) -> Self {
        Self { engine, session: Session::new(), out }
    }

    pub fn engine(&self) -> &QueryEngine<S> { &self.engine }
    pub fn output(&self) -> &W { &self.out }

    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()?;
        for line in input.lines() {
            if self.handle(&line?)? == Flow::Quit {
                break;
            }
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Execute one command line.
    pub fn handle(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match cmd {
            "" => {}
            "warship" => self.warship(rest)?,
            "more" => self.more()?,
            "refresh" => self.refresh()?,
            "json" => self.json()?,
            "help" => writeln!(self.out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(self.out, "Unknown command {other:?}. Type `help`.")?,
        }
        Ok(Flow::Continue)
    }

    fn progress(out: &mut W) -> ConsoleProgress<'_, W> {
        ConsoleProgress { out, done: 0, total: 0 }
    }

    /// Make sure data is loaded, scraping on cold start. Reports failures.
    fn ensure_data(&mut self) -> Result<bool> {
        let mut progress = Self::progress(&mut self.out);
        match self.engine.get_data_with(false, &mut progress) {
            Ok(_) => Ok(true),
            Err(e) => {
                writeln!(self.out, "Could not load warship data: {e}")?;
                Ok(false)
            }
        }
    }

    fn warship(&mut self, args: &str) -> Result<()> {
        let query = match Query::parse(args) {
            Ok(q) => q,
            Err(e) => {
                writeln!(self.out, "Invalid specification ({e}). Picking any class instead.")?;
                Query::Random(None)
            }
        };
        if !self.ensure_data()? {
            return Ok(());
        }

        let found = match &query {
            Query::Random(filter) => match self.engine.random_record(*filter) {
                Ok(rec) => Some(rec.clone()),
                Err(Error::NoMatch(_)) => None,
                Err(Error::EmptyCache) => {
                    writeln!(self.out, "No warship data available. Try `refresh` later.")?;
                    return Ok(());
                }
                Err(e) => {
                    tracing::error!("sampling failed: {e}");
                    writeln!(self.out, "Could not pick a warship: {e}")?;
                    return Ok(());
                }
            },
            Query::Name(name) => self.engine.exact_record(name).cloned(),
        };
        let Some(rec) = found else {
            writeln!(self.out, "No warship was found. Check arguments and/or spelling.")?;
            return Ok(());
        };

        write!(self.out, "{}", render(&rec))?;
        match self.session.summary_for(self.engine.source(), &rec) {
            Some(lead) => {
                if let Some(first) = lead.first {
                    writeln!(self.out, "\n{first}")?;
                }
                let image = lead.image.to_string();
                if !image.is_empty() {
                    writeln!(self.out, "\n{image}")?;
                }
            }
            None => tracing::debug!(name = %rec.name, "class has no article"),
        }
        Ok(())
    }

    fn more(&mut self) -> Result<()> {
        match self.session.next_paragraph() {
            Continuation::Paragraph(p) => writeln!(self.out, "{p}")?,
            Continuation::ReadMore(url) => writeln!(self.out, "Read more online!\n\n{url}")?,
            Continuation::NoDetailPage => writeln!(self.out, "Read more online!\n\n{NO_DETAIL_PAGE}")?,
            Continuation::NothingToContinue => writeln!(
                self.out,
                "A warship was not previously generated, so there's nothing to get."
            )?,
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        let mut progress = Self::progress(&mut self.out);
        match self.engine.get_data_with(true, &mut progress) {
            Ok(cache) => {
                let n = cache.len();
                writeln!(self.out, "Data refreshed ({n} classes).")?;
            }
            Err(e) => writeln!(self.out, "Refresh failed, keeping previous data: {e}")?,
        }
        Ok(())
    }

    fn json(&mut self) -> Result<()> {
        if !self.ensure_data()? {
            return Ok(());
        }
        let Some(cache) = self.engine.cache() else {
            writeln!(self.out, "Nothing to export.")?;
            return Ok(());
        };
        let path = self.engine.store().export_json(cache)?;
        writeln!(self.out, "Wrote {}", path.display())?;
        Ok(())
    }
}

/// Record as shown at the prompt.
pub fn render(rec: &ClassRecord) -> String {
    let mut out = String::new();
    let mut line = |label: &str, value: &str, unit: &str| {
        if !value.is_empty() {
            out.push_str(&format!("{label}: {value}{unit}\n"));
        }
    };
    line("Class", &rec.name, "");
    line("Type", &rec.category, "");
    line("Navy", &rec.group, "");
    line("Years", &rec.date_range, "");
    line("Displacement", &rec.displacement, " tons");
    line("Number", &rec.count, " (wartime/total built)");
    out
}
