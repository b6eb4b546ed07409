// tests/repl.rs
#![cfg(feature = "cli")]

mod common;

use tempfile::tempdir;

use common::{FixtureWiki, fleet};
use warship_scrape::cli::{Flow, Repl};
use warship_scrape::{Options, QueryEngine};

fn repl(dir: &std::path::Path) -> Repl<FixtureWiki, Vec<u8>> {
    let src = FixtureWiki::with_list(&fleet()).extract("Iowa-class battleship", "One.\nTwo.");
    let engine = QueryEngine::new(src, &Options::default().with_store_dir(dir));
    Repl::new(engine, Vec::new())
}

fn text(r: &Repl<FixtureWiki, Vec<u8>>) -> String {
    String::from_utf8_lossy(r.output()).into_owned()
}

#[test]
fn lookup_then_more() {
    let dir = tempdir().unwrap();
    let mut r = repl(dir.path());

    r.handle("more").unwrap();
    assert!(text(&r).contains("nothing to get"));

    r.handle("warship Iowa").unwrap();
    r.handle("more").unwrap();
    r.handle("more").unwrap();
    let out = text(&r);
    assert!(out.contains("Class: Iowa\n"));
    assert!(out.contains("Displacement: 1,000 tons"));
    assert!(out.contains("Number: 2 (wartime/total built)"));
    assert!(out.contains("One."));
    assert!(out.contains("Two."));
    assert!(out.contains("Read more online!\n\nhttps://en.wikipedia.org/wiki/Iowa-class_battleship"));
}

#[test]
fn bad_spec_falls_back_and_unknown_name_reports() {
    let dir = tempdir().unwrap();
    let mut r = repl(dir.path());

    r.handle("warship -n xx").unwrap();
    assert!(text(&r).contains("Invalid specification"));
    assert!(text(&r).contains("Class: "));

    r.handle("warship Nautilus").unwrap();
    assert!(text(&r).contains("No warship was found"));
}

#[test]
fn refresh_json_and_quit() {
    let dir = tempdir().unwrap();
    let mut r = repl(dir.path());

    r.handle("refresh").unwrap();
    assert!(text(&r).contains("Data refreshed (10 classes)."));
    r.handle("json").unwrap();
    assert!(dir.path().join("data.json").exists());
    assert_eq!(r.engine().ingestions(), 1);
    assert_eq!(r.handle("quit").unwrap(), Flow::Quit);
}

#[test]
fn run_reads_lines_until_quit() {
    let dir = tempdir().unwrap();
    let mut r = repl(dir.path());
    r.run("help\nquit\nwarship\n".as_bytes()).unwrap();
    let out = text(&r);
    assert!(out.contains("Commands (at the prompt)"));
    assert_eq!(r.engine().ingestions(), 0);
}

#[test]
fn empty_source_table_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let engine = QueryEngine::new(FixtureWiki::with_list(&[]), &Options::default().with_store_dir(dir.path()));
    let mut r = Repl::new(engine, Vec::new());

    assert_eq!(r.handle("warship").unwrap(), Flow::Continue);
    assert_eq!(r.handle("warship -t cv").unwrap(), Flow::Continue);
    assert_eq!(r.handle("json").unwrap(), Flow::Continue);
    let out = text(&r);
    assert!(out.contains("No warship data available"));
    assert!(out.contains("Nothing to export."));
    assert_eq!(r.engine().ingestions(), 1);

    r.run("warship\nquit\n".as_bytes()).unwrap();
    assert_eq!(r.engine().ingestions(), 1);
}
