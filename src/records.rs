// src/records.rs
//
// RawRow → ClassRecord. Normalizes the text fields and folds rows that point at
// the same article into one record.

use crate::core::sanitize::{normalize, normalize_ws, strip_subclass_suffix};
use crate::data::{ClassRecord, RawRow, Records};

/// Upstream lists this entry with another class's data; drop it.
pub const EXCLUDED_NAME: &str = "Ersatz Yorck";

pub const YEARS_SEP: &str = "; ";
pub const DISPLACEMENT_SEP: &str = "; ";
pub const COUNT_SEP: &str = " + ";

/// Build canonical records, keyed by detail link (or name when unlinked).
///
/// Order-sensitive: for a repeated key the first row's name, type and navy win,
/// while years, displacement and counts are concatenated in row order.
pub fn build<I>(rows: I) -> Records
where
    I: IntoIterator<Item = RawRow>,
{
    let mut out = Records::new();
    let mut merged = 0usize;

    for raw in rows {
        let Some(rec) = canonical(raw) else { continue };

        match out.get_mut(rec.key()) {
            Some(existing) => {
                merge_into(existing, &rec);
                merged += 1;
            }
            None => {
                out.insert(s!(rec.key()), rec);
            }
        }
    }

    tracing::debug!(records = out.len(), merged, "built class records");
    out
}

/// Normalize one row. `None` for rows that should not become records.
fn canonical(raw: RawRow) -> Option<ClassRecord> {
    let name = strip_subclass_suffix(&normalize(&raw.name));
    if name.is_empty() || name == EXCLUDED_NAME {
        return None;
    }

    Some(ClassRecord {
        name,
        category: normalize(&raw.category),
        group: normalize(&raw.group),
        date_range: normalize_ws(&raw.date_range),
        displacement: normalize_ws(&raw.displacement),
        count: normalize_ws(&raw.count),
        detail_link: raw.detail_link,
    })
}

fn merge_into(existing: &mut ClassRecord, next: &ClassRecord) {
    append_sep!(existing.date_range, YEARS_SEP, &next.date_range);
    append_sep!(existing.displacement, DISPLACEMENT_SEP, &next.displacement);
    append_sep!(existing.count, COUNT_SEP, &next.count);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, years: &str, link: Option<&str>) -> RawRow {
        RawRow {
            name: s!(name),
            category: s!("Destroyer"),
            group: s!("Royal\u{a0}Navy"),
            date_range: s!(years),
            displacement: s!("1,350"),
            count: s!("8"),
            detail_link: link.map(String::from),
        }
    }

    #[test]
    fn shared_link_merges_in_row_order() {
        let recs = build(vec![
            row("A (1st group)", "1934", Some("A-class destroyer")),
            row("A (2nd group)", "1935", Some("A-class destroyer")),
        ]);
        assert_eq!(recs.len(), 1);
        let r = &recs["A-class destroyer"];
        assert_eq!(r.name, "A");
        assert_eq!(r.date_range, "1934; 1935");
        assert_eq!(r.displacement, "1,350; 1,350");
        assert_eq!(r.count, "8 + 8");
        assert_eq!(r.group, "Royal Navy");
    }

    #[test]
    fn first_seen_wins_for_other_fields() {
        let mut second = row("Other name", "1940", Some("L"));
        second.category = s!("Light cruiser");
        let recs = build(vec![row("First", "1939", Some("L")), second]);
        assert_eq!(recs["L"].name, "First");
        assert_eq!(recs["L"].category, "Destroyer");
    }

    #[test]
    fn unlinked_rows_key_by_name() {
        let recs = build(vec![row("Z", "1939", None), row("Y", "1940", None), row("Z", "1941", None)]);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs["Z"].date_range, "1939; 1941");
        assert!(recs["Y"].detail_link.is_none());
    }

    #[test]
    fn excluded_entry_never_appears() {
        let recs = build(vec![
            row(EXCLUDED_NAME, "1915", Some("Ersatz Yorck-class battlecruiser")),
            row("Ersätz Yorck", "1915", None),
            row("B", "1930", None),
        ]);
        assert_eq!(recs.len(), 1);
        assert!(recs.values().all(|r| r.name != EXCLUDED_NAME));
    }

    #[test]
    fn empty_names_dropped() {
        let recs = build(vec![row(" ", "1930", None), row("(unnamed)", "1930", None)]);
        assert!(recs.is_empty());
    }

    #[test]
    fn empty_variable_field_does_not_leave_dangling_separator() {
        let recs = build(vec![row("C", "", Some("C")), row("C", "1941", Some("C"))]);
        assert_eq!(recs["C"].date_range, "1941");
    }
}
