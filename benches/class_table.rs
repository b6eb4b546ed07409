// benches/class_table.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use warship_scrape::{index, records, specs::class_list};

const NAVIES: [&str; 4] = ["Royal Navy", "United States Navy", "Kriegsmarine", "Royal Hellenic Navy"];
const HULLS: [&str; 4] = ["Destroyer", "Battleship", "Light cruiser", "Submarine"];

/// A list page shaped like the real one, `n` rows long.
fn synthetic_page(n: usize) -> String {
    let mut html = s("<!DOCTYPE html><html><body><table class=\"wikitable\">");
    html.push_str("<tr><th>Class</th><th>Type</th><th>Navy</th><th>Years</th><th>Displacement</th><th>Number</th></tr>");
    for i in 0..n {
        html.push_str(&format!(
            "<tr><td><a href=\"/wiki/Class_{i}\" title=\"Class {i} ship\">Class {i} (1936)</a>[1]</td>\
             <td>{}</td><td>{}</td><td>1936&#8211;1945</td><td>{}&#160;t</td><td>{}</td></tr>",
            HULLS[i % HULLS.len()],
            NAVIES[i % NAVIES.len()],
            1_000 + i,
            i % 12,
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn s(x: &str) -> String { x.to_string() }

fn bench_class_table(c: &mut Criterion) {
    let page = synthetic_page(2_000);

    c.bench_function("parse_table", |b| {
        b.iter(|| {
            let scan = class_list::parse_table(black_box(&page));
            black_box(scan.map(|s| s.rows.len()))
        })
    });

    let rows = class_list::parse_table(&page).map(|s| s.rows).unwrap_or_default();
    c.bench_function("build_records_and_indices", |b| {
        b.iter(|| {
            let recs = records::build(black_box(rows.clone()));
            black_box(index::build_indices(&recs))
        })
    });
}

criterion_group!(benches, bench_class_table);
criterion_main!(benches);
