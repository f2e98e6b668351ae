// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use commencement_export::{specs::candidates, DataSet};

/// Synthetic page: 12 schools × 15 degrees × 40 candidates.
fn sample_page() -> String {
    let mut html = String::from("<html><body>");
    for s in 0..12 {
        html.push_str(&format!("<div class=\"school\"><h2 class=\"school__name\">School {s}</h2>"));
        for d in 0..15 {
            html.push_str(&format!(
                "<div class=\"degree_wrapper\"><h4 class=\"degree__h4\">Degree {s}.{d}</h4><ul class=\"list-unstyled\">"
            ));
            for c in 0..40 {
                html.push_str(&format!("<li>Candidate {s} {d} {c}, Bachelor of Science</li>"));
            }
            html.push_str("</ul></div>");
        }
        html.push_str("</div>");
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_page();

    c.bench_function("parse_document", |b| {
        b.iter(|| {
            let records = candidates::parse_document(black_box(&doc));
            black_box(records.len())
        })
    });

    let records = candidates::parse_document(&doc);
    c.bench_function("dataset_projection", |b| {
        b.iter(|| black_box(DataSet::from_records(black_box(&records))).len())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
