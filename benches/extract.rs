use criterion::{black_box, criterion_group, criterion_main, Criterion};

use steam_flags::{core::html, scrape, specs::wiki};

fn sample_body() -> String {
    let mut body = String::from(
        r#"<div class="template-infobox-title">Sample</div><table><tr><th>Type</th></tr>"#,
    );
    for (label, players) in [("Local play", "4"), ("LAN play", "1-16"), ("Online play", "2-64")] {
        body.push_str(&format!(
            r#"<tr class="table-network-multiplayer-body-row"><th>{label}</th><td class="table-network-multiplayer-body-rating"><div title="Native support"></div></td><td class="table-network-multiplayer-body-players">{players}</td></tr>"#
        ));
    }
    body.push_str("</table>");
    // Pad with unrelated article content so parsing dominates like a real page.
    body.push_str(&"<p>Lorem ipsum <a href=\"#\">dolor</a> sit amet.</p>".repeat(400));
    body
}

fn bench_extract(c: &mut Criterion) {
    let body = sample_body();

    c.bench_function("records_from_body", |b| {
        b.iter(|| {
            let recs = scrape::records_from_body(black_box(&body), "220");
            black_box(recs.len())
        })
    });

    let doc = html::parse(&body);
    c.bench_function("extract_all_parsed", |b| {
        b.iter(|| {
            let recs = wiki::extract_all(black_box(&doc), "220");
            black_box(recs.is_ok())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
