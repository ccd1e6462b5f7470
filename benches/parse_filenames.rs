use case_indexer::{Convention, parse_filename};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_parsers(c: &mut Criterion) {
    let delimited = [
        "AFPC02852862-Tony Duffy-Advantage Finance.pdf",
        "AFPC02852862 - Mary-Jane Smith - Advantage Finance.PDF",
        "scan0001.pdf",
    ];
    let tagged = [
        "Ref: AFPC00762264  Client Name: Roman Patatanian.pdf",
        "AFPC00762264 Client Name: Roman Patatanian.pdf",
        "AFPC00762264  Roman Patatanian.pdf",
    ];

    c.bench_function("parse_delimited", |b| {
        b.iter(|| {
            for name in &delimited {
                black_box(parse_filename(black_box(name), Convention::Delimited));
            }
        })
    });

    c.bench_function("parse_tagged", |b| {
        b.iter(|| {
            for name in &tagged {
                black_box(parse_filename(black_box(name), Convention::Tagged));
            }
        })
    });
}

criterion_group!(benches, bench_parsers);
criterion_main!(benches);
