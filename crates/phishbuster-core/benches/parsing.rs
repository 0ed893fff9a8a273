use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phishbuster_core::store::SampleSet;

fn make_csv(rows: usize) -> String {
    let mut s = String::from("Sender, Subject ,Body,Link,LABEL,Clue\n");
    for i in 0..rows {
        let label = match i % 3 {
            0 => "phish",
            1 => " Safe ",
            _ => "spam",
        };
        s.push_str(&format!(
            "user{i}@examp1e.com,Invoice {i},\"Please review, then pay\",http://examp1e.com/{i},{label},Lookalike domain\n"
        ));
    }
    s
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_samples");

    let small = make_csv(10);
    let medium = make_csv(1_000);
    let large = make_csv(10_000);

    group.bench_function("10_rows", |b| {
        b.iter(|| SampleSet::from_reader(black_box(small.as_bytes())))
    });

    group.bench_function("1k_rows", |b| {
        b.iter(|| SampleSet::from_reader(black_box(medium.as_bytes())))
    });

    group.bench_function("10k_rows", |b| {
        b.iter(|| SampleSet::from_reader(black_box(large.as_bytes())))
    });

    group.finish();
}

criterion_group!(benches, bench_load);
criterion_main!(benches);
