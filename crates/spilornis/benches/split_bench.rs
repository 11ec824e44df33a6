use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn make_plain_list(n: usize) -> Vec<u16> {
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&format!("item{} ", i));
    }
    s.encode_utf16().collect()
}

fn make_nested_list(n: usize) -> Vec<u16> {
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&format!("{{k{} {{v {}}}}} \"q {}\" e\\t{} ", i, i, i, i));
    }
    s.encode_utf16().collect()
}

pub fn split_benchmarks(c: &mut Criterion) {
    let cases = vec![
        ("plain_1k", make_plain_list(1000)),
        ("nested_1k", make_nested_list(1000)),
    ];
    let mut group = c.benchmark_group("split_list");
    for (name, text) in cases {
        group.throughput(Throughput::Elements(text.len() as u64));
        group.bench_function(name, |b| {
            b.iter_batched(
                || text.clone(),
                |t| black_box(spilornis::split_list(&t).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, split_benchmarks);
criterion_main!(benches);
