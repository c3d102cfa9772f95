// Query-core benchmarks: index build and similarity ranking
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use triagex_core::{rank_similar, Escalation, SimilarityConfig, TfIdfIndex};

const WORDS: &[&str] = &[
    "vm", "cpu", "disk", "latency", "timeout", "database", "connection", "network", "vnet",
    "login", "mfa", "storage", "blob", "throttling", "kafka", "consumer", "lag", "pipeline",
    "deployment", "certificate", "expired", "dns", "resolution", "quota", "exceeded", "node",
    "pool", "scaling", "cluster", "ingress",
];

fn generate_corpus(size: usize) -> Vec<Escalation> {
    let mut rng = rand::rng();
    (0..size)
        .map(|i| {
            let title: Vec<&str> = (0..6)
                .map(|_| WORDS[rng.random_range(0..WORDS.len())])
                .collect();
            let description: Vec<&str> = (0..20)
                .map(|_| WORDS[rng.random_range(0..WORDS.len())])
                .collect();
            Escalation::new(
                format!("ESC-{i:05}"),
                title.join(" "),
                description.join(" "),
            )
        })
        .collect()
}

fn benchmark_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tfidf_build");

    for size in [100, 1000].iter() {
        let corpus = generate_corpus(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| {
                let index = TfIdfIndex::from_corpus(black_box(corpus));
                black_box(index);
            });
        });
    }

    group.finish();
}

fn benchmark_rank_similar(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_similar");

    for size in [100, 1000].iter() {
        let corpus = generate_corpus(*size);
        let target_id = corpus[0].id.clone();
        let config = SimilarityConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| {
                let results = rank_similar(black_box(corpus), &target_id, &config).unwrap();
                black_box(results);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_index_build, benchmark_rank_similar);
criterion_main!(benches);
