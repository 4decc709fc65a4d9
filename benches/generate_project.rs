use cmake_projectgen::generator::{ProjectEmitter, ProjectPlan};
use cmake_projectgen::params::ParameterSet;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn params(root: &std::path::Path, targets: i64) -> ParameterSet {
    ParameterSet::builder().targets(targets).percent_unique(15).output_root(root).build().expect("params")
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_project");
    let dir = tempfile::tempdir().expect("tempdir");

    for parallel in [false, true] {
        let label = if parallel { "parallel" } else { "sequential" };
        let p = params(&dir.path().join(label), 500);
        group.bench_function(BenchmarkId::new("generate", label), |b| {
            b.iter(|| {
                let summary = ProjectEmitter::new(&p).parallel(parallel).generate().expect("generate");
                black_box(summary.target_dirs.len())
            })
        });
    }

    let p = params(dir.path(), 100_000);
    group.bench_function("plan_100k", |b| b.iter(|| black_box(ProjectPlan::compute(black_box(&p)))));

    group.finish();
}

criterion_group!(name = benches; config = Criterion::default().sample_size(10); targets = bench_generate);
criterion_main!(benches);
