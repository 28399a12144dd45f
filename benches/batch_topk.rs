use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use knn_kernels::batch_topk;
use rand::Rng;

fn rand_vec(n: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen::<f32>() * 4.0 - 2.0).collect()
}

// ============================================================
// Batch top-k: KNN distance-matrix shapes
// ============================================================
fn bench_batch_topk(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_topk");
    group.sample_size(20);

    // (B, N, K): point-cloud KNN sizes, k=20 neighbors
    for &(b, n, k) in &[
        (1, 256, 20),
        (4, 512, 20),
        (8, 1024, 20),
    ] {
        let input = rand_vec(b * n * n);
        let mut indices = vec![0u32; b * n * k];
        let mut output = vec![0.0f32; b * n * n];
        group.throughput(Throughput::Elements((b * n * n) as u64));
        group.bench_function(BenchmarkId::new("topk", format!("{b}x{n}x{n}_k{k}")), |bench| {
            bench.iter(|| {
                batch_topk(
                    black_box(&input),
                    black_box(&mut indices),
                    black_box(&mut output),
                    b,
                    n,
                    n,
                    k,
                );
            })
        });
    }
    group.finish();
}

// ============================================================
// k sweep at fixed shape: cost scales with k passes
// ============================================================
fn bench_k_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_topk_k_sweep");
    group.sample_size(20);

    let (b, n) = (2, 512);
    let input = rand_vec(b * n * n);
    let mut output = vec![0.0f32; b * n * n];

    for &k in &[1usize, 8, 32, 128] {
        let mut indices = vec![0u32; b * n * k];
        group.bench_function(BenchmarkId::new("k", k), |bench| {
            bench.iter(|| {
                batch_topk(
                    black_box(&input),
                    black_box(&mut indices),
                    black_box(&mut output),
                    b,
                    n,
                    n,
                    k,
                );
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_batch_topk, bench_k_sweep);
criterion_main!(benches);
