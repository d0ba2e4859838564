use criterion::measurement::Measurement;
use criterion::{criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion};
use dense_algebra::Matrix;
use ndarray::Array2;
use rand::distr::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

#[derive(Clone)]
pub struct DenseMatrixConfig {
    seed: u64,
    sizes: Vec<usize>,
    expansion_sizes: Vec<usize>,
    measurement_time: u64,
    sample_size: usize,
}

impl Default for DenseMatrixConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sizes: vec![4, 16, 64, 128],
            // Cofactor expansion grows factorially, keep these small
            expansion_sizes: vec![3, 5, 7, 8],
            measurement_time: 5,
            sample_size: 10,
        }
    }
}

fn create_test_matrix(rows: usize, cols: usize, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let value_dist = Uniform::try_from(-1.0..1.0).unwrap();
    let data = Array2::from_shape_simple_fn((rows, cols), || value_dist.sample(&mut rng));
    Matrix::from_array(data).unwrap()
}

fn configure_group<'a, M: Measurement>(
    c: &'a mut Criterion<M>,
    name: &str,
    config: &DenseMatrixConfig,
) -> BenchmarkGroup<'a, M> {
    let mut group = c.benchmark_group(name);
    group.measurement_time(Duration::from_secs(config.measurement_time));
    group.sample_size(config.sample_size);
    group
}

pub fn bench_arithmetic(c: &mut Criterion) {
    let config = DenseMatrixConfig::default();
    let mut group = configure_group(c, "Dense_Arithmetic", &config);

    for &n in config.sizes.iter() {
        let seed = config.seed + n as u64;
        let a = create_test_matrix(n, n, seed);
        let b = create_test_matrix(n, n, seed + 1);

        group.bench_with_input(BenchmarkId::new("multiply", format!("{}x{}", n, n)), &n, |bench, _| {
            bench.iter(|| Matrix::multiply(&a, &b).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("add", format!("{}x{}", n, n)), &n, |bench, _| {
            bench.iter(|| Matrix::add(&a, &b).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("transpose", format!("{}x{}", n, n)), &n, |bench, _| {
            bench.iter(|| a.transpose());
        });
    }
    group.finish();
}

pub fn bench_expansion(c: &mut Criterion) {
    let config = DenseMatrixConfig::default();
    let mut group = configure_group(c, "Dense_Cofactor_Expansion", &config);

    for &n in config.expansion_sizes.iter() {
        let a = create_test_matrix(n, n, config.seed + n as u64);

        // Clone first so the memoized value is not reused between iterations
        group.bench_with_input(BenchmarkId::new("determinant", format!("{}x{}", n, n)), &n, |bench, _| {
            bench.iter(|| Matrix::from_array(a.clone_data()).unwrap().determinant().unwrap());
        });

        group.bench_with_input(BenchmarkId::new("inverse", format!("{}x{}", n, n)), &n, |bench, _| {
            bench.iter(|| Matrix::from_array(a.clone_data()).unwrap().inverse().unwrap());
        });
    }
    group.finish();
}

pub fn bench_rref(c: &mut Criterion) {
    let config = DenseMatrixConfig::default();
    let mut group = configure_group(c, "Dense_RREF", &config);

    for &n in config.sizes.iter() {
        let a = create_test_matrix(n, n + 1, config.seed + n as u64);

        group.bench_with_input(BenchmarkId::new("rref", format!("{}x{}", n, n + 1)), &n, |bench, _| {
            bench.iter(|| Matrix::from_array(a.clone_data()).unwrap().reduced_echelon_form().rank());
        });
    }
    group.finish();
}

criterion_group!(dense_benches, bench_arithmetic, bench_expansion, bench_rref);
criterion_main!(dense_benches);
