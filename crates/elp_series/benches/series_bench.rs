use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elp_series::{main_problem_sin, planetary_perturbation_first, precession_perturbation};

/// Deterministic synthetic tables sized like the published ELP files
/// (the main longitude file carries 1023 terms).
fn main_problem_tables(n: usize) -> (Vec<[i64; 4]>, Vec<[f64; 7]>) {
    let mut multipliers = Vec::with_capacity(n);
    let mut coefficients = Vec::with_capacity(n);
    for k in 0..n {
        let k = k as i64;
        multipliers.push([k % 5 - 2, k % 3 - 1, k % 7 - 3, k % 2]);
        coefficients.push([1000.0 / (k + 1) as f64, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }
    (multipliers, coefficients)
}

fn planetary_tables(n: usize) -> (Vec<[i64; 11]>, Vec<[f64; 3]>) {
    let mut multipliers = Vec::with_capacity(n);
    let mut coefficients = Vec::with_capacity(n);
    for k in 0..n {
        let k = k as i64;
        let mut row = [0i64; 11];
        for (j, slot) in row.iter_mut().enumerate() {
            *slot = (k + j as i64) % 5 - 2;
        }
        multipliers.push(row);
        coefficients.push([0.001 * k as f64, 10.0 / (k + 1) as f64, 0.0]);
    }
    (multipliers, coefficients)
}

fn main_problem_bench(c: &mut Criterion) {
    let delaunay = [0.5, 1.0, 1.5, 2.0];
    let (multipliers, coefficients) = main_problem_tables(1023);

    let mut group = c.benchmark_group("main_problem");
    group.bench_function("sin_1023_terms", |b| {
        b.iter(|| {
            main_problem_sin(
                black_box(&delaunay),
                black_box(&multipliers),
                black_box(&coefficients),
            )
        })
    });
    group.finish();
}

fn perturbation_bench(c: &mut Criterion) {
    let delaunay = [0.5, 1.0, 1.5, 2.0];
    let planetary = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
    let (b_mult, b_coef): (Vec<[i64; 5]>, Vec<[f64; 3]>) = (0..366)
        .map(|k| {
            let k = k as i64;
            (
                [k % 3 - 1, k % 5 - 2, k % 2, k % 7 - 3, k % 3],
                [0.01 * k as f64, 5.0 / (k + 1) as f64, 0.0],
            )
        })
        .unzip();
    let (c_mult, c_coef) = planetary_tables(1100);

    let mut group = c.benchmark_group("perturbations");
    group.bench_function("precession_366_terms", |b| {
        b.iter(|| {
            precession_perturbation(
                black_box(0.024),
                black_box(&delaunay),
                black_box(&b_mult),
                black_box(&b_coef),
            )
        })
    });
    group.bench_function("planetary_first_1100_terms", |b| {
        b.iter(|| {
            planetary_perturbation_first(
                black_box(&planetary),
                black_box(&delaunay),
                black_box(&c_mult),
                black_box(&c_coef),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, main_problem_bench, perturbation_bench);
criterion_main!(benches);
