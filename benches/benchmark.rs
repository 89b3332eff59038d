use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gdal::raster::Buffer;
use ndvi_calc::processing::compute_ndvi;

/// Benchmark the core NDVI calculation in isolation
fn benchmark_ndvi_calculation(c: &mut Criterion) {
    // Create synthetic test data
    let size = (1024, 1024);
    let mut red_data = vec![0.0f32; size.0 * size.1];
    let mut nir_data = vec![0.0f32; size.0 * size.1];

    // Fill with some test values (simulating RED and NIR bands)
    for i in 0..red_data.len() {
        red_data[i] = 2500.0 + (i % 50) as f32;
        nir_data[i] = 5000.0 + (i % 100) as f32;
    }

    let red = Buffer::new(size, red_data);
    let nir = Buffer::new(size, nir_data);

    c.bench_function("ndvi_core_calculation", |b| {
        b.iter(|| compute_ndvi(black_box(&red), black_box(&nir)))
    });
}

/// Same size, but half the pixels hit the degenerate-input mask
fn benchmark_ndvi_degenerate_heavy(c: &mut Criterion) {
    let size = (1024, 1024);
    let mut red_data = vec![0.0f32; size.0 * size.1];
    let mut nir_data = vec![0.0f32; size.0 * size.1];

    for i in 0..red_data.len() {
        if i % 2 == 0 {
            red_data[i] = 2500.0;
            nir_data[i] = 5000.0;
        }
    }

    let red = Buffer::new(size, red_data);
    let nir = Buffer::new(size, nir_data);

    c.bench_function("ndvi_degenerate_heavy", |b| {
        b.iter(|| compute_ndvi(black_box(&red), black_box(&nir)))
    });
}

criterion_group!(
    benches,
    benchmark_ndvi_calculation,
    benchmark_ndvi_degenerate_heavy
);
criterion_main!(benches);
