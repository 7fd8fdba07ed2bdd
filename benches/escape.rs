#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num;

use criterion::Criterion;
use num::Complex;

use mandelbrot::escape::escape_count;
use mandelbrot::{Renderer, Viewport};

fn bench_escape_kernel(c: &mut Criterion) {
    c.bench_function("interior point runs to the cap", |b| {
        b.iter(|| escape_count(Complex::new(0.0, 0.0), 200))
    });
    c.bench_function("near-boundary point escapes early", |b| {
        b.iter(|| escape_count(Complex::new(0.5, 0.5), 200))
    });
}

fn bench_small_frame(c: &mut Criterion) {
    let viewport = Viewport::new(64, 64, -2.84, 2.04, 200, Complex::new(0.0, 0.0)).unwrap();
    let renderer = Renderer::new(viewport);
    c.bench_function("64x64 frame on four workers", move |b| {
        b.iter(|| renderer.render(4))
    });
}

criterion_group!(benches, bench_escape_kernel, bench_small_frame);
criterion_main!(benches);
