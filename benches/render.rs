use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use image::RgbaImage;
use prettyramp::gradient::{
    must, ConicGradient, Gradient, GradientOptions, LinearGradient, RadialGradient,
};
use prettyramp::{Color, HueInterpolation};

fn options() -> GradientOptions {
    GradientOptions::new()
        .with_color_stop(Color::from_24bit(255, 94, 98), 0.0)
        .with_color_stop(Color::from_24bit(255, 195, 113), 0.4)
        .with_color_stop(Color::from_24bit(36, 123, 160), 1.0)
        .in_oklch(HueInterpolation::Shorter)
}

pub fn run_benchmarks(c: &mut Criterion) {
    let linear = must(LinearGradient::new(options().with_angle(30.0)));
    let radial = must(RadialGradient::new(options()));
    let conic = must(ConicGradient::new(options()));

    let mut group = c.benchmark_group("gradient");
    group.sample_size(20);

    group.bench_function("colors-1000", |b| b.iter(|| radial.colors(1_000)));

    group.bench_function("linear-256", |b| {
        b.iter_batched(
            || RgbaImage::new(256, 256),
            |mut image| linear.render(&mut image),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("radial-256", |b| {
        b.iter_batched(
            || RgbaImage::new(256, 256),
            |mut image| radial.render(&mut image),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("conic-256", |b| {
        b.iter_batched(
            || RgbaImage::new(256, 256),
            |mut image| conic.render(&mut image),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
