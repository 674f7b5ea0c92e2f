use criterion::{criterion_group, criterion_main, Criterion};
use criterion::BenchmarkId;
use criterion::Throughput;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ram_engine::engine::{slots, RamController};
use ram_engine::progress::NullProgress;

fn controller_with(count: usize) -> RamController {
    let mut rng = StdRng::seed_from_u64(0);
    let mut controller = RamController::new();
    for module in slots::provision(count, &mut rng) {
        controller.add_module(module);
    }
    controller
}

fn benchmark_report_render(c: &mut Criterion) {
    let mut controller = controller_with(100);
    controller.install_all(&mut NullProgress);

    c.bench_function("report render", |b| {
        b.iter(|| controller.report().to_string());
    });
}

fn benchmark_install_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("install_all");

    for size in [10usize, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut controller = controller_with(size);
                controller.install_all(&mut NullProgress);
                controller
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_report_render, benchmark_install_all);
criterion_main!(benches);
