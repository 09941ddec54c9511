use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use watchlist::ListController;

fn populated(count: usize) -> ListController {
    let mut controller = ListController::new();
    for n in 0..count {
        controller.set_draft_title(format!("Movie {}", n));
        controller.add_record();
    }
    controller
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_record");
    for count in [10, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(populated(count)));
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_last_record");
    for count in [10, 1_000] {
        let mut controller = populated(count);
        let id = controller.records()[count - 1].id();
        group.bench_with_input(BenchmarkId::new("rating", count), &id, |b, &id| {
            let mut value = 1;
            b.iter(|| {
                value = value % 5 + 1;
                controller.set_rating(black_box(id), value).unwrap()
            });
        });
        group.bench_with_input(BenchmarkId::new("note", count), &id, |b, &id| {
            b.iter(|| controller.set_note(black_box(id), "rewatch"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_update);
criterion_main!(benches);
