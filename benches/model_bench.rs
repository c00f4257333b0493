use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nonogram_maker::NonogramModel;

fn striped(rows: usize, cols: usize) -> NonogramModel {
    let mut m = NonogramModel::new(rows, cols).unwrap();
    for r in 0..rows {
        for c in 0..cols {
            m.set_cell(r, c, (r * 7 + c * 3) % 5 < 2).unwrap();
        }
    }
    m
}

fn bench_serialize(c: &mut Criterion) {
    let model = striped(100, 100);
    c.bench_function("serialize_100x100", |b| {
        b.iter(|| black_box(model.serialize()))
    });
}

fn bench_parse(c: &mut Criterion) {
    let text = striped(100, 100).serialize();
    c.bench_function("parse_100x100", |b| {
        b.iter(|| NonogramModel::parse(black_box(&text)).unwrap())
    });
}

fn bench_clues(c: &mut Criterion) {
    let model = striped(100, 100);
    c.bench_function("clues_100x100", |b| b.iter(|| black_box(model.clues())));
}

criterion_group!(benches, bench_serialize, bench_parse, bench_clues);
criterion_main!(benches);
