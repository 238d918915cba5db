use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hand_features::{Landmark, normalize_landmarks, process_landmarks, to_point_matrix};

fn hand() -> Vec<Landmark> {
    (0..21)
        .map(|i| {
            let t = i as f64 * 0.3;
            Landmark::new(i, 0.4 + 0.1 * t.cos(), 0.6 + 0.1 * t.sin(), 0.01 * t)
        })
        .collect()
}

fn bench_process_landmarks(c: &mut Criterion) {
    let landmarks = hand();
    c.bench_function("process_landmarks", |b| {
        b.iter(|| process_landmarks(black_box(&landmarks), None))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let points = to_point_matrix(&hand());
    c.bench_function("normalize_landmarks", |b| {
        b.iter(|| normalize_landmarks(black_box(&points), None))
    });
}

criterion_group!(benches, bench_process_landmarks, bench_normalize);
criterion_main!(benches);
