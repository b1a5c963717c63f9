use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lineup_core::{assign, FormationKind, PlayerSuitability, PositionCode};

/// 30-player squad with spread-out, deterministic suitability tables.
fn squad() -> Vec<PlayerSuitability> {
    let labels = [
        PositionCode::CB,
        PositionCode::LB,
        PositionCode::RB,
        PositionCode::CDM,
        PositionCode::CM,
        PositionCode::CAM,
        PositionCode::LM,
        PositionCode::RM,
        PositionCode::LW,
        PositionCode::RW,
        PositionCode::CF,
        PositionCode::ST,
    ];
    (0..30)
        .map(|i| {
            let raw: Vec<f64> =
                (0..labels.len()).map(|j| (((i * 7 + j * 13) % 17) as f64 + 1.0)).collect();
            let total: f64 = raw.iter().sum();
            PlayerSuitability::from_pairs(
                format!("p{i}"),
                labels.iter().copied().zip(raw.into_iter().map(|r| r / total)),
            )
        })
        .collect()
}

fn bench_assign(c: &mut Criterion) {
    let players = squad();

    let mut group = c.benchmark_group("assign");
    for kind in [FormationKind::F433, FormationKind::F352] {
        group.bench_function(kind.code(), |b| {
            b.iter(|| assign(black_box(kind.code()), black_box(&players)))
        });
    }
    group.bench_function("4-3-3/8 players", |b| {
        b.iter(|| assign(black_box("4-3-3"), black_box(&players[..8])))
    });
    group.finish();
}

criterion_group!(benches, bench_assign);
criterion_main!(benches);
