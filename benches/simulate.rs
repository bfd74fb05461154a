use criterion::{black_box, criterion_group, criterion_main, Criterion};
use survivor_sim::{
    simulate, survival_rate, Build, Difficulty, EnemyCatalog, EnemyVariant, StudyRng,
};

fn bench_simulate(c: &mut Criterion) {
    let catalog = EnemyCatalog::standard();
    let zombie = catalog.get_unchecked(EnemyVariant::Zombie);

    let mut group = c.benchmark_group("simulate");
    for difficulty in [Difficulty::Easy, Difficulty::Impossible] {
        group.bench_function(format!("fight_{}", difficulty.label()), |b| {
            let mut rng = StudyRng::new(42);
            b.iter(|| {
                simulate(
                    &mut rng,
                    black_box(12.0),
                    black_box(5.0),
                    zombie,
                    difficulty,
                )
            });
        });
    }
    group.finish();
}

fn bench_survival_rate(c: &mut Criterion) {
    let catalog = EnemyCatalog::standard();
    let slime = catalog.get_unchecked(EnemyVariant::BigSlime);
    let build = Build {
        health: 12,
        damage: 5,
        damage_dealer: true,
        evolution: true,
    };

    c.bench_function("survival_rate_200_trials", |b| {
        let mut rng = StudyRng::new(42);
        b.iter(|| survival_rate(&mut rng, &build, slime, Difficulty::Medium, 200, true));
    });
}

criterion_group!(benches, bench_simulate, bench_survival_rate);
criterion_main!(benches);
