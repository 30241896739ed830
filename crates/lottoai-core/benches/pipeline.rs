use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lottoai_core::{Game, GenerationRequest, NumerologyProfile, generate, seed};

fn request(game: Game) -> GenerationRequest {
    let birth = NaiveDate::from_ymd_opt(1980, 5, 12).expect("valid date");
    let reference = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    GenerationRequest::new("Mario Rossi", birth, reference, game).expect("valid request")
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for game in Game::ALL {
        let req = request(game);
        group.bench_with_input(BenchmarkId::new("generate", game), &req, |b, req| {
            b.iter(|| black_box(generate(req)))
        });
    }

    let key = request(Game::Lotto).canonical_key();
    group.bench_function("seed_for", |b| b.iter(|| black_box(seed::seed_for(&key))));

    let req = request(Game::Lotto);
    group.bench_function("numerology", |b| {
        b.iter(|| {
            black_box(NumerologyProfile::compute(
                &req.name,
                req.birth_date,
                req.reference_date,
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
