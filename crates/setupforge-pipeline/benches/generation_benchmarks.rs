//! Benchmarks for setup generation
//!
//! Run with: cargo bench --bench generation_benchmarks

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use setupforge_model::{
    Conditions, GripLevel, SessionType, Style, TrackCharacteristics, TrackType, ValidatedRequest,
    VehicleClass, Weather,
};
use setupforge_pipeline::{SetupGenerator, normalize, resolve};
use std::hint::black_box;

fn full_request(class: VehicleClass, track_type: TrackType) -> ValidatedRequest {
    ValidatedRequest::new(class, track_type)
        .with_style(Style::Aggressive)
        .with_session(SessionType::Qualifying)
        .with_characteristics(TrackCharacteristics {
            length_km: Some(7.0),
            elevation_change_m: Some(104.0),
            grip_level: Some(GripLevel::Low),
            ..TrackCharacteristics::default()
        })
        .with_conditions(Conditions {
            weather: Some(Weather::Rain),
            temperature_c: Some(12.0),
        })
}

fn bench_normalize(c: &mut Criterion) {
    let setup = resolve(VehicleClass::Gt3, TrackType::Road).setup;
    c.bench_function("normalize_gt3_road", |b| {
        b.iter(|| normalize(black_box(setup.clone())));
    });
}

fn bench_generate(c: &mut Criterion) {
    let generator = SetupGenerator::new();
    let mut group = c.benchmark_group("generate");
    for (class, track_type) in [
        (VehicleClass::Gt3, TrackType::Road),
        (VehicleClass::Nascar, TrackType::Oval),
        (VehicleClass::Formula, TrackType::Road),
    ] {
        let plain = ValidatedRequest::new(class, track_type);
        group.bench_with_input(
            BenchmarkId::new("plain", format!("{class}/{track_type}")),
            &plain,
            |b, request| b.iter(|| generator.generate(black_box(request))),
        );
        let full = full_request(class, track_type);
        group.bench_with_input(
            BenchmarkId::new("all_rules", format!("{class}/{track_type}")),
            &full,
            |b, request| b.iter(|| generator.generate(black_box(request))),
        );
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let generator = SetupGenerator::new();
    let requests: Vec<_> = (0..256)
        .map(|i| {
            let class = VehicleClass::ALL
                .get(i % VehicleClass::ALL.len())
                .copied()
                .unwrap_or(VehicleClass::Gt3);
            full_request(class, TrackType::Road)
        })
        .collect();
    c.bench_function("generate_batch_256", |b| {
        b.iter(|| generator.generate_batch(black_box(&requests)));
    });
}

criterion_group!(benches, bench_normalize, bench_generate, bench_batch);
criterion_main!(benches);
