//! Filtering and sorting throughput over a synthetic catalog.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nomad_core::prelude::*;
use std::hint::black_box;

const PROVINCES: [&str; 6] = [
    "서울특별시",
    "경기도",
    "강원도",
    "부산광역시",
    "전라북도",
    "제주특별자치도",
];

const COSTS: [&str; 5] = ["1.4~1.9M", "1.8~2.5M", "2.2~3.0M", "2.5~3.5M", "문의"];

fn synthetic_cities(n: usize) -> Vec<City> {
    (0..n)
        .map(|i| City {
            id: format!("city-{i}"),
            name: format!("도시 {i}"),
            province: PROVINCES[i % PROVINCES.len()].to_string(),
            emoji: String::new(),
            overall_score: (i % 50) as f64 / 5.0,
            cost_per_month: COSTS[i % COSTS.len()].to_string(),
            internet_speed: (i % 1000) as f64,
            nomads_count: (i % 300) as u32,
            cafe_rating: 4.0,
            work_score: 7.0,
            quality_score: (i % 10) as f64,
            reviews_count: (i % 90) as u32,
            likes_count: None,
            dislikes_count: None,
            description: None,
            image_url: None,
        })
        .collect()
}

fn bench_apply_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_filters");
    let params = query::decode_str("regions=seoul,jeju&costMin=1&costMax=3&speed=200&sort=cheap");

    for size in [100usize, 1_000, 10_000] {
        let cities = synthetic_cities(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &cities, |b, cities| {
            b.iter(|| apply_filters(black_box(cities), black_box(&params)))
        });
    }
    group.finish();
}

fn bench_sort_only(c: &mut Criterion) {
    let cities = synthetic_cities(10_000);
    let mut group = c.benchmark_group("sort_only");
    for key in SortKey::ALL {
        let params = FilterParams::new().with_sort(key);
        group.bench_with_input(BenchmarkId::from_parameter(key), &params, |b, params| {
            b.iter(|| apply_filters(black_box(&cities), black_box(params)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_query", |b| {
        b.iter(|| {
            query::decode_str(black_box(
                "search=%EA%B0%95%EB%A6%89&regions=seoul,gangwon&costMin=2&costMax=4&speed=100&sort=fast",
            ))
        })
    });
}

criterion_group!(benches, bench_apply_filters, bench_sort_only, bench_decode);
criterion_main!(benches);
