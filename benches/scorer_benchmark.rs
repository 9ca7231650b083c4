//! Batch scoring benchmark
//!
//! The velocity check is pairwise, so scoring is quadratic in batch size;
//! this tracks how that plays out at realistic history lengths.

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use transaction_risk_scorer::{
    Location, RiskScorer, Transaction, TransactionStatus, UserProfile,
};

fn synthetic_batch(size: usize) -> Vec<Transaction> {
    let base = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();
    (0..size)
        .map(|i| Transaction {
            id: format!("TXN-{:06}", i),
            amount: 100.0 + (i % 37) as f64 * 125.0,
            timestamp: base - Duration::minutes(90 * i as i64),
            transaction_type: if i % 3 == 0 { "CREDIT" } else { "DEBIT" }.to_string(),
            status: if i % 11 == 0 {
                TransactionStatus::Pending
            } else {
                TransactionStatus::Completed
            },
            location: Some(Location::Raw(
                ["Mumbai", "Delhi", "Pune", "Chennai"][i % 4].to_string(),
            )),
            device: Some(format!("device-{}", i % 5)),
            ip_address: None,
            ip_country: Some("IN".to_string()),
            recipient_id: Some(format!("ACC-{}", i % 20)),
            description: None,
        })
        .collect()
}

fn bench_score_batch(c: &mut Criterion) {
    let scorer = RiskScorer::new();
    let profile = UserProfile {
        country: Some("IN".to_string()),
        balance: Some(250_000.0),
        created_at: Some(Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap()),
    };
    let now = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();

    let mut group = c.benchmark_group("score_batch");
    for size in [50usize, 200, 1000] {
        let batch = synthetic_batch(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| {
                scorer
                    .score_batch(black_box(batch), black_box(&profile), now)
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_score_batch);
criterion_main!(benches);
