use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gasto_core::core::{RecordStore, SummaryService, STORAGE_KEY};
use gasto_core::domain::{Category, ExpenseKind, ExpenseRecord, PaymentMethod};
use gasto_core::storage::{JsonFileStore, KeyValueStore};
use tempfile::tempdir;

fn build_sample_records(count: usize) -> Vec<ExpenseRecord> {
    let kinds = ExpenseKind::ALL;
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    (0..count)
        .map(|idx| {
            let kind = kinds[idx % kinds.len()];
            let categories = kind.categories();
            let date = start_date + Duration::days((idx % 365) as i64);
            ExpenseRecord {
                id: idx as i64,
                date: date.format("%Y-%m-%d").to_string(),
                amount: format!("{:.2}", 5.0 + (idx % 100) as f64),
                description: (idx % 3 == 0).then(|| format!("gasto {idx}")),
                kind,
                category: categories[idx % categories.len()],
                payment_method: if idx % 2 == 0 {
                    PaymentMethod::Cash
                } else {
                    PaymentMethod::Credit
                },
            }
        })
        .collect()
}

fn bench_store_io(c: &mut Criterion) {
    let records = build_sample_records(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let backend = JsonFileStore::new(Some(dir.path().to_path_buf())).expect("backend");
    let blob = serde_json::to_string_pretty(&records).expect("serialize");

    c.bench_function("records_save_10k", |b| {
        b.iter(|| {
            backend.set(STORAGE_KEY, &blob).expect("save records");
        })
    });

    backend.set(STORAGE_KEY, &blob).expect("seed");

    c.bench_function("records_load_10k", |b| {
        b.iter(|| {
            let store = RecordStore::open(Box::new(backend.clone()));
            black_box(store.len());
        })
    });
}

fn bench_summaries(c: &mut Criterion) {
    let records = build_sample_records(black_box(10_000));
    let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    c.bench_function("grand_total_10k", |b| {
        b.iter(|| {
            black_box(SummaryService::grand_total(&records));
        })
    });

    c.bench_function("totals_by_category_10k", |b| {
        b.iter(|| {
            black_box(SummaryService::totals_by_category(&records));
        })
    });

    c.bench_function("monthly_total_10k", |b| {
        b.iter(|| {
            black_box(SummaryService::monthly_total_by_kind(
                &records,
                ExpenseKind::Personal,
                reference,
            ));
        })
    });
}

criterion_group!(benches, bench_store_io, bench_summaries);
criterion_main!(benches);
