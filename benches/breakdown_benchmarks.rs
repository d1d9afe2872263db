//! Performance benchmarks for the salary breakdown components.
//!
//! Covers the hot paths behind every render and every button press:
//! - Number formatting
//! - Income and tax row derivation
//! - Publishing over the message bus
//! - The HTTP submit path
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use async_trait::async_trait;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use salary_breakdown::api::{AppState, create_router};
use salary_breakdown::bus::{MessageBus, SALARY_DATA_CHANNEL};
use salary_breakdown::calculation::{format_number, income_rows, tax_rows};
use salary_breakdown::config::ConfigLoader;
use salary_breakdown::models::{PayPeriod, PeriodDivisors, SalaryBreakdown, SalaryInputMessage};
use salary_breakdown::service::{
    CalculationRequest, CalculationResponse, CalculationService, ServiceFailure,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

struct InstantService;

#[async_trait]
impl CalculationService for InstantService {
    async fn calculate_salary(
        &self,
        request: CalculationRequest,
    ) -> Result<CalculationResponse, ServiceFailure> {
        Ok(CalculationResponse {
            annual_income: request.input_salary,
            annual_taxable_income: request.input_salary,
            annual_super: Decimal::ZERO,
            annual_taxes: Decimal::ZERO,
            annual_income_tax: Decimal::ZERO,
            annual_med_levy: Decimal::ZERO,
            annual_lio: Decimal::ZERO,
        })
    }
}

fn sample_breakdown() -> SalaryBreakdown {
    SalaryBreakdown {
        take_home: Decimal::new(120_000, 0),
        taxable_income: Decimal::new(150_000, 0),
        superannuation: Decimal::new(16_500, 0),
        total_taxes: Decimal::new(30_000, 0),
        income_tax: Decimal::new(27_000, 0),
        medicare_levy: Decimal::new(3_000, 0),
        low_income_offset: Decimal::new(700, 0),
    }
}

/// Benchmark: Formatting values of increasing magnitude.
fn bench_format_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");

    for value in [Decimal::new(5, 1), Decimal::new(230_769_231, 5), Decimal::new(i64::MAX, 2)] {
        group.bench_with_input(BenchmarkId::from_parameter(value), &value, |b, value| {
            b.iter(|| black_box(format_number(*value)))
        });
    }

    group.finish();
}

/// Benchmark: Deriving both tables from annual totals.
fn bench_row_derivation(c: &mut Criterion) {
    let breakdown = sample_breakdown();
    let divisors = ConfigLoader::builtin().divisors();

    let mut group = c.benchmark_group("rows");
    group.bench_function("with_divisors", |b| {
        b.iter(|| {
            let income = income_rows(black_box(&breakdown), Some(&divisors));
            let tax = tax_rows(black_box(&breakdown), Some(&divisors));
            black_box((income, tax))
        })
    });
    group.bench_function("pending", |b| {
        b.iter(|| {
            let income = income_rows(black_box(&breakdown), None::<&PeriodDivisors>);
            black_box(income)
        })
    });
    group.finish();
}

/// Benchmark: Synchronous fan-out to a growing number of subscribers.
fn bench_bus_publish(c: &mut Criterion) {
    let message = SalaryInputMessage {
        salary: Decimal::new(85_000, 0),
        pay_period: PayPeriod::Annually,
        super_rate: Decimal::new(11, 0),
        include_super: false,
        is_med_exempt: false,
    };

    let mut group = c.benchmark_group("bus_publish");
    for subscribers in [1usize, 4, 16] {
        let bus = MessageBus::new();
        let _subscriptions: Vec<_> = (0..subscribers)
            .map(|_| {
                bus.subscribe(SALARY_DATA_CHANNEL, |message: &SalaryInputMessage| {
                    black_box(message.salary);
                })
            })
            .collect();

        group.throughput(Throughput::Elements(subscribers as u64));
        group.bench_with_input(
            BenchmarkId::new("subscribers", subscribers),
            &subscribers,
            |b, _| b.iter(|| black_box(bus.publish(SALARY_DATA_CHANNEL, &message))),
        );
    }
    group.finish();
}

/// Benchmark: POST /salary through the router.
fn bench_submit(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = {
        let _guard = rt.enter();
        AppState::with_configured_divisors(&ConfigLoader::builtin(), Arc::new(InstantService))
    };
    let router = create_router(state);
    let body = serde_json::json!({ "salary": "85000", "super_rate": "11" }).to_string();

    c.bench_function("submit_salary", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salary")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_format_number,
    bench_row_derivation,
    bench_bus_publish,
    bench_submit,
);
criterion_main!(benches);
