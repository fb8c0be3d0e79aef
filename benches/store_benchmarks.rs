//! Performance benchmarks for the employee record store.
//!
//! Covers the read paths that scan the whole collection and the write path
//! that rewrites the data file:
//! - Search with name and department filters
//! - Workforce statistics
//! - Monthly attendance summary for one employee
//! - A single mutation (full file rewrite) at increasing collection sizes
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::fs;

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use tempfile::TempDir;

use employee_records::calendar::is_working_day;
use employee_records::models::{AttendanceRecord, AttendanceStatus, Employee, EmployeeStatus};
use employee_records::store::{RecordStore, SearchFilter};

const DEPARTMENTS: [&str; 5] = ["IT", "HR", "Finance", "Operations", ""];

/// Creates an employee with a month of attendance in March 2024.
fn create_employee(id: u32) -> Employee {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default();
    let attendance = (0..31)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .filter(|day| is_working_day(*day))
        .enumerate()
        .map(|(i, day)| {
            let status = if i % 10 == 0 {
                AttendanceStatus::Absent
            } else {
                AttendanceStatus::Present
            };
            AttendanceRecord::new(day, status)
        })
        .collect();

    Employee {
        id,
        name: format!("Employee {id}"),
        age: 20 + id % 45,
        department: DEPARTMENTS[id as usize % DEPARTMENTS.len()].to_string(),
        position: if id % 3 == 0 { "Manager" } else { "Engineer" }.to_string(),
        email: format!("employee{id}@example.com"),
        phone: String::new(),
        salary: Decimal::from(30_000 + (id % 50) * 1_000),
        join_date: NaiveDate::from_ymd_opt(2010 + (id % 14) as i32, 1 + id % 12, 1)
            .unwrap_or_default(),
        vacation_days: 20,
        status: if id % 7 == 0 {
            EmployeeStatus::OnLeave
        } else {
            EmployeeStatus::Active
        },
        attendance,
    }
}

/// Writes `count` employees to a fresh data file and opens a store on it.
fn create_store(count: u32) -> (TempDir, RecordStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    let employees: Vec<Employee> = (1..=count).map(create_employee).collect();
    fs::write(&path, serde_json::to_string(&employees).unwrap()).unwrap();
    let store = RecordStore::open(&path);
    (dir, store)
}

fn bench_search(c: &mut Criterion) {
    let (_dir, store) = create_store(1000);
    let filter = SearchFilter::new().name("employee 1").department("it");

    let mut group = c.benchmark_group("search");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("name_and_department_1000", |b| {
        b.iter(|| black_box(store.search(black_box(&filter))).len())
    });
    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let (_dir, store) = create_store(1000);
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();

    c.bench_function("statistics_1000", |b| {
        b.iter(|| black_box(store.statistics_on(black_box(today)).unwrap()))
    });
}

fn bench_attendance_summary(c: &mut Criterion) {
    let (_dir, store) = create_store(1000);

    c.bench_function("attendance_summary_month", |b| {
        b.iter(|| {
            store
                .attendance_summary_for_month(black_box(500), 2024, 3)
                .unwrap()
        })
    });
}

fn bench_mutation_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("vacation_add_rewrite");
    // Each iteration rewrites the whole file
    group.sample_size(10);

    for count in [10u32, 100, 1000] {
        let (_dir, mut store) = create_store(count);
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| store.add_vacation_days(1, 1).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_search,
    bench_statistics,
    bench_attendance_summary,
    bench_mutation_scaling
);
criterion_main!(benches);
