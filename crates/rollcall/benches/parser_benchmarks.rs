//! Parser performance benchmarks.
//!
//! Measures parsing performance across different export sizes and formats.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rollcall::Parser;

/// Generate a synthetic form export with the specified number of rows and questions.
fn generate_export(rows: usize, questions: usize, delimiter: char) -> String {
    let mut data = String::new();

    data.push_str("Timestamp");
    data.push(delimiter);
    data.push_str("Student Name");
    for q in 0..questions {
        data.push(delimiter);
        data.push_str(&format!("Question {}", q + 1));
    }
    data.push('\n');

    for row in 0..rows {
        data.push_str(&format!("2024/{:02}/{:02} 10:00:00", (row % 12) + 1, (row % 28) + 1));
        data.push(delimiter);
        data.push_str(&format!("Student {:05}", row));
        for q in 0..questions {
            data.push(delimiter);
            // Roughly one blank answer in seven
            if (row + q) % 7 != 0 {
                data.push_str(&format!("answer_{}", (row * q) % 13));
            }
        }
        data.push('\n');
    }

    data
}

/// Benchmark parsing CSV exports of various sizes.
fn bench_parse_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_csv");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_export(*rows, 10, ',');
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse_bytes(data.as_bytes(), "bench.csv").unwrap()))
        });
    }

    group.finish();
}

/// Benchmark TSV parsing, which exercises delimiter detection differently.
fn bench_parse_tsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_tsv");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_export(*rows, 10, '\t');
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse_bytes(data.as_bytes(), "bench.tsv").unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_csv, bench_parse_tsv);
criterion_main!(benches);
