//! Benchmarks for chatlab parsing and conversion.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench converting -- build`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlab::core::output::to_json;
use chatlab::core::{build_envelope, build_envelope_with};
use chatlab::config::{ExportConfig, Locale};
use chatlab::message::{Contents, MessageBody, SourceMessage, kind, share_kind};
use chatlab::parser::parse_str;

use chrono::{Duration, TimeZone, Utc};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_dump(count: usize) -> String {
    let mut messages = Vec::with_capacity(count);
    for i in 0..count {
        let sender = i % 7;
        let timestamp = 1705314600 + (i as i64 * 60);
        let time = Utc.timestamp_opt(timestamp, 0).unwrap().to_rfc3339();
        let msg = match i % 5 {
            0 => format!(
                r#"{{"sender": "wxid_{sender}", "senderName": "User {sender}", "time": "{time}", "type": 49, "subType": 5, "contents": {{"url": "https://x.test/{i}"}}}}"#
            ),
            1 => format!(
                r#"{{"sender": "wxid_{sender}", "senderName": "User {sender}", "time": "{time}", "type": 3, "contents": {{"md5": "hash{i}"}}}}"#
            ),
            _ => format!(
                r#"{{"sender": "wxid_{sender}", "senderName": "User {sender}", "time": "{time}", "type": 1, "content": "Message number {i}"}}"#
            ),
        };
        messages.push(msg);
    }
    format!("[{}]", messages.join(",\n"))
}

fn generate_messages(count: usize) -> Vec<SourceMessage> {
    let base = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let link = Contents::new().with("url", "https://x.test");
    (0..count)
        .map(|i| {
            let sender = format!("wxid_{}", i % 50);
            let time = base + Duration::seconds(i as i64 * 60);
            let body = match i % 4 {
                0 => MessageBody::classify(kind::SHARE, Some(share_kind::LINK), &link),
                1 => MessageBody::Voice,
                _ => MessageBody::Text,
            };
            SourceMessage::new(sender, format!("User {}", i % 50), time, body)
                .with_content(format!("Message {i}"))
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 1_000, 10_000] {
        let dump = generate_dump(size);
        group.throughput(Throughput::Bytes(dump.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &dump, |b, dump| {
            b.iter(|| parse_str(black_box(dump)).unwrap());
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let zh = ExportConfig::new().with_locale(Locale::Chinese);

    for size in [100, 1_000, 10_000] {
        let messages = generate_messages(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("private", size), &messages, |b, msgs| {
            b.iter(|| build_envelope(black_box(msgs), "wxid_friend", "Friend"));
        });
        group.bench_with_input(BenchmarkId::new("group", size), &messages, |b, msgs| {
            b.iter(|| build_envelope_with(black_box(msgs), "12345@chatroom", "Room", &zh));
        });
    }

    group.finish();
}

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let envelope = build_envelope(&generate_messages(10_000), "12345@chatroom", "Room");
    group.throughput(Throughput::Elements(envelope.messages.len() as u64));

    group.bench_function("json_compact", |b| b.iter(|| to_json(black_box(&envelope), false).unwrap()));
    group.bench_function("json_pretty", |b| b.iter(|| to_json(black_box(&envelope), true).unwrap()));

    group.finish();
}

criterion_group!(benches, bench_parse, bench_build, bench_output);
criterion_main!(benches);
