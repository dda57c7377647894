// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use futures::StreamExt;
use reminders_runtime::InlineDispatcher;
use reminders_service::{DefaultReminderService, ReminderService};
use reminders_test_utils::ScriptedDataSource;
use std::hint::black_box;
use std::sync::{mpsc, Arc};
use tokio::runtime::Runtime;

pub fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let rt = Runtime::new().unwrap();

    // Fan-out widths to test scalability
    let fan_outs = [1usize, 3, 16, 64];

    for &fan_out in &fan_outs {
        group.throughput(Throughput::Elements(fan_out as u64));

        let service = DefaultReminderService::builder(Arc::new(ScriptedDataSource::canonical()))
            .fan_out(fan_out)
            .build()
            .unwrap();

        let id = BenchmarkId::new("async", fan_out);
        group.bench_with_input(id, &fan_out, |bencher, _| {
            bencher.iter(|| {
                let result = rt.block_on(service.fetch_reminders_async());
                black_box(result);
            });
        });

        let id = BenchmarkId::new("stream", fan_out);
        group.bench_with_input(id, &fan_out, |bencher, _| {
            bencher.iter(|| {
                let result = rt.block_on(async { service.reminders_stream().next().await });
                black_box(result);
            });
        });

        // Inline workers: the callback source still completes on its own thread
        let handler_service =
            DefaultReminderService::builder(Arc::new(ScriptedDataSource::canonical()))
                .fan_out(fan_out)
                .workers(InlineDispatcher)
                .build()
                .unwrap();

        let id = BenchmarkId::new("handler", fan_out);
        group.bench_with_input(id, &fan_out, |bencher, _| {
            bencher.iter(|| {
                let (tx, rx) = mpsc::channel();
                handler_service.fetch_reminders(Box::new(move |result| {
                    let _ = tx.send(result);
                }));
                black_box(rx.recv().unwrap());
            });
        });
    }

    group.finish();
}
