// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::aggregation_bench::bench_aggregation;
use criterion::{criterion_group, criterion_main};

mod aggregation_bench;

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
