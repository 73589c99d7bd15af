// std imports
use std::time::Duration;

// third-party imports
use criterion::{Criterion, criterion_main};

const ND: &str = ":"; // name delimiter
const GROUP: &str = "lexstream";

mod engine;
mod report;

criterion_main!(engine::benches, report::benches);

fn group_name(name: &str) -> String {
    format!("{}{}{}", GROUP, ND, name)
}

fn configure<'a>(c: &'a mut Criterion, name: &str) -> criterion::BenchmarkGroup<'a, criterion::measurement::WallTime> {
    let mut group = c.benchmark_group(group_name(name));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group
}
