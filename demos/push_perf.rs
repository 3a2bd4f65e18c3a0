//! Push latency table
//!
//! Times batches of `push` calls (followed by `dispose`) for every
//! combination of heap kind, insertion order and volume, and prints one row
//! per combination.
//!
//! ## Running
//!
//! ```bash
//! cargo run --release --example push_perf
//!
//! # Stop at 100,000 elements
//! PUSH_PERF_MAX=100000 cargo run --release --example push_perf
//!
//! # Capacity changes are logged at trace level
//! RUST_LOG=pqheap=trace PUSH_PERF_MAX=1000 cargo run --example push_perf
//! ```

use std::time::Instant;

use pqheap::{BinaryHeap, DefaultComparator, HeapKind, Value, DEFAULT_CAPACITY};

const COUNTS: [usize; 6] = [100, 1_000, 10_000, 100_000, 1_000_000, 10_000_000];

/// Pushes `count` values and disposes the heap, returning microseconds elapsed
fn run(kind: HeapKind, reverse: bool, count: usize) -> u128 {
    let start = Instant::now();

    let mut heap = BinaryHeap::new(kind, DEFAULT_CAPACITY, DefaultComparator);
    for i in 0..count {
        let tag = (if reverse { count - i - 1 } else { i }) as i32;
        heap.push(Value::new("term", tag, tag));
    }
    heap.dispose();

    start.elapsed().as_micros()
}

fn max_count() -> usize {
    match std::env::var("PUSH_PERF_MAX") {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("ignoring PUSH_PERF_MAX={:?}: {}", raw, e);
            usize::MAX
        }),
        Err(_) => usize::MAX,
    }
}

fn main() {
    env_logger::init();
    let limit = max_count();

    println!(
        "{:<8} {:<8} {:<8} {:<13} {:<10}",
        "HEAP", "ORDER", "COUNT", "TOTAL LAT(us)", "AVG LAT(us/1K OPS)"
    );
    for kind in [HeapKind::Min, HeapKind::Max] {
        for reverse in [true, false] {
            for count in COUNTS.into_iter().filter(|&c| c <= limit) {
                let total = run(kind, reverse, count);
                println!(
                    "{:<8} {:<8} {:>8} {:>12}  {:>10}",
                    kind.to_string(),
                    if reverse { "REV" } else { "SEQ" },
                    count,
                    total,
                    total * 1000 / count as u128
                );
            }
        }
    }
}
