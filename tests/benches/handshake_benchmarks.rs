//! # Handshake Gate Benchmarks
//!
//! The gate runs once per inbound/outbound connection attempt, so it should
//! stay in the sub-microsecond range even with large channel sets.
//!
//! | Case | Target |
//! |------|--------|
//! | Accept, small channel sets | < 1us |
//! | Reject, 127 vs 127 disjoint channels | < 10us |
//! | JSON decode of a descriptor | < 50us |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use qc_node_info::test_utils::descriptor;
use qc_node_info::{check_compatibility, DescriptorCodec, JsonDescriptorCodec};

fn bench_check_compatibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-node-info-compatibility");
    group.measurement_time(Duration::from_secs(5));

    let local = descriptor(1, "1.2.3", "quantum-chain-1", &[0x20, 0x21, 0x30]);
    let remote = descriptor(2, "1.2.9", "quantum-chain-1", &[0x30, 0x38]);
    group.bench_function("accept_small_sets", |b| {
        b.iter(|| check_compatibility(black_box(&local), black_box(&remote)))
    });

    for size in [16usize, 64, 127] {
        let ours: Vec<u8> = (0..size as u8).collect();
        let theirs: Vec<u8> = (128..128 + size as u8).collect();
        let local = descriptor(1, "1.2.3", "quantum-chain-1", &ours);
        let remote = descriptor(2, "1.2.3", "quantum-chain-1", &theirs);

        group.bench_with_input(
            BenchmarkId::new("reject_disjoint_channels", size),
            &size,
            |b, _| b.iter(|| check_compatibility(black_box(&local), black_box(&remote))),
        );
    }

    group.finish();
}

fn bench_json_decode(c: &mut Criterion) {
    let codec = JsonDescriptorCodec::new();
    let bytes = codec
        .encode(&descriptor(1, "1.2.3", "quantum-chain-1", &[0x20, 0x21, 0x30]))
        .unwrap();

    c.bench_function("qc-node-info-json-decode", |b| {
        b.iter(|| codec.decode(black_box(&bytes)))
    });
}

criterion_group!(benches, bench_check_compatibility, bench_json_decode);
criterion_main!(benches);
