//! Benchmark – `utf8x` encode, decode, and streaming decode
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use utf8x::{DecodeOptions, StreamingDecoder, decode_with, encode};

/// Produce a deterministic sequence of `len` code points cycling through
/// `alphabet`.
fn make_payload(alphabet: &[u32], len: usize) -> Vec<u32> {
    alphabet.iter().copied().cycle().take(len).collect()
}

fn payloads() -> [(&'static str, Vec<u32>); 3] {
    const LEN: usize = 64 * 1024;
    [
        ("ascii", make_payload(&[0x74, 0x65, 0x72, 0x61, 0x6E, 0x20], LEN)),
        ("cyrillic", make_payload(&[0x43C, 0x430, 0x448, 0x438, 0x43D], LEN)),
        (
            "mixed",
            make_payload(&[0x41, 0x7FF, 0xFFFF, 0x10_FFFF, 0x3FF_FFFF, 0x7FFF_FFFF], LEN),
        ),
    ]
}

/// Feed `bytes` to a streaming decoder in `parts` chunks and return the number
/// of code points produced.
fn run_streaming_decoder(bytes: &[u8], parts: usize) -> usize {
    assert!(parts > 0);
    let chunk_size = bytes.len().div_ceil(parts);

    let mut decoder = StreamingDecoder::new(DecodeOptions::default());
    let mut produced = 0usize;
    for chunk in bytes.chunks(chunk_size) {
        decoder.feed(chunk);
        for res in decoder.by_ref() {
            res.unwrap();
            produced += 1;
        }
    }
    for res in decoder.finish() {
        res.unwrap();
        produced += 1;
    }
    produced
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for (name, code_points) in payloads() {
        group.throughput(Throughput::Elements(code_points.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &code_points, |b, cps| {
            b.iter(|| black_box(encode(black_box(cps)).unwrap()));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for (name, code_points) in payloads() {
        let bytes = encode(&code_points).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        for reject_overlong in [false, true] {
            let options = DecodeOptions { reject_overlong };
            let id = BenchmarkId::new(name, if reject_overlong { "strict" } else { "lenient" });
            group.bench_with_input(id, &bytes, |b, bytes| {
                b.iter(|| black_box(decode_with(black_box(bytes), options).unwrap()));
            });
        }
    }
    group.finish();
}

fn bench_streaming_decoder(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming_decoder_split");
    for (name, code_points) in payloads() {
        let bytes = encode(&code_points).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        for &parts in &[1usize, 100, 10_000] {
            group.bench_with_input(BenchmarkId::new(name, parts), &bytes, |b, bytes| {
                b.iter(|| black_box(run_streaming_decoder(black_box(bytes), parts)));
            });
        }
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! {
    name = benches;
    config = criterion();
    targets = bench_encode, bench_decode, bench_streaming_decoder
}
criterion_main!(benches);
