#![no_main]
use std::cell::RefCell;

use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use utf8x::{
    CodePoints, DecodeOptions, LengthClass, StreamingDecoder, decode_with, encode,
    encoded_len,
};

const HEADER: usize = 5; // 1 flag + 4-byte split seed

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Most inputs the default mutator produces are rejected at the first byte.
/// Every tenth round we instead write a header followed by well-formed
/// sequences from random length classes, sprinkled with single bad bytes.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size <= HEADER || !(size < HEADER || seed.is_multiple_of(10)) {
        return fuzzer_mutate(data, size, max_size);
    }

    data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x01);
    data[1..HEADER].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

    let mut written = HEADER;
    let target = size.clamp(HEADER + 1, max_size);
    while written < target {
        let limit = max_size - written;
        let appended = with_rng(|rng| {
            if rng.random_ratio(1, 16) {
                data[written] = rng.random();
                return 1;
            }
            let class = LengthClass::ALL[rng.random_range(0..LengthClass::ALL.len())];
            let code_point = rng.random_range(class.min_code_point()..=class.max_code_point());
            let bytes = encode(&[code_point]).expect("code point drawn from a valid class");
            let len = bytes.len().min(limit);
            data[written..written + len].copy_from_slice(&bytes[..len]);
            len
        });
        written += appended;
    }
    written
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// Deterministic, sorted chunk boundaries derived from the header seed.
fn split_points(len: usize, seed: u32) -> Vec<usize> {
    let mut rng = SmallRng::seed_from_u64(u64::from(seed));
    let count = rng.random_range(0..=len.min(64));
    let mut points: Vec<usize> = (0..count).map(|_| rng.random_range(0..=len)).collect();
    points.sort_unstable();
    points.dedup();
    points
}

fn codec(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let options = DecodeOptions {
        reject_overlong: data[0] & 1 != 0,
    };
    let split_seed = u32::from_le_bytes(data[1..HEADER].try_into().unwrap());
    let data = &data[HEADER..];

    let batch = decode_with(data, options);
    let iterated: Vec<_> = CodePoints::with_options(data, options).collect();

    let mut decoder = StreamingDecoder::new(options);
    let mut streamed = Vec::new();
    let mut start = 0;
    for end in split_points(data.len(), split_seed) {
        decoder.feed(&data[start..end]);
        streamed.extend(decoder.by_ref());
        start = end;
    }
    decoder.feed(&data[start..]);
    streamed.extend(decoder.finish());
    assert_eq!(streamed, iterated);

    match batch {
        Ok(code_points) => {
            assert!(iterated.iter().all(Result::is_ok));
            let len: usize = code_points.iter().map(|&cp| encoded_len(cp).unwrap()).sum();
            let bytes = encode(&code_points).unwrap();
            assert_eq!(bytes.len(), len);
            if options.reject_overlong {
                assert_eq!(bytes, data);
            }
        }
        Err(err) => assert_eq!(iterated.last(), Some(&Err(err))),
    }
}

fuzz_target!(|data: &[u8]| codec(data));
