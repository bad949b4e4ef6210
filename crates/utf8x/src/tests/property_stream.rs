use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::{arbitrary::Input, quickcheck_tests};
use crate::{
    CodePoints, DecodeError, DecodeOptions, StreamingDecoder, decode_with,
};

type Outcome = (Vec<u32>, Option<DecodeError>);

fn collect(results: impl IntoIterator<Item = Result<u32, DecodeError>>) -> Outcome {
    let mut values = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(err) => return (values, Some(err)),
        }
    }
    (values, None)
}

/// Property: feeding input in arbitrary chunks yields the same code points and
/// the same first error as decoding it in one piece.
#[test]
fn partition_matches_batch_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Input, splits: Vec<usize>, reject_overlong: bool) -> bool {
        let options = DecodeOptions { reject_overlong };
        let bytes = input.0.as_slice();

        let mut decoder = StreamingDecoder::new(options);
        let mut streamed = Vec::new();
        let mut rest = bytes;
        for s in splits {
            if rest.is_empty() {
                break;
            }
            let (chunk, tail) = rest.split_at(1 + s % rest.len());
            decoder.feed(chunk);
            streamed.extend(decoder.by_ref());
            rest = tail;
        }
        decoder.feed(rest);
        streamed.extend(decoder.finish());

        let batch = collect(CodePoints::with_options(bytes, options));
        let whole = match decode_with(bytes, options) {
            Ok(values) => (values, None),
            Err(err) => (batch.0.clone(), Some(err)),
        };
        collect(streamed) == batch && batch == whole
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Input, Vec<usize>, bool) -> bool);
}
