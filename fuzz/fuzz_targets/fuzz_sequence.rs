#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseq_core::{IterativeGenerator, Options, OverflowMode, SeqError, SequenceGenerator};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let n = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let overflow = if data[8] & 1 == 0 {
        OverflowMode::Wrapping
    } else {
        OverflowMode::Checked
    };
    let opts = Options {
        overflow,
        max_n: 10_000,
    };
    let gen = IterativeGenerator::new();

    match gen.generate(n, &opts) {
        Ok(terms) => {
            assert_eq!(terms.len() as i64, n);
            assert_eq!(gen.nth(n, &opts), Ok(terms[terms.len() - 1]));
        }
        Err(SeqError::InvalidInput(v)) => assert!(v <= 0),
        Err(_) => assert!(n > 0),
    }
});
