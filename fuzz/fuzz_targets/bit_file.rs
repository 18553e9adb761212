#![no_main]

use bitfile::fuzz::bit_file::{FuzzCase, harness};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| {
    harness(data);
});
