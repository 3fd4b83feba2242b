#![no_main]

use endian_stream::fuzz::stream::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| { harness(data) });
