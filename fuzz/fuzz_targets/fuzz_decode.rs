#![no_main]

use libfuzzer_sys::fuzz_target;
use lzscan::decode;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes may or may not form a valid stream. Errors are fine;
    // panics and runaway allocations are what we're hunting.
    let _ = decode(data);
});
