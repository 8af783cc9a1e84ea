#![no_main]

use libfuzzer_sys::fuzz_target;
use lzscan::{decode, encode, EncodeOpts, ScanMode};

fuzz_target!(|data: &[u8]| {
    // Limit data size to keep the brute-force matcher fast
    let data = if data.len() > 16 * 1024 { &data[..16 * 1024] } else { data };

    for delta in [false, true] {
        let opts = EncodeOpts { mode: ScanMode::Static, delta, width: 0 };
        let stream = encode(data, opts).expect("static encode cannot fail");
        let decoded = decode(&stream).expect("own stream must decode");
        assert_eq!(decoded, data, "round-trip mismatch");
    }

    // Adaptive mode on the largest 16-aligned prefix that forms a
    // 16-row-aligned image.
    let width = 16usize;
    let usable = data.len() - data.len() % (width * 16);
    if usable > 0 {
        let image = &data[..usable];
        let opts = EncodeOpts { mode: ScanMode::Adaptive, delta: true, width: width as u16 };
        let stream = encode(image, opts).expect("geometry is aligned");
        let decoded = decode(&stream).expect("own stream must decode");
        assert_eq!(decoded, image, "adaptive round-trip mismatch");
    }
});
