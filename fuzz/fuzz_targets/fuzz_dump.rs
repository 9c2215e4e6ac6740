#![no_main]
use libfuzzer_sys::fuzz_target;
use qfeed::dump::write_dump;

// Render arbitrary bytes through both dump sections. A panic or a malformed
// hex section here is a bug in the renderer.
fuzz_target!(|data: &[u8]| {
    let mut out = Vec::new();
    write_dump(&mut out, data).unwrap();
    // "CHAR:\n" + data + "\nHEX:\n" + 3 bytes per input byte + "\n"
    assert_eq!(out.len(), 6 + data.len() + 6 + data.len() * 3 + 1);
});
