#![no_main]
use libfuzzer_sys::fuzz_target;
use qfeed::target;

// Feed arbitrary bytes to the linked engine through the bridge. Any crash
// here is a bug in the engine or the bridge.
fuzz_target!(|data: &[u8]| {
    let mut buf = data.to_vec();
    buf.push(0);
    let _handle = target::parse(&buf, data.len());
});
