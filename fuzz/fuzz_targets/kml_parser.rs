#![no_main]
use libfuzzer_sys::fuzz_target;
use kmldom::{parse_with_config, Config};

fuzz_target!(|data: &[u8]| {
    let _ = kmldom::parse_bytes(data);
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_with_config(s, Config::strict());
    }
});
