#![no_main]
use libfuzzer_sys::fuzz_target;
use jsonval::{Options, decode_from_str};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = decode_from_str(s, &Options::default());
        let shallow = Options { max_depth: 4, ..Options::default() };
        let _ = decode_from_str(s, &shallow);
    }
});
