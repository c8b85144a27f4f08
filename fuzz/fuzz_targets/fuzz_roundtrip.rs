#![no_main]
use libfuzzer_sys::fuzz_target;
use jsonval::{Options, decode_from_str, encode_to_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let opts = Options::default();

        if let Ok(first) = decode_from_str(input, &opts) {
            let rendered = encode_to_string(&first, &opts);
            match decode_from_str(&rendered, &opts) {
                Ok(second) => {
                    if first != second {
                        panic!(
                            "Roundtrip mismatch!\nInput: {}\nRendered: {}\nSecond parse: {}",
                            input, rendered, second
                        );
                    }
                    assert_eq!(rendered, encode_to_string(&second, &opts));
                }
                Err(e) => {
                    panic!(
                        "Failed to parse rendered text!\nInput: {}\nRendered: {}\nError: {}",
                        input, rendered, e
                    );
                }
            }
        }
    }
});
