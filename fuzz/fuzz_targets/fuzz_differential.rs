#![no_main]
use libfuzzer_sys::fuzz_target;
use jsonval::{Options, decode_from_str};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let opts = Options::default();
        let ours = decode_from_str(input, &opts);
        let theirs = serde_json::from_str::<serde_json::Value>(input);

        match (&ours, &theirs) {
            (Ok(value), Err(e)) => {
                // raw control characters are accepted inside strings; nesting limits differ by one
                let tolerated = input.chars().any(char::is_control)
                    || e.to_string().contains("recursion limit");
                if !tolerated {
                    panic!("Accepted input serde_json rejects!\nInput: {}\nOurs: {}\nError: {}", input, value, e);
                }
            }
            (Err(e), Ok(_)) => {
                if !e.to_string().contains("maximum depth") {
                    panic!("Rejected input serde_json accepts!\nInput: {}\nError: {}", input, e);
                }
            }
            (Ok(value), Ok(_)) => {
                let rendered = value.to_string();
                if !input.chars().any(char::is_control) {
                    if let Err(e) = serde_json::from_str::<serde_json::Value>(&rendered) {
                        panic!("Rendered text is not JSON!\nInput: {}\nRendered: {}\nError: {}", input, rendered, e);
                    }
                }
            }
            (Err(_), Err(_)) => {}
        }
    }
});
