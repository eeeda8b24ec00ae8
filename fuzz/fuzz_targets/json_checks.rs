#![no_main]

use libfuzzer_sys::fuzz_target;
use loadkit::request::build_payload;
use loadkit::validate::{has_response_body, is_valid_json, parse_json_safely};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parsed = parse_json_safely(input);
        debug_assert_eq!(is_valid_json(input), parsed.is_some());
        if let Some(value) = parsed {
            let _has_body = has_response_body(&value);
            if let Ok(payload) = build_payload(&value) {
                debug_assert_eq!(parse_json_safely(&payload), Some(value));
            }
        }
    }
});
