#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut parts = input.splitn(3, '\n');
        let base = parts.next().unwrap_or_default();
        let path = parts.next().unwrap_or_default();
        let query = parts.next().unwrap_or_default();
        let plain = |text: &str| !text.contains('?') && !text.contains('&');
        if let Ok(url) = loadkit::fuzzing::build_url_input(base, path, query) {
            if plain(base) && plain(path) {
                debug_assert!(!url.ends_with('?'));
                debug_assert!(!url.contains("?&"));
                debug_assert!(!url.contains("&&"));
            }
        }
    }
});
