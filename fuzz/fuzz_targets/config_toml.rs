#![no_main]

use libfuzzer_sys::fuzz_target;
use loadkit::config::types::ConfigFile;
use loadkit::request::ACCEPT_HEADER;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<ConfigFile>(input) {
            if let Some(base) = config.base_url.as_deref() {
                if let Ok(builder) = loadkit::config::build_request_builder(base, Some(&config)) {
                    debug_assert!(builder.header(ACCEPT_HEADER).is_some());
                }
            }
        }
    }
});
