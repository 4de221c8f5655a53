#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Normalized output must be a fixed point
        if let Ok(once) = libopc::normalize_content_type(raw) {
            assert_eq!(libopc::normalize_content_type(&once), Ok(once.clone()));
        }
    }
});
