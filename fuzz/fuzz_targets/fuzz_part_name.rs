#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Accepted names must stay accepted and never hold traversal segments
        if libopc::validate_part_name(name).is_ok() {
            assert!(libopc::validate_part_name(name).is_ok());
            assert!(name.split('/').skip(1).all(|s| !s.is_empty() && s != "." && s != ".."));
        }
    }
});
