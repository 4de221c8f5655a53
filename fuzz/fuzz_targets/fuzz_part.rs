#![no_main]

use libfuzzer_sys::fuzz_target;
use libopc::{CompressionOption, Part};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Line 1: part name, line 2: content type, then one "id target" per line
    let mut lines = text.lines();
    let (Some(uri), Some(content_type)) = (lines.next(), lines.next()) else {
        return;
    };
    let Ok(mut part) = Part::new(uri, content_type, CompressionOption::Normal) else {
        return;
    };

    for line in lines {
        let (id, target) = line.split_once(' ').unwrap_or((line, ""));
        let before = part.relationships().len();
        match part.add_relationship(id, "type", target) {
            Ok(_) => assert_eq!(part.relationships().len(), before + 1),
            Err(_) => assert_eq!(part.relationships().len(), before),
        }
        if let Some(rel) = part.relationships().last() {
            let _ = part.resolve_target(rel);
        }
    }
});
