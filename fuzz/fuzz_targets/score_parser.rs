#![no_main]

use libfuzzer_sys::fuzz_target;
use speech_comparator::score::{normalize, parse_value, InputMode, ListSize};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Free-text scores and list sizes must always coerce without panicking
        let list_size = ListSize::parse(input);
        let value = parse_value(input);
        let _ = normalize(value, list_size, InputMode::Percent);
        let _ = normalize(value, list_size, InputMode::Count);
    }
});
