#![no_main]

use libfuzzer_sys::fuzz_target;
use permnode::parse_types;

fuzz_target!(|data: &str| {
    let map = parse_types(data);
    if let Some(regex) = map.regex() {
        let _ = regex.pattern();
    }
});
