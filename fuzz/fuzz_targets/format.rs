#![no_main]

use errloom::format::format_source;
use errloom::parse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let (Ok(ware), Ok(formatted)) = (parse(s), format_source(s)) {
            assert_eq!(parse(&formatted).ok(), Some(ware));
        }
    }
});
