#![no_main]

use errloom::parse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Err(err) = parse(s) {
            // Error locations must point inside the document
            let at = err.location();
            assert!(at.range.end <= s.len());
            let _ = err.located("fuzz", s);
        }
    }
});
