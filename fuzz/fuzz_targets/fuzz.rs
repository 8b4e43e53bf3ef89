#![no_main]
use libfuzzer_sys::fuzz_target;
use wordmask::{Filter, Segment};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut filter: Filter = ["fuck", "ab", "abc", "赌博", "a.b"].into_iter().collect();
        if text.len() % 2 == 0 {
            filter.with_replacement("#");
        }

        let filtered = filter.filter(text);
        assert_eq!(filtered.is_none(), wordmask::is_blank(text));

        for segment in filter.scan(text) {
            if let Segment::Masked(span) = segment {
                assert!(text.is_char_boundary(span.start) && text.is_char_boundary(span.end));
                assert!(span.start < span.end);
            }
        }

        let _ = wordmask::filter(text);
    }
});
