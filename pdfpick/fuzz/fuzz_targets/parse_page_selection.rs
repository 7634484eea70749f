#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfpick::selection::parse_page_selection;

fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let expression = std::str::from_utf8(rest).unwrap_or("");
    let page_count = u32::from(count);

    let parsed = parse_page_selection(expression, page_count);

    // Strictly ascending and within 1..=page_count
    assert!(parsed.pages.windows(2).all(|w| w[0] < w[1]));
    assert!(parsed.pages.iter().all(|&p| p >= 1 && p <= page_count));
});
