#![no_main]

use ld_core::FenceConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let outcome = ld_render_text::render_fenced(text, &FenceConfig::default());
    assert_eq!(
        outcome.output.split('\n').count(),
        text.split('\n').count(),
        "line count changed"
    );
    for block in &outcome.blocks {
        assert!(block.start_line < block.end_line);
    }
});
