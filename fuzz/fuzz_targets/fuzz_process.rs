#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let output = ld_render_text::process(text);

    let before: Vec<usize> = text.split('\n').map(|line| line.chars().count()).collect();
    let after: Vec<usize> = output.split('\n').map(|line| line.chars().count()).collect();
    assert_eq!(before, after, "line shape changed");

    let outcome = ld_render_text::process_with_stats(text);
    assert_eq!(outcome.output, output, "stats pass diverged");
});
