#![no_main]

use glyphpack_backend_bitmap::generate_manual_char;
use glyphpack_spec::{BitDepth, PixelGrid};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&depth_byte, text)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(text) else {
        return;
    };
    let Ok(grid) = PixelGrid::parse(text) else {
        return;
    };
    let depth = if depth_byte & 1 == 0 {
        BitDepth::Eight
    } else {
        BitDepth::Sixteen
    };

    match generate_manual_char(&grid, depth) {
        Ok(result) => {
            assert_eq!(
                result.words.len(),
                grid.height() * depth.words_per_row(grid.width())
            );
        }
        Err(_) => assert!(grid.is_empty()),
    }
});
