//! C source table output.
//!
//! TTF conversions produce an include-guarded header with one character per
//! line; manual characters produce a single array declaration.

use glyphpack_spec::BitDepth;

use crate::pack::{join_words, PackedWord};

/// One converted character of a font table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    /// ASCII code of the character.
    pub char_code: u32,
    /// Packed words, row-major.
    pub words: Vec<PackedWord>,
    /// Formatted words joined with `", "`.
    pub formatted: String,
    /// Comment token identifying the character.
    pub comment: String,
}

impl CharacterRecord {
    /// Builds a record, formatting the words and deriving the comment token.
    pub fn new(char_code: u32, words: Vec<PackedWord>, depth: BitDepth) -> Self {
        let formatted = join_words(&words, depth);
        Self {
            char_code,
            words,
            formatted,
            comment: comment_token(char_code),
        }
    }
}

/// Returns the comment token for a character code.
///
/// Space, double quote, apostrophe, and backslash get symbolic tokens; every
/// other code maps to its literal character.
pub fn comment_token(char_code: u32) -> String {
    match char_code {
        32 => "sp".to_string(),
        34 => "\\\"".to_string(),
        39 => "'".to_string(),
        92 => "\\\\".to_string(),
        code => char::from_u32(code)
            .map(String::from)
            .unwrap_or_else(|| format!("U+{:04X}", code)),
    }
}

/// Converts a font file stem into a C identifier stem: `-` becomes `_`.
///
/// Other characters are left as they are.
pub fn sanitize_identifier(name: &str) -> String {
    name.replace('-', "_")
}

/// Name of the font table array, e.g. `Font11x18`.
pub fn font_array_name(width: u32, height: u32) -> String {
    format!("Font{}x{}", width, height)
}

/// Renders a full include-guarded header for a font table.
///
/// `font_name` should already be sanitized with [`sanitize_identifier`].
pub fn render_font_header(
    font_name: &str,
    width: u32,
    height: u32,
    depth: BitDepth,
    records: &[CharacterRecord],
) -> String {
    let guard = format!("{}_H", font_name.to_uppercase());
    let c_type = depth.c_type();
    let words_per_char = height as usize * depth.words_per_row(width as usize);

    let body: String = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let separator = if i + 1 < records.len() { "," } else { "" };
            format!(
                "    {}{}  // {}\n",
                record.formatted,
                separator,
                line_comment(&record.comment)
            )
        })
        .collect();

    format!(
        "#ifndef {guard}\n\
         #define {guard}\n\
         \n\
         #include <stdint.h>\n\
         \n\
         // Font data for {name} {w}x{h}\n\
         // Format: {h} rows, {n} words ({t}) per character, row-wise.\n\
         static const {t} {array}[] = {{\n\
         {body}\
         }};\n\
         \n\
         #endif // {guard}\n",
        guard = guard,
        name = font_name,
        w = width,
        h = height,
        n = words_per_char,
        t = c_type,
        array = font_array_name(width, height),
        body = body,
    )
}

/// Renders the array declaration for a manually drawn character.
pub fn render_manual_array(
    width: usize,
    height: usize,
    depth: BitDepth,
    words: &[PackedWord],
) -> String {
    let c_type = depth.c_type();
    format!(
        "\n// Manually created character, {w}x{h}\n\
         // Total elements ({t}): {n}\n\
         const {t} custom_char_{w}x{h}[{n}] = {{\n    {words}\n}};\n",
        w = width,
        h = height,
        t = c_type,
        n = words.len(),
        words = join_words(words, depth),
    )
}

/// A `//` comment ending in a backslash would splice the next source line.
fn line_comment(token: &str) -> String {
    if token.ends_with('\\') {
        format!("{} (backslash)", token)
    } else {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comment_tokens() {
        assert_eq!(comment_token(32), "sp");
        assert_eq!(comment_token(34), "\\\"");
        assert_eq!(comment_token(39), "'");
        assert_eq!(comment_token(92), "\\\\");
        assert_eq!(comment_token(65), "A");
        assert_eq!(comment_token(126), "~");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("DejaVuSans-Bold"), "DejaVuSans_Bold");
        assert_eq!(sanitize_identifier("my.font 2"), "my.font 2");
    }

    #[test]
    fn test_render_font_header() {
        let records = vec![
            CharacterRecord::new(32, vec![0x00, 0x00], BitDepth::Eight),
            CharacterRecord::new(92, vec![0x80, 0x40], BitDepth::Eight),
            CharacterRecord::new(65, vec![0x40, 0xA0], BitDepth::Eight),
        ];
        let header = render_font_header("Tiny_Font", 3, 2, BitDepth::Eight, &records);

        let expected = "\
#ifndef TINY_FONT_H
#define TINY_FONT_H

#include <stdint.h>

// Font data for Tiny_Font 3x2
// Format: 2 rows, 2 words (uint8_t) per character, row-wise.
static const uint8_t Font3x2[] = {
    0x00, 0x00,  // sp
    0x80, 0x40,  // \\\\ (backslash)
    0x40, 0xA0  // A
};

#endif // TINY_FONT_H
";
        assert_eq!(header, expected);
    }

    #[test]
    fn test_render_font_header_without_records() {
        let header = render_font_header("Empty", 8, 1, BitDepth::Sixteen, &[]);
        assert!(header.contains("static const uint16_t Font8x1[] = {\n};\n"));
        assert!(header.ends_with("\n#endif // EMPTY_H\n"));
    }

    #[test]
    fn test_render_manual_array() {
        let out = render_manual_array(8, 2, BitDepth::Sixteen, &[0xAA00, 0x5500]);
        let expected = "
// Manually created character, 8x2
// Total elements (uint16_t): 2
const uint16_t custom_char_8x2[2] = {
    0xAA00, 0x5500
};
";
        assert_eq!(out, expected);
    }
}
