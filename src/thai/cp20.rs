//! # Code Table 20 (Thai Code 42)
//!
//! Maps Thai Unicode characters to the single-byte glyph codes of ESC/POS
//! character code table 20, and classifies those glyph codes by where they
//! are drawn.
//!
//! The printer must already be switched to code table 20 (`ESC t 20`) for
//! these bytes to render correctly.
//!
//! ## Glyph Layout
//!
//! | Range | Contents |
//! |-------|----------|
//! | 144–153 | Thai digits ๐–๙ |
//! | 154–155 | Obsolete consonants ฃ ฅ |
//! | 161–214 | Consonants, leading/following vowels, ๆ ฯ |
//! | 215–216, 229 | Lower marks (ุ ู ฺ) |
//! | 217–228 | Upper marks (vowels and tone marks) |
//! | 230–254 | Merged upper marks, see [`super::merge`] |

/// Where a glyph is drawn relative to its base cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphClass {
    /// Drawn above the base glyph (tone marks, upper vowels)
    Upper,
    /// Drawn below the base glyph (lower vowels, phinthu)
    Lower,
    /// Occupies its own cell on the middle row
    Base,
}

/// Glyph codes drawn below the base line.
pub const LOWER_MARKS: [u8; 3] = [215, 216, 229];

/// Glyph codes drawn above the base line.
pub const UPPER_MARKS: [u8; 12] = [217, 218, 219, 220, 221, 222, 223, 224, 225, 226, 227, 228];

/// Map a Unicode character to its code table 20 glyph code.
///
/// Returns `None` for anything outside the Thai table. That includes
/// spaces, ASCII and Latin text, which callers pass through or blank out.
pub fn lookup(ch: char) -> Option<u8> {
    let byte = match ch {
        // 144–153: Thai digits
        '๐' => 144, // U+0E50
        '๑' => 145, // U+0E51
        '๒' => 146, // U+0E52
        '๓' => 147, // U+0E53
        '๔' => 148, // U+0E54
        '๕' => 149, // U+0E55
        '๖' => 150, // U+0E56
        '๗' => 151, // U+0E57
        '๘' => 152, // U+0E58
        '๙' => 153, // U+0E59

        // 154–155: obsolete consonants
        'ฃ' => 154, // U+0E03
        'ฅ' => 155, // U+0E05

        // 161–203: consonants
        'ก' => 161, // U+0E01
        'ข' => 162, // U+0E02
        'ค' => 163, // U+0E04
        'ฆ' => 164, // U+0E06
        'ง' => 165, // U+0E07
        'จ' => 166, // U+0E08
        'ฉ' => 167, // U+0E09
        'ช' => 168, // U+0E0A
        'ซ' => 169, // U+0E0B
        'ฌ' => 170, // U+0E0C
        'ญ' => 171, // U+0E0D
        'ฎ' => 172, // U+0E0E
        'ฏ' => 173, // U+0E0F
        'ฐ' => 174, // U+0E10
        'ฑ' => 175, // U+0E11
        'ฒ' => 176, // U+0E12
        'ณ' => 177, // U+0E13
        'ด' => 178, // U+0E14
        'ต' => 179, // U+0E15
        'ถ' => 180, // U+0E16
        'ท' => 181, // U+0E17
        'ธ' => 182, // U+0E18
        'น' => 183, // U+0E19
        'บ' => 184, // U+0E1A
        'ป' => 185, // U+0E1B
        'ผ' => 186, // U+0E1C
        'ฝ' => 187, // U+0E1D
        'พ' => 188, // U+0E1E
        'ฟ' => 189, // U+0E1F
        'ภ' => 190, // U+0E20
        'ม' => 191, // U+0E21
        'ย' => 192, // U+0E22
        'ร' => 193, // U+0E23
        'ฤ' => 194, // U+0E24
        'ล' => 195, // U+0E25
        'ว' => 196, // U+0E27
        'ศ' => 197, // U+0E28
        'ษ' => 198, // U+0E29
        'ส' => 199, // U+0E2A
        'ห' => 200, // U+0E2B
        'ฬ' => 201, // U+0E2C
        'อ' => 202, // U+0E2D
        'ฮ' => 203, // U+0E2E

        // 204–214: vowels that take their own cell, repetition and abbreviation
        'ะ' => 204, // U+0E30
        'ฦ' => 205, // U+0E26
        'า' => 206, // U+0E32
        'ำ' => 207, // U+0E33
        'เ' => 208, // U+0E40
        'แ' => 209, // U+0E41
        'โ' => 210, // U+0E42
        'ใ' => 211, // U+0E43
        'ไ' => 212, // U+0E44
        'ๆ' => 213, // U+0E46
        'ฯ' => 214, // U+0E2F

        // 215–216: lower vowels
        'ุ' => 215, // U+0E38
        'ู' => 216, // U+0E39

        // 217–228: upper vowels and tone marks
        'ิ' => 217, // U+0E34
        'ี' => 218, // U+0E35
        'ึ' => 219, // U+0E36
        'ื' => 220, // U+0E37
        'ั' => 221, // U+0E31
        'ํ' => 222, // U+0E4D
        '็' => 223, // U+0E47
        '่' => 224, // U+0E48
        '้' => 225, // U+0E49
        '๊' => 226, // U+0E4A
        '๋' => 227, // U+0E4B
        '์' => 228, // U+0E4C

        // 229: phinthu
        'ฺ' => 229, // U+0E3A

        _ => return None,
    };
    Some(byte)
}

/// Whether `ch` has a glyph in code table 20.
#[inline]
pub fn is_supported(ch: char) -> bool {
    lookup(ch).is_some()
}

/// Whether `byte` is drawn above the base line.
#[inline]
pub fn is_upper_mark(byte: u8) -> bool {
    UPPER_MARKS.contains(&byte)
}

/// Whether `byte` is drawn below the base line.
#[inline]
pub fn is_lower_mark(byte: u8) -> bool {
    LOWER_MARKS.contains(&byte)
}

/// Classify a glyph code by the row it is printed on.
pub fn classify(byte: u8) -> GlyphClass {
    if is_upper_mark(byte) {
        GlyphClass::Upper
    } else if is_lower_mark(byte) {
        GlyphClass::Lower
    } else {
        GlyphClass::Base
    }
}
