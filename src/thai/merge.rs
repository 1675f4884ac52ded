//! # Upper Mark Merging
//!
//! Code table 20 has dedicated glyphs for an upper vowel carrying a tone
//! mark (for example อั่ or อี้). When two upper marks land on the same
//! cell, the pair is replaced by the combined glyph.
//!
//! ```text
//! existing \ incoming   ่    ้    ๊    ๋    ์
//!          ํ (222)     230  231  232  233   -
//!          ั (221)     234  235  236  237   -
//!          ิ (217)     238  239  240  241  242
//!          ี (218)     243  244  245  246   -
//!          ึ (219)     247  248  249  250   -
//!          ื (220)     251  252  253  254   -
//! ```
//!
//! Pairs outside the table resolve to the incoming mark.

/// Combined glyphs for one existing upper mark, keyed by incoming mark.
type MergeRow = &'static [(u8, u8)];

static MERGE_TABLE: &[(u8, MergeRow)] = &[
    (222, &[(224, 230), (225, 231), (226, 232), (227, 233)]),
    (221, &[(224, 234), (225, 235), (226, 236), (227, 237)]),
    (217, &[(224, 238), (225, 239), (226, 240), (227, 241), (228, 242)]),
    (218, &[(224, 243), (225, 244), (226, 245), (227, 246)]),
    (219, &[(224, 247), (225, 248), (226, 249), (227, 250)]),
    (220, &[(224, 251), (225, 252), (226, 253), (227, 254)]),
];

fn row(existing: u8) -> Option<MergeRow> {
    MERGE_TABLE
        .iter()
        .find(|(key, _)| *key == existing)
        .map(|(_, row)| *row)
}

/// Resolve two upper marks that share a cell.
///
/// Returns the combined glyph when the table has one, otherwise `incoming`.
pub fn merge_upper(existing: u8, incoming: u8) -> u8 {
    row(existing)
        .and_then(|row| row.iter().find(|(with, _)| *with == incoming))
        .map_or(incoming, |(_, merged)| *merged)
}
