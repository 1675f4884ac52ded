//! # Rendering Tests
//!
//! End-to-end checks of the three-row Thai rendering through the public API.
//!
//! ## Test Coverage
//!
//! - **Fixed lines**: known words and their exact row bytes
//! - **Alignment**: the rows of ordinary text have matching cell counts
//! - **Printing**: rows reach the sink as three writes in order

use pretty_assertions::assert_eq;

use thaiprint::protocol::commands;
use thaiprint::thai::{self, cp20};
use thaiprint::transport::{RawSink, RecordingSink, WriteSink};

/// Mixed Thai, Latin and digits, none starting with a mark.
const SAMPLE_LINES: &[&str] = &[
    "สวัสดีครับ",
    "ขอบคุณมาก",
    "กุ้งผัดพริก 120 บาท",
    "น้ำแข็ง",
    "ที่นี่",
    "Total: ๑๒๐ บาท",
    "เกี๊ยวน้ำ",
    "อื๋อ",
    "ปั๊มน้ำมัน",
    "ฤๅษี",
    "",
];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Cells on a single-byte row, without the terminator.
fn cells(row: &[u8]) -> usize {
    assert_eq!(row.last(), Some(&b'\n'), "row must end with LF");
    row.len() - 1
}

fn mark_count(text: &str) -> usize {
    text.chars()
        .filter_map(cp20::lookup)
        .filter(|&b| cp20::is_upper_mark(b) || cp20::is_lower_mark(b))
        .count()
}

// ============================================================================
// FIXED LINES
// ============================================================================

#[test]
fn test_single_base_consonant() {
    let rows = thai::render_thai("ก");
    assert_eq!(rows.upper, vec![32, 10]);
    assert_eq!(rows.middle, vec![161, 10]);
    assert_eq!(rows.lower, vec![32, 10]);
}

#[test]
fn test_consonant_with_lower_vowel() {
    let rows = thai::render_thai("กุ");
    assert_eq!(rows.upper, vec![32, 10]);
    assert_eq!(rows.middle, vec![161, 10]);
    assert_eq!(rows.lower, vec![215, 10]);
}

#[test]
fn test_two_upper_marks_merge_into_one_cell() {
    // ก + mai han-akat (221) + mai ek (224)
    let rows = thai::render_thai("กั่");
    assert_eq!(rows.upper, vec![234, 10]);
    assert_eq!(rows.middle, vec![161, 10]);
    assert_eq!(rows.lower, vec![32, 10]);
}

#[test]
fn test_leading_upper_mark_does_not_panic() {
    let rows = thai::render_thai("่");
    assert_eq!(rows.upper, vec![224, 10]);
    assert_eq!(rows.middle, vec![10]);
    assert_eq!(rows.lower, vec![10]);
}

#[test]
fn test_unmapped_characters() {
    let rows = thai::render_thai("กA7");
    assert_eq!(rows.middle, vec![161, b'A', b'7', 10]);
    assert_eq!(rows.upper, vec![32, 32, 32, 10]);
    assert_eq!(rows.lower, vec![32, 32, 32, 10]);
}

#[test]
fn test_shrimp_word() {
    // กุ้ง: lower vowel and tone mark on the same consonant
    let rows = thai::render_thai("กุ้ง");
    assert_eq!(rows.upper, vec![225, 32, 10]);
    assert_eq!(rows.middle, vec![161, 165, 10]);
    assert_eq!(rows.lower, vec![215, 32, 10]);
}

#[test]
fn test_sara_ue_with_tone() {
    // อื๋อ: ื (220) + ๋ (227) merges to 254
    let rows = thai::render_thai("อื๋อ");
    assert_eq!(rows.upper, vec![254, 32, 10]);
    assert_eq!(rows.middle, vec![202, 202, 10]);
}

// ============================================================================
// ALIGNMENT PROPERTIES
// ============================================================================

#[test]
fn test_middle_row_drops_marks() {
    for line in SAMPLE_LINES {
        let rows = thai::render_thai(line);
        let expected = line.chars().count() - mark_count(line);
        assert_eq!(rows.columns(), expected, "{line}");
        if line.chars().all(|c| c.is_ascii() || cp20::is_supported(c)) {
            assert_eq!(cells(&rows.middle), expected, "{line}");
        }
    }
}

#[test]
fn test_rows_align_column_by_column() {
    for line in SAMPLE_LINES {
        let rows = thai::render_thai(line);
        assert_eq!(cells(&rows.upper), rows.columns(), "{line}");
        assert_eq!(cells(&rows.lower), rows.columns(), "{line}");
    }
}

#[test]
fn test_base_glyphs_only_on_middle_row() {
    for line in SAMPLE_LINES {
        let rows = thai::render_thai(line);
        for row in [&rows.upper, &rows.lower] {
            for &byte in &row[..row.len() - 1] {
                assert!(
                    byte == b' '
                        || cp20::is_upper_mark(byte)
                        || cp20::is_lower_mark(byte)
                        || (230..=254).contains(&byte),
                    "{line}: unexpected {byte} outside the middle row"
                );
            }
        }
    }
}

#[test]
fn test_rows_terminated_once() {
    for line in SAMPLE_LINES {
        for row in thai::render_thai(line).iter() {
            assert_eq!(row.iter().filter(|&&b| b == b'\n').count(), 1, "{line}");
            assert_eq!(row.last(), Some(&b'\n'));
        }
    }
}

// ============================================================================
// PRINTING
// ============================================================================

#[test]
fn test_print_three_writes_in_order() {
    let mut sink = RecordingSink::default();
    thai::print_thai(&mut sink, "น้ำ").unwrap();

    let rows = thai::render_thai("น้ำ");
    assert_eq!(sink.writes, vec![rows.upper, rows.middle, rows.lower]);
}

#[test]
fn test_print_to_writer() {
    let mut sink = WriteSink::new(Vec::new());
    sink.write_raw(&commands::select_thai_code_table()).unwrap();
    thai::print_thai(&mut sink, "ก").unwrap();

    assert_eq!(
        sink.into_inner(),
        vec![27, 116, 20, 13, 32, 10, 161, 10, 32, 10]
    );
}

#[test]
fn test_print_to_dyn_sink() {
    let mut recording = RecordingSink::default();
    {
        let sink: &mut dyn RawSink = &mut recording;
        thai::print_thai(sink, "ข").unwrap();
    }
    assert_eq!(recording.writes.len(), 3);
    assert_eq!(recording.writes[1], vec![162, 10]);
}
