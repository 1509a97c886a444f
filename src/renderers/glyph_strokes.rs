//! Character to pen-stroke polyline table
//!
//! Each supported character maps to a list of polylines in glyph-local
//! coordinates on a fixed 8x20 design grid: x grows right across the cell,
//! y grows down from the cell top, the baseline sits at design row 16.
//! Letterforms are angular polyline approximations; curves are short
//! segment chains. The table is built once and never mutated.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Glyph cell width in design units
pub const GLYPH_CELL_WIDTH: f32 = 8.0;

/// Distance from cell top to the baseline
pub const GLYPH_CELL_ASCENT: f32 = 16.0;

/// Distance from the baseline to the cell bottom
pub const GLYPH_CELL_DESCENT: f32 = 4.0;

/// Full cell height (ascent + descent)
pub const GLYPH_CELL_HEIGHT: f32 = GLYPH_CELL_ASCENT + GLYPH_CELL_DESCENT;

/// One glyph: a list of polylines in glyph-local design coordinates
pub type GlyphPaths = Vec<Vec<(f32, f32)>>;

macro_rules! path {
    ($(($x:expr, $y:expr)),+ $(,)?) => {
        vec![ $( ($x as f32, $y as f32) ),+ ]
    };
}

/// Look up the stroke paths for a character
pub fn glyph_paths(ch: char) -> Option<&'static GlyphPaths> {
    GLYPH_TABLE.get(&ch)
}

/// Whether the table has an authored shape for this character
pub fn is_supported(ch: char) -> bool {
    GLYPH_TABLE.contains_key(&ch)
}

/// All characters with authored shapes, sorted
pub fn supported_characters() -> Vec<char> {
    let mut chars: Vec<char> = GLYPH_TABLE.keys().copied().collect();
    chars.sort_unstable();
    chars
}

lazy_static! {
    static ref GLYPH_TABLE: HashMap<char, GlyphPaths> = build_glyph_table();
}

fn build_glyph_table() -> HashMap<char, GlyphPaths> {
    let mut t: HashMap<char, GlyphPaths> = HashMap::new();

    // ------------------------------------------------------------------
    // Uppercase: cap height at row 2, baseline at row 16
    // ------------------------------------------------------------------
    t.insert('A', vec![path![(0, 16), (3, 2), (6, 16)], path![(1.5, 11), (4.5, 11)]]);
    t.insert('B', vec![
        path![(0, 2), (0, 16)],
        path![(0, 2), (4, 2), (5, 4), (5, 6), (4, 8), (0, 8)],
        path![(0, 8), (5, 8), (6, 10), (6, 14), (5, 16), (0, 16)],
    ]);
    t.insert('C', vec![path![(6, 4), (4, 2), (2, 2), (0, 4), (0, 14), (2, 16), (4, 16), (6, 14)]]);
    t.insert('D', vec![path![(0, 2), (0, 16)], path![(0, 2), (3, 2), (6, 5), (6, 13), (3, 16), (0, 16)]]);
    t.insert('E', vec![path![(6, 2), (0, 2), (0, 16), (6, 16)], path![(0, 9), (4, 9)]]);
    t.insert('F', vec![path![(6, 2), (0, 2), (0, 16)], path![(0, 9), (4, 9)]]);
    t.insert('G', vec![path![
        (6, 4), (4, 2), (2, 2), (0, 4), (0, 14), (2, 16), (4, 16), (6, 14), (6, 10), (3.5, 10),
    ]]);
    t.insert('H', vec![path![(0, 2), (0, 16)], path![(6, 2), (6, 16)], path![(0, 9), (6, 9)]]);
    t.insert('I', vec![path![(1, 2), (5, 2)], path![(3, 2), (3, 16)], path![(1, 16), (5, 16)]]);
    t.insert('J', vec![path![(6, 2), (6, 13), (5, 15.5), (3, 16), (1, 15.5), (0, 13.5)]]);
    t.insert('K', vec![path![(0, 2), (0, 16)], path![(6, 2), (0, 9), (6, 16)]]);
    t.insert('L', vec![path![(0, 2), (0, 16), (6, 16)]]);
    t.insert('M', vec![path![(0, 16), (0, 2), (3, 9), (6, 2), (6, 16)]]);
    t.insert('N', vec![path![(0, 16), (0, 2), (6, 16), (6, 2)]]);
    t.insert('O', vec![path![
        (2, 2), (4, 2), (6, 4), (6, 14), (4, 16), (2, 16), (0, 14), (0, 4), (2, 2),
    ]]);
    t.insert('P', vec![path![(0, 16), (0, 2), (4, 2), (6, 4), (6, 7), (4, 9), (0, 9)]]);
    t.insert('Q', vec![
        path![(2, 2), (4, 2), (6, 4), (6, 14), (4, 16), (2, 16), (0, 14), (0, 4), (2, 2)],
        path![(4, 12), (6.5, 16.5)],
    ]);
    t.insert('R', vec![
        path![(0, 16), (0, 2), (4, 2), (6, 4), (6, 7), (4, 9), (0, 9)],
        path![(2, 9), (6, 16)],
    ]);
    t.insert('S', vec![path![
        (6, 4), (4, 2), (2, 2), (0, 4), (0, 6), (2, 8), (4, 9), (6, 11), (6, 14), (4, 16),
        (2, 16), (0, 14),
    ]]);
    t.insert('T', vec![path![(0, 2), (6, 2)], path![(3, 2), (3, 16)]]);
    t.insert('U', vec![path![(0, 2), (0, 13), (2, 16), (4, 16), (6, 13), (6, 2)]]);
    t.insert('V', vec![path![(0, 2), (3, 16), (6, 2)]]);
    t.insert('W', vec![path![(0, 2), (1.5, 16), (3, 7), (4.5, 16), (6, 2)]]);
    t.insert('X', vec![path![(0, 2), (6, 16)], path![(6, 2), (0, 16)]]);
    t.insert('Y', vec![path![(0, 2), (3, 9), (6, 2)], path![(3, 9), (3, 16)]]);
    t.insert('Z', vec![path![(0, 2), (6, 2), (0, 16), (6, 16)]]);

    // ------------------------------------------------------------------
    // Lowercase: x-height at row 7, ascenders from row 2, descenders to 20
    // ------------------------------------------------------------------
    t.insert('a', vec![
        path![(5, 8), (3, 7), (1, 8), (0.5, 11), (1, 15), (3, 16), (5, 15)],
        path![(5, 7), (5, 16)],
    ]);
    t.insert('b', vec![
        path![(0, 2), (0, 16)],
        path![(0, 9), (2, 7), (4, 7), (5.5, 9), (5.5, 14), (4, 16), (2, 16), (0, 14)],
    ]);
    t.insert('c', vec![path![
        (5, 8.5), (3, 7), (1.5, 7.5), (0.5, 9.5), (0.5, 13.5), (1.5, 15.5), (3, 16), (5, 14.5),
    ]]);
    t.insert('d', vec![
        path![(5, 2), (5, 16)],
        path![(5, 9), (3, 7), (1, 7), (0, 9), (0, 14), (1, 16), (3, 16), (5, 14)],
    ]);
    t.insert('e', vec![path![
        (0.5, 11), (5.5, 11), (5.5, 9), (4, 7), (2, 7), (0.5, 9), (0.5, 14), (2, 16), (4.5, 16),
    ]]);
    t.insert('f', vec![path![(5, 3), (3.5, 2), (2.5, 3), (2.5, 16)], path![(1, 8), (4.5, 8)]]);
    t.insert('g', vec![
        path![(5, 9), (3, 7), (1, 7), (0, 9), (0, 13), (1, 14.5), (3, 15), (5, 13.5)],
        path![(5, 7), (5, 18), (3.5, 20), (1.5, 19.5)],
    ]);
    t.insert('h', vec![path![(0, 2), (0, 16)], path![(0, 9), (2, 7), (4, 7), (5, 9), (5, 16)]]);
    t.insert('i', vec![path![(3, 7), (3, 16)], path![(3, 4)]]);
    t.insert('j', vec![path![(4, 7), (4, 18), (2.5, 20), (1, 19)], path![(4, 4)]]);
    t.insert('k', vec![
        path![(0, 2), (0, 16)],
        path![(5, 7), (0, 11.5)],
        path![(1.5, 10.5), (5, 16)],
    ]);
    t.insert('l', vec![path![(3, 2), (3, 15), (4, 16)]]);
    t.insert('m', vec![
        path![(0, 16), (0, 7)],
        path![(0, 9), (1, 7), (2.5, 8), (3, 10), (3, 16)],
        path![(3, 10), (4, 7.5), (5.5, 8), (6, 10), (6, 16)],
    ]);
    t.insert('n', vec![path![(0, 7), (0, 16)], path![(0, 9), (2, 7), (4, 7), (5, 9), (5, 16)]]);
    t.insert('o', vec![path![
        (1.5, 7), (3.5, 7), (5, 9), (5, 14), (3.5, 16), (1.5, 16), (0, 14), (0, 9), (1.5, 7),
    ]]);
    t.insert('p', vec![
        path![(0, 7), (0, 20)],
        path![(0, 9), (2, 7), (4, 7), (5.5, 9), (5.5, 13.5), (4, 16), (2, 16), (0, 14)],
    ]);
    t.insert('q', vec![
        path![(5, 7), (5, 20)],
        path![(5, 9), (3, 7), (1, 7), (0, 9), (0, 14), (1, 16), (3, 16), (5, 14)],
    ]);
    t.insert('r', vec![path![(0, 7), (0, 16)], path![(0, 10), (1.5, 7.5), (3.5, 7), (5, 8)]]);
    t.insert('s', vec![path![
        (5, 8.5), (3.5, 7), (1.5, 7), (0.5, 8.5), (1.5, 10.5), (3.5, 11.5), (4.8, 13),
        (3.8, 15.5), (1.5, 16), (0, 14.5),
    ]]);
    t.insert('t', vec![path![(2.5, 3), (2.5, 14), (4, 16), (5, 15)], path![(0.5, 7), (4.5, 7)]]);
    t.insert('u', vec![
        path![(0, 7), (0, 14), (1.5, 16), (3.5, 16), (5, 14)],
        path![(5, 7), (5, 16)],
    ]);
    t.insert('v', vec![path![(0, 7), (2.5, 16), (5, 7)]]);
    t.insert('w', vec![path![(0, 7), (1.2, 16), (3, 9), (4.8, 16), (6, 7)]]);
    t.insert('x', vec![path![(0, 7), (5, 16)], path![(5, 7), (0, 16)]]);
    t.insert('y', vec![path![(0, 7), (2.5, 13.5)], path![(5, 7), (1.5, 20), (0, 19)]]);
    t.insert('z', vec![path![(0, 7), (5, 7), (0, 16), (5, 16)]]);

    // ------------------------------------------------------------------
    // Digits: same vertical band as uppercase
    // ------------------------------------------------------------------
    t.insert('0', vec![path![
        (1.5, 2), (4.5, 2), (6, 5), (6, 13), (4.5, 16), (1.5, 16), (0, 13), (0, 5), (1.5, 2),
    ]]);
    t.insert('1', vec![path![(1.5, 4.5), (3.5, 2), (3.5, 16)], path![(1.5, 16), (5.5, 16)]]);
    t.insert('2', vec![path![(0.5, 4), (2, 2), (4, 2), (5.5, 4), (5.5, 6), (0, 16), (6, 16)]]);
    t.insert('3', vec![path![
        (0.5, 3.5), (2, 2), (4, 2), (5.5, 4), (5.5, 6.5), (4, 8.5), (2.5, 8.5), (4.5, 9),
        (6, 11), (6, 13.5), (4.5, 16), (2, 16), (0.5, 14.5),
    ]]);
    t.insert('4', vec![path![(4.5, 16), (4.5, 2), (0, 11.5), (6, 11.5)]]);
    t.insert('5', vec![path![
        (5.5, 2), (0.5, 2), (0.5, 8), (3, 7.5), (5, 8.5), (6, 11), (6, 13), (4.5, 16), (2, 16),
        (0.5, 14.5),
    ]]);
    t.insert('6', vec![path![
        (5, 3), (3, 2), (1, 3.5), (0, 7), (0, 13), (1.5, 16), (3.5, 16), (5.5, 14), (5.5, 11),
        (3.5, 9), (1.5, 9.5), (0, 11.5),
    ]]);
    t.insert('7', vec![path![(0, 2), (6, 2), (2.5, 16)]]);
    t.insert('8', vec![path![
        (3, 2), (1, 3), (0.5, 5.5), (1.5, 8), (3, 9), (4.5, 10), (5.5, 12.5), (5, 15), (3, 16),
        (1, 15), (0.5, 12.5), (1.5, 10), (3, 9), (4.5, 8), (5.5, 5.5), (5, 3), (3, 2),
    ]]);
    t.insert('9', vec![path![
        (5.5, 7), (3.5, 9), (1.5, 9), (0.5, 7), (0.5, 4), (2, 2), (4, 2), (5.5, 4), (5.5, 13),
        (4, 16), (2, 16), (0.5, 14.5),
    ]]);

    // ------------------------------------------------------------------
    // Punctuation and symbols
    // ------------------------------------------------------------------
    t.insert('.', vec![path![(3, 15.2), (3, 16)]]);
    t.insert(',', vec![path![(3.5, 15), (2.5, 18.5)]]);
    t.insert(':', vec![path![(3, 8.5), (3, 9.3)], path![(3, 15.2), (3, 16)]]);
    t.insert(';', vec![path![(3, 8.5), (3, 9.3)], path![(3.5, 15), (2.5, 18.5)]]);
    t.insert('!', vec![path![(3, 2), (3, 12)], path![(3, 15.2), (3, 16)]]);
    t.insert('?', vec![
        path![(0.5, 4), (2, 2), (4, 2), (5.5, 4), (5.5, 6), (3, 8.5), (3, 11.5)],
        path![(3, 15.2), (3, 16)],
    ]);
    t.insert('\'', vec![path![(3, 2), (3, 5.5)]]);
    t.insert('"', vec![path![(2, 2), (2, 5.5)], path![(4, 2), (4, 5.5)]]);
    t.insert('`', vec![path![(2.5, 2), (4, 4.5)]]);
    t.insert('(', vec![path![(4.5, 2), (2.5, 5), (2, 9), (2.5, 13), (4.5, 16)]]);
    t.insert(')', vec![path![(1.5, 2), (3.5, 5), (4, 9), (3.5, 13), (1.5, 16)]]);
    t.insert('[', vec![path![(4.5, 2), (2.5, 2), (2.5, 16), (4.5, 16)]]);
    t.insert(']', vec![path![(1.5, 2), (3.5, 2), (3.5, 16), (1.5, 16)]]);
    t.insert('{', vec![path![
        (5, 2), (3.5, 3), (3, 5), (3, 8), (1.5, 9), (3, 10), (3, 13), (3.5, 15), (5, 16),
    ]]);
    t.insert('}', vec![path![
        (1, 2), (2.5, 3), (3, 5), (3, 8), (4.5, 9), (3, 10), (3, 13), (2.5, 15), (1, 16),
    ]]);
    t.insert('<', vec![path![(5, 4), (1, 9), (5, 14)]]);
    t.insert('>', vec![path![(1, 4), (5, 9), (1, 14)]]);
    t.insert('+', vec![path![(3, 6), (3, 14)], path![(0, 10), (6, 10)]]);
    t.insert('-', vec![path![(0.5, 10), (5.5, 10)]]);
    t.insert('_', vec![path![(0, 18), (6, 18)]]);
    t.insert('*', vec![
        path![(3, 6), (3, 12)],
        path![(0.8, 7.5), (5.2, 10.5)],
        path![(5.2, 7.5), (0.8, 10.5)],
    ]);
    t.insert('/', vec![path![(5.5, 2), (0.5, 16)]]);
    t.insert('\\', vec![path![(0.5, 2), (5.5, 16)]]);
    t.insert('=', vec![path![(0.5, 8), (5.5, 8)], path![(0.5, 12), (5.5, 12)]]);
    t.insert('|', vec![path![(3, 2), (3, 18)]]);
    t.insert('&', vec![path![
        (5.5, 16), (1, 8), (0.8, 4.5), (2.2, 2.2), (4, 3), (4, 5.5), (0.5, 11), (0.5, 14),
        (2, 16), (4, 15.5), (5.8, 12.5),
    ]]);
    t.insert('#', vec![
        path![(2.2, 4), (1.2, 14)],
        path![(4.8, 4), (3.8, 14)],
        path![(0.5, 7.5), (5.8, 7.5)],
        path![(0.2, 11.5), (5.5, 11.5)],
    ]);
    t.insert('%', vec![
        path![(5.5, 2), (0.5, 16)],
        path![(0.8, 2.5), (2.2, 2.5), (2.6, 4), (2.2, 5.6), (0.8, 5.6), (0.3, 4), (0.8, 2.5)],
        path![(3.8, 12.4), (5.2, 12.4), (5.7, 14), (5.2, 15.5), (3.8, 15.5), (3.4, 14), (3.8, 12.4)],
    ]);
    t.insert('@', vec![
        path![
            (5.8, 13.8), (3.8, 15.3), (1.8, 14.8), (0.4, 12.5), (0.4, 7), (2, 4.3), (4.4, 4),
            (6, 5.8), (6, 10.5), (5, 11.8), (4.2, 11),
        ],
        path![(4.2, 6.8), (4.2, 11)],
        path![(4.2, 7.4), (2.9, 6.8), (1.9, 8), (1.9, 10), (3, 11.2), (4.2, 10.4)],
    ]);
    t.insert('^', vec![path![(1, 5.5), (3, 2), (5, 5.5)]]);
    t.insert('~', vec![path![(0.3, 10.8), (1.6, 9.2), (3.1, 9.6), (4.4, 10.4), (5.7, 8.8)]]);
    t.insert('$', vec![
        path![
            (6, 4), (4, 2.5), (2, 2.5), (0.5, 4.5), (0.5, 6), (2, 8), (4, 9), (5.5, 11),
            (5.5, 13.5), (4, 15.5), (2, 15.5), (0, 13.5),
        ],
        path![(3, 1), (3, 17)],
    ]);

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_digits_and_common_punctuation_covered() {
        for ch in ('a'..='z').chain('A'..='Z').chain('0'..='9') {
            assert!(is_supported(ch), "missing glyph for '{}'", ch);
        }
        for ch in "(){}[]<>+-*/=_#%&|\\@^~`$.,:;!?'\"".chars() {
            assert!(is_supported(ch), "missing glyph for '{}'", ch);
        }
    }

    #[test]
    fn test_all_paths_stay_inside_the_design_cell() {
        for ch in supported_characters() {
            for (i, path) in glyph_paths(ch).unwrap().iter().enumerate() {
                assert!(!path.is_empty(), "'{}' path {} is empty", ch, i);
                for &(x, y) in path {
                    assert!(
                        (0.0..=GLYPH_CELL_WIDTH).contains(&x),
                        "'{}' x {} outside cell",
                        ch,
                        x
                    );
                    assert!(
                        (0.0..=GLYPH_CELL_HEIGHT).contains(&y),
                        "'{}' y {} outside cell",
                        ch,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_unsupported_characters_report_unsupported() {
        assert!(!is_supported('日'));
        assert!(!is_supported('€'));
        assert!(glyph_paths('日').is_none());
    }
}
