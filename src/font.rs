//! A small embedded stroke font: each glyph is a set of polylines on
//! an integer grid, drawn as line segments. Coordinates run from the
//! baseline (y = 0) up to the cap line (y = 12); layout normalizes by
//! [`CAP_HEIGHT`] so rendered text is 1.0 world units tall.

use crate::bounds::Rect;

/// Cap height of the glyph grid, in font units
pub const CAP_HEIGHT: f64 = 12.0;

/// A single glyph: polyline strokes plus the pen advance to the next
/// glyph, all in font units.
pub struct Glyph {
    pub advance: u8,
    pub strokes: &'static [&'static [(i8, i8)]],
}

const GLYPH_A: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 0), (4, 12), (8, 0)], &[(2, 6), (6, 6)]],
};
const GLYPH_B: Glyph = Glyph {
    advance: 10,
    strokes: &[
        &[(0, 0), (0, 12), (6, 12), (7, 11), (7, 7), (6, 6), (0, 6)],
        &[(6, 6), (7, 5), (7, 1), (6, 0), (0, 0)],
    ],
};
const GLYPH_C: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(8, 2), (6, 0), (2, 0), (0, 2), (0, 10), (2, 12), (6, 12), (8, 10)]],
};
const GLYPH_D: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 0), (0, 12), (5, 12), (8, 9), (8, 3), (5, 0), (0, 0)]],
};
const GLYPH_E: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(8, 0), (0, 0), (0, 12), (8, 12)], &[(0, 6), (6, 6)]],
};
const GLYPH_F: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 0), (0, 12), (8, 12)], &[(0, 6), (6, 6)]],
};
const GLYPH_G: Glyph = Glyph {
    advance: 10,
    strokes: &[&[
        (8, 10),
        (6, 12),
        (2, 12),
        (0, 10),
        (0, 2),
        (2, 0),
        (6, 0),
        (8, 2),
        (8, 5),
        (4, 5),
    ]],
};
const GLYPH_H: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 0), (0, 12)], &[(8, 0), (8, 12)], &[(0, 6), (8, 6)]],
};
const GLYPH_I: Glyph = Glyph {
    advance: 8,
    strokes: &[&[(1, 0), (5, 0)], &[(3, 0), (3, 12)], &[(1, 12), (5, 12)]],
};
const GLYPH_J: Glyph = Glyph {
    advance: 9,
    strokes: &[&[(7, 12), (7, 2), (5, 0), (2, 0), (0, 2)]],
};
const GLYPH_K: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 0), (0, 12)], &[(8, 12), (0, 5)], &[(3, 8), (8, 0)]],
};
const GLYPH_L: Glyph = Glyph {
    advance: 9,
    strokes: &[&[(0, 12), (0, 0), (8, 0)]],
};
const GLYPH_M: Glyph = Glyph {
    advance: 11,
    strokes: &[&[(0, 0), (0, 12), (4, 5), (8, 12), (8, 0)]],
};
const GLYPH_N: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 0), (0, 12), (8, 0), (8, 12)]],
};
const GLYPH_O: Glyph = Glyph {
    advance: 10,
    strokes: &[&[
        (2, 0),
        (0, 2),
        (0, 10),
        (2, 12),
        (6, 12),
        (8, 10),
        (8, 2),
        (6, 0),
        (2, 0),
    ]],
};
const GLYPH_P: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 0), (0, 12), (6, 12), (8, 10), (8, 8), (6, 6), (0, 6)]],
};
const GLYPH_Q: Glyph = Glyph {
    advance: 10,
    strokes: &[
        &[
            (2, 0),
            (0, 2),
            (0, 10),
            (2, 12),
            (6, 12),
            (8, 10),
            (8, 2),
            (6, 0),
            (2, 0),
        ],
        &[(5, 3), (8, 0)],
    ],
};
const GLYPH_R: Glyph = Glyph {
    advance: 10,
    strokes: &[
        &[(0, 0), (0, 12), (6, 12), (8, 10), (8, 8), (6, 6), (0, 6)],
        &[(3, 6), (8, 0)],
    ],
};
const GLYPH_S: Glyph = Glyph {
    advance: 10,
    strokes: &[&[
        (8, 10),
        (6, 12),
        (2, 12),
        (0, 10),
        (0, 8),
        (2, 6),
        (6, 6),
        (8, 4),
        (8, 2),
        (6, 0),
        (2, 0),
        (0, 2),
    ]],
};
const GLYPH_T: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 12), (8, 12)], &[(4, 12), (4, 0)]],
};
const GLYPH_U: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 12), (0, 2), (2, 0), (6, 0), (8, 2), (8, 12)]],
};
const GLYPH_V: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 12), (4, 0), (8, 12)]],
};
const GLYPH_W: Glyph = Glyph {
    advance: 12,
    strokes: &[&[(0, 12), (2, 0), (5, 8), (8, 0), (10, 12)]],
};
const GLYPH_X: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 0), (8, 12)], &[(0, 12), (8, 0)]],
};
const GLYPH_Y: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 12), (4, 6), (8, 12)], &[(4, 6), (4, 0)]],
};
const GLYPH_Z: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 12), (8, 12), (0, 0), (8, 0)]],
};
const GLYPH_SPACE: Glyph = Glyph {
    advance: 8,
    strokes: &[],
};
/// Box outline standing in for any character the font lacks
const GLYPH_FALLBACK: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(0, 0), (8, 0), (8, 12), (0, 12), (0, 0)]],
};

/// Returns the glyph for a character, case-insensitively; characters
/// outside A-Z and space map to the fallback box.
pub fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        'A' => &GLYPH_A,
        'B' => &GLYPH_B,
        'C' => &GLYPH_C,
        'D' => &GLYPH_D,
        'E' => &GLYPH_E,
        'F' => &GLYPH_F,
        'G' => &GLYPH_G,
        'H' => &GLYPH_H,
        'I' => &GLYPH_I,
        'J' => &GLYPH_J,
        'K' => &GLYPH_K,
        'L' => &GLYPH_L,
        'M' => &GLYPH_M,
        'N' => &GLYPH_N,
        'O' => &GLYPH_O,
        'P' => &GLYPH_P,
        'Q' => &GLYPH_Q,
        'R' => &GLYPH_R,
        'S' => &GLYPH_S,
        'T' => &GLYPH_T,
        'U' => &GLYPH_U,
        'V' => &GLYPH_V,
        'W' => &GLYPH_W,
        'X' => &GLYPH_X,
        'Y' => &GLYPH_Y,
        'Z' => &GLYPH_Z,
        ' ' => &GLYPH_SPACE,
        _ => &GLYPH_FALLBACK,
    }
}

/// Total advance width of `text` in font units
pub fn measure(text: &str) -> f64 {
    text.chars().map(|c| glyph(c).advance as f64).sum()
}

/// Model-space bounding box of the laid-out text: anchored at the
/// origin, height normalized to 1.0.
pub fn model_box(text: &str) -> Rect {
    Rect::new(0.0, 0.0, measure(text) / CAP_HEIGHT, 1.0)
}

/// Flattens `text` into model-space line segments, the pen advancing
/// left to right from the origin. Coordinates are normalized so the
/// cap height is 1.0.
pub fn layout_segments(text: &str) -> Vec<((f64, f64), (f64, f64))> {
    let inv = 1.0 / CAP_HEIGHT;
    let mut segments = Vec::new();
    let mut pen_x = 0.0;

    for c in text.chars() {
        let g = glyph(c);
        for stroke in g.strokes {
            for pair in stroke.windows(2) {
                let (x0, y0) = (pair[0].0 as f64, pair[0].1 as f64);
                let (x1, y1) = (pair[1].0 as f64, pair[1].1 as f64);
                segments.push((
                    ((pen_x + x0) * inv, y0 * inv),
                    ((pen_x + x1) * inv, y1 * inv),
                ));
            }
        }
        pen_x += g.advance as f64;
    }

    segments
}
