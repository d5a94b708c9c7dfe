//! Metrics for the built-in Helvetica face, used to centre and wrap label text.

/// Advance widths of printable ASCII (`' '..='~'`) in thousandths of an em.
#[rustfmt::skip]
const HELVETICA_ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Used for anything outside printable ASCII.
const DEFAULT_WIDTH: u16 = 556;
const ELLIPSIS_WIDTH: u16 = 1000;

/// Ascender height in thousandths of an em.
pub const ASCENT: f32 = 718.0;
/// Descender depth (negative) in thousandths of an em.
pub const DESCENT: f32 = -207.0;

fn char_width(c: char) -> u16 {
    match c {
        ' '..='~' => HELVETICA_ASCII_WIDTHS[c as usize - ' ' as usize],
        '…' => ELLIPSIS_WIDTH,
        _ => DEFAULT_WIDTH,
    }
}

/// The width of `text` in points at `font_size`.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 * font_size / 1000.0
}

/// Greedily wraps `text` on spaces so that no line is wider than `max_width`.
///
/// Runs of spaces collapse to one at a break. A single word wider than `max_width`
/// is split between characters. Always returns at least one line.
pub fn wrap(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let fits = |s: &str| text_width(s, font_size) <= max_width;
    if fits(text) {
        return vec![text.to_string()];
    }

    let mut lines = vec![];
    let mut current = String::new();
    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if fits(word) {
            current = word.to_string();
            continue;
        }

        // The word alone is too wide; break it wherever it overflows.
        for c in word.chars() {
            current.push(c);
            if !fits(&current) && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(c);
            }
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
