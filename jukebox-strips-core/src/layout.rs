//! Places title strips onto pages as a grid of fixed-size label cells.
//!
//! All measurements are in PDF points with the origin at the bottom-left of the page.

use crate::{DecadeBuckets, TitleStrip, font};

/// Points per centimetre.
pub const CM_TO_PT: f32 = 28.35;

/// A4 width.
pub const PAGE_WIDTH: f32 = 595.0;
/// A4 height.
pub const PAGE_HEIGHT: f32 = 842.0;
/// Margin on every side of the page.
pub const MARGIN: f32 = 10.0;

/// Width of a physical label (7.5cm).
pub const LABEL_WIDTH: f32 = 7.5 * CM_TO_PT;
/// Height of a physical label (2.5cm).
pub const LABEL_HEIGHT: f32 = 2.5 * CM_TO_PT;
/// Label cells per table row.
pub const COLUMNS: usize = 2;

/// Size of label text.
pub const FONT_SIZE: f32 = 10.0;
/// Line height as a multiple of [`FONT_SIZE`].
pub const LEADING: f32 = 1.2;
/// Stroke width of a cell border.
pub const BORDER_WIDTH: f32 = 0.5;
/// Padding on each side of a cell's text.
pub const CELL_PADDING: f32 = 2.0;
/// Left padding of the first cell in every odd row.
pub const OFFSET_ROW_PADDING_LEFT: f32 = 20.0;

/// An axis-aligned rectangle; `x` and `y` are its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}
impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Space between a cell's border and its text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}
impl Padding {
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// A single line of text, positioned by the left end of its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
}

/// One bordered label holding a title strip.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCell {
    /// The border.
    pub rect: Rect,
    pub padding: Padding,
    /// The text, wrapped and centred within the padded area.
    pub lines: Vec<TextLine>,
    /// How many wrapped lines did not fit in the cell's height.
    pub dropped_lines: usize,
}
impl LabelCell {
    fn new(rect: Rect, padding: Padding, strip: &TitleStrip) -> Self {
        let content = Rect {
            x: rect.x + padding.left,
            y: rect.y + padding.bottom,
            width: (rect.width - padding.left - padding.right).max(0.0),
            height: (rect.height - padding.top - padding.bottom).max(0.0),
        };

        let line_height = FONT_SIZE * LEADING;
        let capacity = (content.height / line_height).floor() as usize;

        let mut wrapped: Vec<String> = strip
            .lines()
            .flat_map(|line| font::wrap(line, content.width, FONT_SIZE))
            .collect();
        let dropped_lines = wrapped.len().saturating_sub(capacity);
        wrapped.truncate(capacity);

        let block_height = wrapped.len() as f32 * line_height;
        let block_top = content.top() - (content.height - block_height) / 2.0;
        let glyph_height = FONT_SIZE * (font::ASCENT - font::DESCENT) / 1000.0;
        let ascent = FONT_SIZE * font::ASCENT / 1000.0;

        let lines = wrapped
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let line_top = block_top - index as f32 * line_height;
                let width = font::text_width(&text, FONT_SIZE);
                TextLine {
                    x: content.x + ((content.width - width) / 2.0).max(0.0),
                    baseline: line_top - (line_height - glyph_height) / 2.0 - ascent,
                    text,
                }
            })
            .collect();

        Self {
            rect,
            padding,
            lines,
            dropped_lines,
        }
    }
}

/// A page of the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// The decade whose labels are on this page; `None` for a blank page.
    pub decade: Option<String>,
    pub cells: Vec<LabelCell>,
}

/// Every page of the document, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub pages: Vec<Page>,
}
impl Layout {
    /// Lays out one table per decade, in label order.
    ///
    /// Each decade starts on a new page and is followed by a page break, so the last
    /// page is always blank. A table longer than a page continues on the next one.
    pub fn build(buckets: &DecadeBuckets) -> Self {
        let usable_height = PAGE_HEIGHT - 2.0 * MARGIN;
        let rows_per_page = ((usable_height / LABEL_HEIGHT).floor() as usize).max(1);
        let mut pages = vec![];
        let mut page = Page::default();

        for (decade, strips) in buckets.iter() {
            let mut row_on_page = 0;
            for (index, strip) in strips.iter().enumerate() {
                let row = index / COLUMNS;
                let column = index % COLUMNS;

                if column == 0 && row > 0 {
                    row_on_page += 1;
                    if row_on_page == rows_per_page {
                        pages.push(std::mem::take(&mut page));
                        row_on_page = 0;
                    }
                }

                let rect = Rect {
                    x: MARGIN + column as f32 * LABEL_WIDTH,
                    y: PAGE_HEIGHT - MARGIN - (row_on_page + 1) as f32 * LABEL_HEIGHT,
                    width: LABEL_WIDTH,
                    height: LABEL_HEIGHT,
                };
                let mut padding = Padding::uniform(CELL_PADDING);
                if row % 2 == 1 && column == 0 {
                    padding.left = OFFSET_ROW_PADDING_LEFT;
                }

                let cell = LabelCell::new(rect, padding, strip);
                if cell.dropped_lines > 0 {
                    tracing::warn!(
                        "{decade}: {} line(s) of {:?} do not fit on the label",
                        cell.dropped_lines,
                        strip.text()
                    );
                }

                page.decade.get_or_insert_with(|| decade.to_string());
                page.cells.push(cell);
            }

            // Every decade ends with a page break, including the last.
            pages.push(std::mem::take(&mut page));
        }
        pages.push(page);

        tracing::debug!(
            "laid out {} decades over {} pages",
            buckets.len(),
            pages.len()
        );
        Self { pages }
    }

    /// The number of pages, including the trailing blank one.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every cell on every page.
    pub fn cells(&self) -> impl Iterator<Item = &LabelCell> {
        self.pages.iter().flat_map(|page| page.cells.iter())
    }
}
