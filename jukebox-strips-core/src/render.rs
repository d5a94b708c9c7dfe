use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Pt, Rgb,
};

use crate::{
    DecadeBuckets,
    layout::{self, LabelCell, Layout, Page},
};

const DOCUMENT_TITLE: &str = "Jukebox Title Strips";

#[derive(Debug)]
/// An error that can occur when writing the PDF.
pub enum RenderError {
    /// The output file or its directory could not be created or written.
    Io(std::io::Error),
    /// The PDF could not be assembled or serialised.
    Pdf(printpdf::Error),
}
impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "I/O error: {e}"),
            RenderError::Pdf(e) => write!(f, "PDF error: {e}"),
        }
    }
}
impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            RenderError::Pdf(e) => Some(e),
        }
    }
}
impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}
impl From<printpdf::Error> for RenderError {
    fn from(e: printpdf::Error) -> Self {
        RenderError::Pdf(e)
    }
}
/// A result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Lays out `buckets` and writes them to `path` as a PDF.
///
/// Returns the layout that was drawn.
pub fn write_title_strips(buckets: &DecadeBuckets, path: &Path) -> RenderResult<Layout> {
    let layout = Layout::build(buckets);
    render_pdf(&layout, path)?;
    Ok(layout)
}

/// Draws `layout` and writes it to `path`, creating the parent directory if needed.
pub fn render_pdf(layout: &Layout, path: &Path) -> RenderResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let page_width = Mm::from(Pt(layout::PAGE_WIDTH));
    let page_height = Mm::from(Pt(layout::PAGE_HEIGHT));

    let mut pages = layout.pages.iter();
    let first = pages.next();
    let (doc, page_index, layer_index) = PdfDocument::new(
        DOCUMENT_TITLE.to_string(),
        page_width,
        page_height,
        layer_name(first),
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    if let Some(page) = first {
        let layer = doc.get_page(page_index).get_layer(layer_index);
        draw_page(&layer, page, &font);
    }
    for page in pages {
        let (page_index, layer_index) =
            doc.add_page(page_width, page_height, layer_name(Some(page)));
        let layer = doc.get_page(page_index).get_layer(layer_index);
        draw_page(&layer, page, &font);
    }

    // The writer is dropped (and the file closed) on every path out of here.
    let mut writer = BufWriter::new(File::create(path)?);
    doc.save(&mut writer)?;
    writer.flush()?;

    tracing::info!(
        "wrote {} pages ({} labels) to {}",
        layout.page_count(),
        layout.cells().count(),
        path.display()
    );
    Ok(())
}

fn layer_name(page: Option<&Page>) -> String {
    page.and_then(|p| p.decade.clone())
        .unwrap_or_else(|| "Blank".to_string())
}

fn draw_page(layer: &PdfLayerReference, page: &Page, font: &IndirectFontRef) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(layout::BORDER_WIDTH);
    for cell in &page.cells {
        draw_cell(layer, cell, font);
    }
}

fn draw_cell(layer: &PdfLayerReference, cell: &LabelCell, font: &IndirectFontRef) {
    let r = cell.rect;
    let corner = |x: f32, y: f32| (Point::new(Mm::from(Pt(x)), Mm::from(Pt(y))), false);
    layer.add_line(Line {
        points: vec![
            corner(r.x, r.y),
            corner(r.right(), r.y),
            corner(r.right(), r.top()),
            corner(r.x, r.top()),
        ],
        is_closed: true,
    });

    for line in &cell.lines {
        layer.use_text(
            line.text.as_str(),
            layout::FONT_SIZE,
            Mm::from(Pt(line.x)),
            Mm::from(Pt(line.baseline)),
            font,
        );
    }
}
