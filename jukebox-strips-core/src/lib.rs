//! Turns a CSV listing of songs into a printable PDF of jukebox title strips,
//! grouped by decade and laid out as a grid of label-sized cells.
//!
//! The pipeline is strictly one-way: [`csv`] splits lines, [`strip`] turns rows into
//! [`TitleStrip`]s, [`DecadeBuckets`] groups them, [`layout`] places them on pages and
//! [`render`] writes the PDF.

pub mod csv;
pub mod font;
pub mod layout;
pub mod render;
pub mod strip;

mod group;
pub use group::DecadeBuckets;

pub use layout::Layout;
pub use render::{RenderError, RenderResult, render_pdf, write_title_strips};
pub use strip::{Decade, SongRecord, TitleStrip};
