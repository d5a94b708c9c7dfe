//! Working out which CSV file to read, and where the PDF goes.

use std::{
    io::{BufRead, IsTerminal as _, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal,
};

/// Read from the application directory when no path is given.
pub const DEFAULT_CSV_FILENAME: &str = "songs.csv";
/// Written to the application directory.
pub const OUTPUT_FILENAME: &str = "TitleStrips.pdf";

/// The directory containing the running executable.
pub fn app_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable {} has no parent directory", exe.display()))
}

/// Picks the CSV file to read.
///
/// An `explicit` path that exists is used as-is. Otherwise the user is asked for one on
/// `input`; surrounding quotes and spaces are removed (as left by dragging a file onto a
/// terminal), and an empty answer selects [`DEFAULT_CSV_FILENAME`] in `app_dir`.
///
/// The returned path is not guaranteed to exist.
pub fn resolve_csv_path(
    explicit: Option<&Path>,
    app_dir: &Path,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit.filter(|p| p.exists()) {
        writeln!(output, "Using dropped file: {}", path.display())?;
        return Ok(path.to_path_buf());
    }
    if let Some(path) = explicit {
        tracing::warn!(
            "{} does not exist, asking for a path instead",
            path.display()
        );
    }

    writeln!(
        output,
        "Please drag and drop your CSV file into this window, then press Enter:"
    )?;
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read the CSV path")?;

    let typed = clean_typed_path(&line);
    if typed.trim().is_empty() {
        let path = app_dir.join(DEFAULT_CSV_FILENAME);
        writeln!(
            output,
            "No file provided. Using default: {}",
            path.display()
        )?;
        return Ok(path);
    }
    Ok(PathBuf::from(typed))
}

fn clean_typed_path(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
        .trim_matches(|c| c == '"' || c == ' ')
}

/// Blocks until a key is pressed. Returns immediately if stdin is not a terminal.
pub fn wait_for_key() -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() {
        return Ok(());
    }

    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;
    Ok(result?)
}
