mod config;
mod input;
mod viewer;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use config::Config;
use jukebox_strips_core::{DecadeBuckets, csv, write_title_strips};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file listing the songs to print; asked for interactively if missing
    csv: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("jukebox_strips=warn,jukebox_strips_core=warn")
            }),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let app_dir = input::app_dir()?;
    let config = Config::load(&app_dir)?;

    let csv_path = input::resolve_csv_path(
        args.csv.as_deref(),
        &app_dir,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
    )?;
    if !csv_path.exists() {
        println!("CSV file not found at: {}", csv_path.display());
        if config.general.pause_on_missing_input {
            println!("Press any key to exit...");
            input::wait_for_key()?;
        }
        return Ok(());
    }

    std::fs::create_dir_all(&app_dir)
        .with_context(|| format!("Failed to create directory {}", app_dir.display()))?;
    let pdf_path = app_dir.join(input::OUTPUT_FILENAME);
    println!("Will save PDF to: {}", pdf_path.display());

    if generate(&csv_path, &pdf_path)? == Outcome::Skipped {
        return Ok(());
    }

    if config.general.open_pdf {
        viewer::try_open_pdf(&pdf_path);
    }
    println!("\nPDF created successfully at:\n{}", pdf_path.display());

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Written,
    /// There was nothing to print, so no PDF was written.
    Skipped,
}

/// Reads `csv_path` and writes its title strips to `pdf_path`.
///
/// Files with no rows after the header, or with no usable rows, are reported on the
/// console and leave `pdf_path` untouched.
fn generate(csv_path: &Path, pdf_path: &Path) -> anyhow::Result<Outcome> {
    let bytes = std::fs::read(csv_path)
        .with_context(|| format!("Failed to read {}", csv_path.display()))?;
    let contents = String::from_utf8_lossy(&bytes);
    if !csv::has_data_lines(&contents) {
        println!("The CSV file is empty or missing rows.");
        return Ok(Outcome::Skipped);
    }

    println!("Generating jukebox title strips...\n");
    let buckets = DecadeBuckets::from_csv(&contents, |decade, strip| {
        println!("{decade}: {strip}");
    });
    if buckets.is_empty() {
        println!(
            "None of the {} rows had both an artist and a title; no PDF was created.",
            buckets.rows_read()
        );
        return Ok(Outcome::Skipped);
    }
    println!("All title strips grouped by decade!");

    println!("Writing PDF to: {}", pdf_path.display());
    let layout = write_title_strips(&buckets, pdf_path)
        .with_context(|| format!("Failed to write {}", pdf_path.display()))?;
    println!(
        "PDF successfully created! ({} labels over {} pages)",
        buckets.strip_count(),
        layout.page_count()
    );

    Ok(Outcome::Written)
}
