use std::path::Path;

/// Opens `path` with the system's default handler. Failures are reported, never fatal.
pub fn try_open_pdf(path: &Path) {
    if !path.exists() {
        println!("PDF not found to open.");
        return;
    }

    println!("Opening PDF: {}", path.display());
    if let Err(e) = open::that_detached(path) {
        tracing::warn!("failed to launch viewer for {}: {e}", path.display());
        println!("Could not open PDF automatically: {e}");
    }
}
