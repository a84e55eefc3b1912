//! Reply formatting for file listings.

use crate::listing::FileRecord;

const BYTES_PER_MB: f64 = (1024 * 1024) as f64;

/// Render a size in bytes as megabytes with up to two decimal places.
///
/// A single trailing hundredths zero is dropped, so 1 MiB renders as "1.0"
/// and 1234567 bytes as "1.18".
pub fn format_size_mb(size_bytes: u64) -> String {
    let mb = size_bytes as f64 / BYTES_PER_MB;
    let mut out = format!("{mb:.2}");
    if out.ends_with('0') {
        out.pop();
    }
    out
}

/// Build the "Files found:" reply text.
///
/// Callers handle the empty case themselves; this assumes at least one
/// record.
pub fn format_file_list(files: &[FileRecord]) -> String {
    let mut out = String::from("Files found:\n");
    for f in files {
        let name = f.filename.as_deref().unwrap_or("Unnamed");
        out.push_str(&format!("- {} ({} MB)\n", name, format_size_mb(f.size)));
    }
    out
}
