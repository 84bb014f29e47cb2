//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Header of an OpenDSS generator monitor export.
pub const DEMO_HEADER: [&str; 8] = [
    "hour",
    "t(sec)",
    "Frequency (Hz)",
    "Theta (Deg)",
    "Vd",
    "PShaft",
    "dSpeed (Deg/sec)",
    "dTheta (Deg)",
];

/// Three data rows matching [`DEMO_HEADER`].
pub const DEMO_ROWS: [[&str; 8]; 3] = [
    ["0", "0.001", "60", "41.7727", "1.16259", "2.00E+09", "-9.26E-05", "-9.00E-10"],
    ["0", "0.002", "60", "41.7727", "1.16259", "2.00E+09", "-9.26E-05", "-2.43E-09"],
    ["0", "0.003", "60.0001", "41.7728", "1.16259", "2.00E+09", "-9.26E-05", "-4.04E-09"],
];

/// Demo export joined with `sep`.
pub fn demo_text(sep: &str) -> String {
    let mut out = DEMO_HEADER.join(sep);
    out.push('\n');
    for row in DEMO_ROWS {
        out.push_str(&row.join(sep));
        out.push('\n');
    }
    out
}

/// Fresh temporary directory; removed when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("temp dir should be created")
}

/// Writes `contents` to `dir/file_name` and returns the path.
pub fn write_fixture(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("fixture should be written");
    path
}

/// Path as the `&str` dataset name the loader takes.
pub fn name(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

/// The sample export shipped in `data/`.
pub fn sample_dataset() -> String {
    format!(
        "{}/data/SimpleDemo_Mon_g1out_1",
        env!("CARGO_MANIFEST_DIR")
    )
}
