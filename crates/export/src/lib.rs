//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod json {
    use std::io::{self, Write};
    use std::path::Path;

    use serde::Serialize;

    /// Pretty-print `value` as JSON to `path` (`-` for stdout).
    pub fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> io::Result<()> {
        let mut writer = super::writer_for_path(path)?;
        serde_json::to_writer_pretty(&mut writer, value)?;
        writeln!(writer)?;
        writer.flush()
    }
}

pub mod track {
    use std::io;
    use std::path::Path;

    use serde::Serialize;

    /// One CSV row per path sample.
    #[derive(Debug, Clone, Serialize)]
    pub struct Row {
        pub elapsed_minutes: i64,
        pub time_utc: String,
        pub lat: f64,
        pub lon: f64,
        pub distance_km: f64,
        pub subsolar_lat: f64,
        pub subsolar_lon: f64,
        pub bearing_to_destination: f64,
        pub bearing_to_sun: f64,
        pub angle_difference: f64,
        pub side: &'static str,
    }

    /// Write the rows with a header line to `path` (`-` for stdout).
    pub fn write_rows(path: &Path, rows: &[Row]) -> io::Result<()> {
        let writer = super::writer_for_path(path)?;
        let mut csv_writer = csv::Writer::from_writer(writer);
        if rows.is_empty() {
            csv_writer.write_record(HEADER)?;
        }
        for row in rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Column names in file order.
    pub const HEADER: [&str; 11] = [
        "elapsed_minutes",
        "time_utc",
        "lat",
        "lon",
        "distance_km",
        "subsolar_lat",
        "subsolar_lon",
        "bearing_to_destination",
        "bearing_to_sun",
        "angle_difference",
        "side",
    ];
}
