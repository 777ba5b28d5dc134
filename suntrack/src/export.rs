//! Result table export.

use crate::error::{Result, TrackError};
use crate::frame::SunRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the result table as CSV with header `Date,X,Y`.
///
/// One row per record, in the given order, coordinates rounded to two
/// decimal places. Frames without a detection are written as
/// `0.00,0.00`, keeping the historical output format. An existing file
/// at the destination is replaced.
///
/// # Errors
/// Returns `TrackError::Export` if the file cannot be created or
/// written.
pub fn write_table(path: &Path, records: &[SunRecord]) -> Result<()> {
    let to_export_error = |source: std::io::Error| TrackError::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_export_error)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Date,X,Y").map_err(to_export_error)?;
    for record in records {
        let (x, y) = match record.center {
            Some(center) => (center.x, center.y),
            None => (0.0, 0.0),
        };
        writeln!(writer, "{},{:.2},{:.2}", record.id, x, y).map_err(to_export_error)?;
    }
    writer.flush().map_err(to_export_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Point;

    fn record(id: &str, center: Option<(f64, f64)>) -> SunRecord {
        SunRecord {
            id: id.to_string(),
            center: center.map(|(x, y)| Point::new(x, y)),
        }
    }

    #[test]
    fn test_write_table_format_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("centers.csv");

        let records = vec![
            record("2020-06-01", Some((100.0, 100.0))),
            record("2020-06-02", None),
            record("2020-06-03", Some((105.456, 103.333))),
        ];
        write_table(&path, &records).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Date,X,Y",
                "2020-06-01,100.00,100.00",
                "2020-06-02,0.00,0.00",
                "2020-06-03,105.46,103.33",
            ]
        );
    }

    #[test]
    fn test_existing_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("centers.csv");
        std::fs::write(&path, "stale contents\nmore stale\n").unwrap();

        write_table(&path, &[record("2020-06-01", Some((1.0, 2.0)))]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Date,X,Y\n2020-06-01,1.00,2.00\n");
    }

    #[test]
    fn test_unwritable_destination_is_an_export_error() {
        let result = write_table(
            Path::new("/nonexistent/output/centers.csv"),
            &[record("2020-06-01", None)],
        );
        assert!(matches!(result, Err(TrackError::Export { .. })));
    }
}
