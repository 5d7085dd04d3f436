//! CSV persistence of the result table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::result::ResultTable;

pub const CSV_HEADER: &str = "size,brute_force_seconds,brute_force_is_estimated,sort_pointers_seconds,hash_table_seconds,pair_found";

/// Write the table to `out`. An unavailable brute-force time is an empty cell.
pub fn write_csv<W: Write>(out: &mut W, table: &ResultTable) -> std::io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;

    for row in table.rows() {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            row.size,
            row.brute_force_seconds().map(|s| s.to_string()).unwrap_or_default(),
            row.brute_force_is_estimated(),
            row.sort_pointers_seconds,
            row.hash_table_seconds,
            row.pair_found,
        )?;
    }
    Ok(())
}

/// Export the table to a CSV file at `path`.
pub fn export_csv(path: &Path, table: &ResultTable) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_csv(&mut file, table)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extrapolate::CalibrationPoint;
    use crate::result::{BruteForceTiming, TimingResult};

    fn row(size: usize, brute_force: BruteForceTiming) -> TimingResult {
        TimingResult {
            size,
            brute_force,
            sort_pointers_seconds: 0.5,
            hash_table_seconds: 0.25,
            pair_found: false,
        }
    }

    #[test]
    fn test_write_csv() {
        let mut table = ResultTable::new();
        table.push(row(10, BruteForceTiming::Measured(1.5)));
        table.push(row(20, BruteForceTiming::Unavailable));
        table.push(row(
            40,
            BruteForceTiming::Estimated {
                seconds: 6.0,
                basis: CalibrationPoint::new(10, 1.5),
            },
        ));

        let mut out = Vec::new();
        write_csv(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "10,1.5,false,0.5,0.25,false");
        assert_eq!(lines[2], "20,,true,0.5,0.25,false");
        assert_eq!(lines[3], "40,6,true,0.5,0.25,false");
    }

    #[test]
    fn test_export_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        export_csv(&path, &ResultTable::new()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), CSV_HEADER);
    }
}
