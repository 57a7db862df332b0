//! CSV export of a valuation series.

use std::io::Write;

use crate::domain::error::HindsightError;
use crate::domain::valuation::SeriesPoint;

/// Write the series as `year,value` rows with a header.
pub fn write_series<W: Write>(writer: W, series: &[SeriesPoint]) -> Result<(), HindsightError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["year", "value"])
        .map_err(io_error)?;
    for point in series {
        csv_writer
            .write_record([point.year.to_string(), point.value.to_string()])
            .map_err(io_error)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn io_error(err: csv::Error) -> HindsightError {
    HindsightError::Io(std::io::Error::other(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(year: u16, value: i64) -> SeriesPoint {
        SeriesPoint { year, value }
    }

    #[test]
    fn writes_header_and_rows() {
        let mut buffer = Vec::new();
        write_series(&mut buffer, &[point(2020, 100), point(2024, 200)]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["year,value", "2020,100", "2024,200"]);
    }

    #[test]
    fn empty_series_writes_header_only() {
        let mut buffer = Vec::new();
        write_series(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "year,value");
    }
}
