// src/data_input/log_parser.rs

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::channel_names::channel_name;
use crate::constants::{CHANNEL_COUNT, FIRST_CHANNEL_COLUMN, HEADER_LINES, MIN_COLUMNS};
use crate::data_input::sample_matrix::SampleMatrix;
use crate::error::RenderError;

/// Parses the sensor log CSV into a channel-major `SampleMatrix`.
///
/// The first `HEADER_LINES` lines are skipped unread. Every remaining
/// non-blank line must carry at least `MIN_COLUMNS` fields, and the fields
/// `FIRST_CHANNEL_COLUMN..MIN_COLUMNS` (ax, ay, az, gx, gy, gz) must parse
/// as finite floating-point numbers. Any violation aborts the whole load.
pub fn parse_sensor_log(input_file_path: &Path) -> Result<SampleMatrix, RenderError> {
    let unavailable = |source: std::io::Error| RenderError::InputUnavailable {
        path: input_file_path.to_path_buf(),
        source,
    };

    let file = File::open(input_file_path).map_err(unavailable)?;
    let mut reader = BufReader::new(file);

    // --- Skip Header Lines ---
    // Raw bytes: header text is never decoded, so any encoding is accepted.
    let mut header_line: Vec<u8> = Vec::new();
    for line_number in 1..=HEADER_LINES {
        header_line.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut header_line)
            .map_err(unavailable)?;
        if bytes_read == 0 {
            return Err(RenderError::InputMalformed {
                line: line_number,
                reason: format!("expected {HEADER_LINES} header lines, file ended early"),
            });
        }
        debug!(
            "Skipping header line {}: {}",
            line_number,
            String::from_utf8_lossy(&header_line).trim_end()
        );
    }

    // --- Data Reading ---
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records: Vec<[f64; CHANNEL_COUNT]> = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| csv_error(input_file_path, e))?;
        let line = record
            .position()
            .map(|p| HEADER_LINES + p.line() as usize)
            .unwrap_or(HEADER_LINES + records.len() + 1);
        records.push(parse_channels(&record, line)?);
    }

    if records.is_empty() {
        return Err(RenderError::InputMalformed {
            line: HEADER_LINES + 1,
            reason: "no data rows after the header lines".to_string(),
        });
    }

    info!(
        "Read {} records from '{}'.",
        records.len(),
        input_file_path.display()
    );

    // The file handle was moved into the csv reader and is released here.
    Ok(SampleMatrix::from_records(&records))
}

fn parse_channels(record: &StringRecord, line: usize) -> Result<[f64; CHANNEL_COUNT], RenderError> {
    if record.len() < MIN_COLUMNS {
        return Err(RenderError::InputMalformed {
            line,
            reason: format!(
                "expected at least {} columns, found {}",
                MIN_COLUMNS,
                record.len()
            ),
        });
    }

    let mut values = [0.0; CHANNEL_COUNT];
    for (channel, value) in values.iter_mut().enumerate() {
        let column = FIRST_CHANNEL_COLUMN + channel;
        let field = record.get(column).unwrap_or("");
        *value = field
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RenderError::InputMalformed {
                line,
                reason: format!(
                    "column {} ({}) is not a finite number: '{}'",
                    column,
                    channel_name(channel),
                    field
                ),
            })?;
    }
    Ok(values)
}

fn csv_error(input_file_path: &Path, err: csv::Error) -> RenderError {
    let line = err
        .position()
        .map(|p| HEADER_LINES + p.line() as usize)
        .unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(source) => RenderError::InputUnavailable {
            path: input_file_path.to_path_buf(),
            source,
        },
        kind => RenderError::InputMalformed {
            line,
            reason: format!("{kind:?}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_log_bytes(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents).expect("write temp file");
        file
    }

    fn write_log(contents: &str) -> NamedTempFile {
        write_log_bytes(contents.as_bytes())
    }

    const HEADERS: &str = "Device,Session\nid,t,flag,seq,ax,ay,az,gx,gy,gz\n";

    #[test]
    fn test_parse_selects_columns_four_through_nine() {
        let file = write_log(&format!(
            "{HEADERS}a,b,c,d,1.5,2.5,3.5,4.5,5.5,6.5\na,b,c,d,-1,-2,-3,-4,-5,-6,extra\n"
        ));
        let matrix = parse_sensor_log(file.path()).unwrap();
        assert_eq!(matrix.shape(), (6, 2));
        assert_eq!(matrix.channel(0).to_vec(), vec![1.5, -1.0]);
        assert_eq!(matrix.channel(5).to_vec(), vec![6.5, -6.0]);
    }

    #[test]
    fn test_parse_handles_crlf_and_blank_lines() {
        let file = write_log(
            "h1\r\nh2\r\n0,0,0,0,1,2,3,4,5,6\r\n\r\n0,0,0,0, 7 ,8,9,10,11,12\r\n",
        );
        let matrix = parse_sensor_log(file.path()).unwrap();
        assert_eq!(matrix.num_records(), 2);
        assert_eq!(matrix.channel(0).to_vec(), vec![1.0, 7.0]);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_sensor_log(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, RenderError::InputUnavailable { .. }));
    }

    #[test]
    fn test_short_row_reports_line() {
        let file = write_log(&format!(
            "{HEADERS}0,0,0,0,1,2,3,4,5,6\n0,0,0,0,1,2,3,4,5\n"
        ));
        match parse_sensor_log(file.path()).unwrap_err() {
            RenderError::InputMalformed { line, reason } => {
                assert_eq!(line, 4);
                assert!(reason.contains("found 9"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_field_is_malformed() {
        let file = write_log(&format!("{HEADERS}0,0,0,0,1,2,x,4,5,6\n"));
        match parse_sensor_log(file.path()).unwrap_err() {
            RenderError::InputMalformed { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("az"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_header_is_skipped() {
        let file = write_log_bytes(
            b"Sensor export\nt,a,b,c,ax,ay,az,gx (\xB0/s),gy,gz\n0,0,0,0,1,2,3,4,5,6\n",
        );
        let matrix = parse_sensor_log(file.path()).unwrap();
        assert_eq!(matrix.shape(), (6, 1));
        assert_eq!(matrix.channel(3).to_vec(), vec![4.0]);
    }

    #[test]
    fn test_non_finite_values_are_malformed() {
        for bad in ["inf", "-inf", "NaN"] {
            let file = write_log(&format!(
                "{HEADERS}0,0,0,0,1,2,3,4,5,6\n0,0,0,0,1,2,3,4,5,{bad}\n"
            ));
            match parse_sensor_log(file.path()).unwrap_err() {
                RenderError::InputMalformed { line, reason } => {
                    assert_eq!(line, 4);
                    assert!(reason.contains("column 9 (gz)"), "{reason}");
                }
                other => panic!("unexpected error for '{bad}': {other:?}"),
            }
        }
    }

    #[test]
    fn test_headers_only_is_malformed() {
        let file = write_log(HEADERS);
        assert!(matches!(
            parse_sensor_log(file.path()).unwrap_err(),
            RenderError::InputMalformed { .. }
        ));
    }

    #[test]
    fn test_truncated_header_is_malformed() {
        let file = write_log("only one line\n");
        assert!(matches!(
            parse_sensor_log(file.path()).unwrap_err(),
            RenderError::InputMalformed { line: 2, .. }
        ));
    }
}

// src/data_input/log_parser.rs
