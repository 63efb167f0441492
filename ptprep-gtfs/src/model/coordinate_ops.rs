use super::{GtfsCoordinateError, GtfsTable, TargetCrs};
use csv::StringRecord;
use kdam::{Bar, BarExt};
use ptprep_core::write_atomic;
use std::path::Path;

/// rows with and without a projected coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionCounts {
    pub converted: usize,
    pub skipped: usize,
}

/// copies a GTFS table, appending (or overwriting) the projected x and y
/// columns for the target CRS. every other column is kept as read. fails
/// before any output is created when the latitude or longitude column is
/// missing.
pub fn convert_coordinates(
    table: GtfsTable,
    input_file: &Path,
    output_file: &Path,
    crs: &TargetCrs,
) -> Result<ConversionCounts, GtfsCoordinateError> {
    let input_path = input_file.display().to_string();
    let output_path = output_file.display().to_string();
    let read_error = |source: csv::Error| GtfsCoordinateError::CsvReadError {
        filepath: input_path.clone(),
        source,
    };
    let write_error = |source: csv::Error| GtfsCoordinateError::CsvWriteError {
        filepath: output_path.clone(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(input_file)
        .map_err(read_error)?;
    let mut header = reader.headers().map_err(read_error)?.clone();
    let (lat_idx, lon_idx) = match (
        column_index(&header, table.lat_column()),
        column_index(&header, table.lon_column()),
    ) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return Err(GtfsCoordinateError::MissingColumns {
                filepath: input_path.clone(),
                lat: table.lat_column().to_string(),
                lon: table.lon_column().to_string(),
            })
        }
    };
    let suffix = crs.column_suffix();
    let x_idx = append_column(&mut header, &table.x_column(&suffix));
    let y_idx = append_column(&mut header, &table.y_column(&suffix));

    let mut bar = Bar::builder()
        .desc(format!("projecting {table} to {}", crs.name()))
        .unit(" rows")
        .build()
        .map_err(GtfsCoordinateError::InternalError)?;

    let mut counts = ConversionCounts::default();
    write_atomic(output_file, |sink| {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record(&header).map_err(write_error)?;
        for record in reader.records() {
            let record = record.map_err(read_error)?;
            let mut row: Vec<String> = (0..header.len())
                .map(|idx| record.get(idx).unwrap_or_default().to_string())
                .collect();
            let projected = parse_coordinate(&record, lon_idx)
                .zip(parse_coordinate(&record, lat_idx))
                .and_then(|(lon, lat)| crs.project(lon, lat));
            match projected {
                Some((x, y)) => {
                    row[x_idx] = format_coordinate(x);
                    row[y_idx] = format_coordinate(y);
                    counts.converted += 1;
                }
                None => {
                    row[x_idx] = String::new();
                    row[y_idx] = String::new();
                    counts.skipped += 1;
                }
            }
            writer.write_record(&row).map_err(write_error)?;
            let _ = bar.update(1);
        }
        eprintln!();
        writer.flush()?;
        Ok::<(), GtfsCoordinateError>(())
    })?;

    log::info!(
        "converted {} rows from {} to {} (skipped {} rows) -> {}",
        counts.converted,
        input_path,
        crs.name(),
        counts.skipped,
        output_path
    );
    Ok(counts)
}

/// formats a projected coordinate with at most three decimals and no
/// trailing zeros, e.g. `302141.5`
pub fn format_coordinate(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        String::from("0")
    } else {
        trimmed.to_string()
    }
}

fn column_index(header: &StringRecord, name: &str) -> Option<usize> {
    header.iter().position(|column| column == name)
}

fn append_column(header: &mut StringRecord, name: &str) -> usize {
    match column_index(header, name) {
        Some(idx) => idx,
        None => {
            header.push_field(name);
            header.len() - 1
        }
    }
}

fn parse_coordinate(record: &StringRecord, idx: usize) -> Option<f64> {
    record.get(idx)?.trim().parse::<f64>().ok()
}
