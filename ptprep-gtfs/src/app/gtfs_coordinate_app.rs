use super::GtfsCliError;
use crate::model::{convert_coordinates, ConversionCounts, GtfsTable, TargetCrs, DEFAULT_TARGET_CRS};
use clap::Parser;
use ptprep_core::fs_ops;
use std::path::PathBuf;

/// projects the WGS84 coordinates of a GTFS stops or shapes file into a
/// projected CRS, appending them as `<x|y>_<CRS>` columns
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ConvertGtfsCoordinatesApp {
    #[arg(value_enum, ignore_case = true, help = "GTFS table in the input file")]
    pub table: GtfsTable,
    #[arg(help = "GTFS stops.txt or shapes.txt file")]
    pub input_file: PathBuf,
    #[arg(help = "output CSV path, gzip compressed when ending in .gz")]
    pub output_file: PathBuf,
    #[arg(default_value = DEFAULT_TARGET_CRS, help = "target CRS, an EPSG code or a proj string")]
    pub target_crs: String,
}

impl ConvertGtfsCoordinatesApp {
    pub fn run(&self) -> Result<ConversionCounts, GtfsCliError> {
        if !self.input_file.is_file() {
            return Err(GtfsCliError::MissingInput(self.input_file.clone()));
        }
        let crs = TargetCrs::from_name(&self.target_crs)?;
        fs_ops::create_parent_dirs(&self.output_file).map_err(|source| {
            GtfsCliError::OutputDirectory {
                path: self.output_file.clone(),
                source,
            }
        })?;
        let counts = convert_coordinates(self.table, &self.input_file, &self.output_file, &crs)?;
        Ok(counts)
    }
}
