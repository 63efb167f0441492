mod coordinate_ops;
mod gtfs_coordinate_error;
mod gtfs_table;
mod target_crs;

pub use coordinate_ops::{convert_coordinates, format_coordinate, ConversionCounts};
pub use gtfs_coordinate_error::GtfsCoordinateError;
pub use gtfs_table::GtfsTable;
pub use target_crs::{TargetCrs, DEFAULT_TARGET_CRS};
