mod gtfs_cli_error;
mod gtfs_coordinate_app;

pub use gtfs_cli_error::GtfsCliError;
pub use gtfs_coordinate_app::ConvertGtfsCoordinatesApp;
