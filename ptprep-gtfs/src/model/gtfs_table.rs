use clap::ValueEnum;
use std::fmt::Display;

/// GTFS tables carrying WGS84 point coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GtfsTable {
    Stops,
    Shapes,
}

impl GtfsTable {
    pub fn lat_column(&self) -> &'static str {
        match self {
            GtfsTable::Stops => "stop_lat",
            GtfsTable::Shapes => "shape_pt_lat",
        }
    }

    pub fn lon_column(&self) -> &'static str {
        match self {
            GtfsTable::Stops => "stop_lon",
            GtfsTable::Shapes => "shape_pt_lon",
        }
    }

    /// name of the projected x column, e.g. `stop_x_EPSG3826`
    pub fn x_column(&self, crs_suffix: &str) -> String {
        match self {
            GtfsTable::Stops => format!("stop_x_{crs_suffix}"),
            GtfsTable::Shapes => format!("shape_pt_x_{crs_suffix}"),
        }
    }

    pub fn y_column(&self, crs_suffix: &str) -> String {
        match self {
            GtfsTable::Stops => format!("stop_y_{crs_suffix}"),
            GtfsTable::Shapes => format!("shape_pt_y_{crs_suffix}"),
        }
    }
}

impl Display for GtfsTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GtfsTable::Stops => write!(f, "stops"),
            GtfsTable::Shapes => write!(f, "shapes"),
        }
    }
}
