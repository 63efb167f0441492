//! projection of GTFS stop and shape coordinates into a metric CRS.
pub mod app;
pub mod model;
