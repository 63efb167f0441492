//! streaming conversion of OpenStreetMap PBF extracts into OSM XML.
pub mod app;
pub mod model;
