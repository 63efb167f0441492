mod osm_app;
mod osm_cli_error;

pub use osm_app::OsmPbfToXmlApp;
pub use osm_cli_error::OsmCliError;
