use super::OsmCliError;
use crate::model::{convert_pbf_to_xml, OsmElementCounts};
use clap::Parser;
use ptprep_core::fs_ops;
use std::path::PathBuf;

/// converts an OpenStreetMap .osm.pbf extract into OSM XML (.osm or .osm.gz)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct OsmPbfToXmlApp {
    #[arg(help = "path to .osm.pbf file to convert")]
    pub pbf_file: PathBuf,
    #[arg(help = "output path for the OSM XML file, gzip compressed when ending in .gz")]
    pub output_file: PathBuf,
    #[arg(long, help = "leave out version, timestamp, user and changeset attributes")]
    pub no_metadata: bool,
}

impl OsmPbfToXmlApp {
    pub fn run(&self) -> Result<OsmElementCounts, OsmCliError> {
        if !self.pbf_file.is_file() {
            return Err(OsmCliError::MissingInput(self.pbf_file.clone()));
        }
        fs_ops::create_parent_dirs(&self.output_file).map_err(|source| {
            OsmCliError::OutputDirectory {
                path: self.output_file.clone(),
                source,
            }
        })?;
        log::info!(
            "converting {} to {}",
            self.pbf_file.display(),
            self.output_file.display()
        );
        let counts = convert_pbf_to_xml(&self.pbf_file, &self.output_file, !self.no_metadata)?;
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments() {
        let app = OsmPbfToXmlApp::try_parse_from([
            "osm_pbf_to_xml",
            "taiwan.osm.pbf",
            "out/taiwan.osm.gz",
            "--no-metadata",
        ])
        .unwrap();
        assert!(app.no_metadata);
        assert_eq!(app.output_file, PathBuf::from("out/taiwan.osm.gz"));
        assert!(OsmPbfToXmlApp::try_parse_from(["osm_pbf_to_xml", "only_input.pbf"]).is_err());
    }

    #[test]
    fn test_missing_input_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let app = OsmPbfToXmlApp {
            pbf_file: dir.path().join("missing.osm.pbf"),
            output_file: dir.path().join("out").join("network.osm"),
            no_metadata: false,
        };
        let error = app.run().unwrap_err();
        assert_eq!(error.exit_code(), 2);
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_output_directory_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.osm.pbf");
        std::fs::write(&input, b"").unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let app = OsmPbfToXmlApp {
            pbf_file: input,
            output_file: blocker.join("network.osm"),
            no_metadata: false,
        };
        assert_eq!(app.run().unwrap_err().exit_code(), 3);
    }

    #[test]
    fn test_unreadable_pbf_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.osm.pbf");
        std::fs::write(&input, b"\x00\x00\x00\x0dnot a pbf blob").unwrap();
        let app = OsmPbfToXmlApp {
            pbf_file: input,
            output_file: dir.path().join("network.osm"),
            no_metadata: true,
        };
        assert_eq!(app.run().unwrap_err().exit_code(), 4);
    }
}
