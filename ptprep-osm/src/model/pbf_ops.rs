use super::{OsmElement, OsmElementCounts, OsmXmlError, OsmXmlWriter};
use kdam::{Bar, BarExt};
use osmpbf::ElementReader;
use ptprep_core::write_atomic;
use std::path::Path;

/// streams every element of a pbf file, in file order, into an OSM XML file.
/// the output is gzip compressed when its name ends in `.gz` and only appears
/// once the conversion has completed.
pub fn convert_pbf_to_xml(
    pbf_file: &Path,
    output_file: &Path,
    include_metadata: bool,
) -> Result<OsmElementCounts, OsmXmlError> {
    let filepath = pbf_file.display().to_string();
    let pbf_error = |source: osmpbf::Error| OsmXmlError::PbfLibError {
        filepath: filepath.clone(),
        source,
    };
    let reader = ElementReader::from_path(pbf_file).map_err(pbf_error)?;

    let mut bar = Bar::builder()
        .desc(filepath.as_str())
        .unit(" elements")
        .unit_scale(true)
        .build()
        .map_err(OsmXmlError::InternalError)?;

    let mut counts = OsmElementCounts::default();
    write_atomic(output_file, |sink| {
        let mut writer = OsmXmlWriter::new(sink, include_metadata)?;
        // for_each cannot stop early, so the first write failure is kept and
        // the remaining elements are skipped
        let mut write_error: Option<std::io::Error> = None;
        reader
            .for_each(|element| {
                if write_error.is_some() {
                    return;
                }
                if let Err(e) = writer.write_element(&OsmElement::from(&element)) {
                    write_error = Some(e);
                }
                let _ = bar.update(1);
            })
            .map_err(pbf_error)?;
        eprintln!();
        if let Some(e) = write_error {
            return Err(OsmXmlError::WriteError(e));
        }
        let (_, written) = writer.finish()?;
        counts = written;
        Ok(())
    })?;

    log::info!(
        "wrote {} nodes, {} ways and {} relations to {}",
        counts.nodes,
        counts.ways,
        counts.relations,
        output_file.display()
    );
    Ok(counts)
}
