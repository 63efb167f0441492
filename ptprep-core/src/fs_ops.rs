use flate2::read::GzDecoder;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> std::io::Result<()>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath)
    } else {
        Ok(())
    }
}

/// creates every missing directory above a file path. relative paths are
/// resolved against the working directory first, so a bare file name
/// resolves to the (existing) working directory.
pub fn create_parent_dirs<P>(filepath: P) -> std::io::Result<()>
where
    P: AsRef<Path>,
{
    let absolute = std::path::absolute(filepath.as_ref())?;
    match absolute.parent() {
        Some(parent) => create_dirs(parent),
        None => Ok(()),
    }
}

/// true if the path carries a `.gz` extension
pub fn is_gzip<P>(filepath: P) -> bool
where
    P: AsRef<Path>,
{
    filepath
        .as_ref()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// reads a whole text file into memory, decompressing it when the file name
/// ends in `.gz`.
pub fn read_to_string<P>(filepath: P) -> std::io::Result<String>
where
    P: AsRef<Path>,
{
    let path = filepath.as_ref();
    let file = File::open(path)?;
    let mut contents = String::new();
    if is_gzip(path) {
        GzDecoder::new(BufReader::new(file)).read_to_string(&mut contents)?;
    } else {
        BufReader::new(file).read_to_string(&mut contents)?;
    }
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    #[test]
    fn test_is_gzip() {
        assert!(is_gzip("out/transitSchedule.xml.gz"));
        assert!(is_gzip("network.XML.GZ"));
        assert!(!is_gzip("transitSchedule.xml"));
        assert!(!is_gzip("gz"));
    }

    #[test]
    fn test_read_gzipped_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stops.xml.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"<transitStops/>").unwrap();
        encoder.finish().unwrap();

        assert_eq!(read_to_string(&path).unwrap(), "<transitStops/>");
    }

    #[test]
    fn test_create_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("schedule.xml");
        create_parent_dirs(&path).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
        // creating them again is a no-op
        create_parent_dirs(&path).unwrap();
    }
}
