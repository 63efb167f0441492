use crate::fs_ops;
use flate2::{write::GzEncoder, Compression};
use std::{
    ffi::OsString,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// destination of an output file, gzip compressed when the target file name
/// ends in `.gz`.
pub enum OutputSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputSink {
    fn new(file: File, gzip: bool) -> OutputSink {
        let buffer = BufWriter::new(file);
        if gzip {
            OutputSink::Gzip(GzEncoder::new(buffer, Compression::default()))
        } else {
            OutputSink::Plain(buffer)
        }
    }

    /// flushes all buffered content (and the gzip trailer) to disk.
    fn finish(self) -> std::io::Result<()> {
        let mut buffer = match self {
            OutputSink::Plain(buffer) => buffer,
            OutputSink::Gzip(encoder) => encoder.finish()?,
        };
        buffer.flush()?;
        let file = buffer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            OutputSink::Plain(w) => w.write(buf),
            OutputSink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            OutputSink::Plain(w) => w.flush(),
            OutputSink::Gzip(w) => w.flush(),
        }
    }
}

/// writes `filepath` through a sibling `<name>.partial` file which is only
/// renamed into place after `write_fn` and the final flush succeed. on
/// failure the partial file is removed and the target is left untouched.
pub fn write_atomic<P, F, E>(filepath: P, write_fn: F) -> Result<(), E>
where
    P: AsRef<Path>,
    F: FnOnce(&mut OutputSink) -> Result<(), E>,
    E: From<std::io::Error>,
{
    let path = filepath.as_ref();
    let partial = partial_path(path);
    let file = File::create(&partial)?;
    let mut sink = OutputSink::new(file, fs_ops::is_gzip(path));
    let result = write_fn(&mut sink).and_then(|_| sink.finish().map_err(E::from));
    match result {
        Ok(()) => {
            std::fs::rename(&partial, path)?;
            Ok(())
        }
        Err(e) => {
            if let Err(remove_error) = std::fs::remove_file(&partial) {
                log::warn!(
                    "unable to remove partial output file {}: {remove_error}",
                    partial.display()
                );
            }
            Err(e)
        }
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".partial");
    path.with_file_name(name)
}
