use std::io::{
    BufRead,
    ErrorKind,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use csv::{
    Writer as CsvWriter,
    WriterBuilder,
};
use log::trace;

use crate::data_structs::annotation::{
    GeneIdRecord,
    GtfEntry,
};
use crate::error::{
    GeneCountError,
    Result,
};

/// Streams [`GtfEntry`] values from a GTF source, one line at a time.
///
/// Comment lines (starting with `#`) and blank lines are skipped. Lines with
/// fewer than nine columns yield [`GeneCountError::ShortLine`], lines that
/// are not UTF-8 yield [`GeneCountError::InvalidText`].
pub struct GtfReader<R: BufRead> {
    reader:     R,
    path:       PathBuf,
    buffer:     String,
    lines_read: usize,
}

impl<R: BufRead> GtfReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            path: PathBuf::from("-"),
            buffer: String::with_capacity(512),
            lines_read: 0,
        }
    }

    /// Sets the path reported in I/O errors.
    pub fn with_path<P: AsRef<Path>>(
        mut self,
        path: P,
    ) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Number of physical lines consumed so far, comments included.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    fn read_line(&mut self) -> std::io::Result<bool> {
        self.buffer.clear();
        let n = self.reader.read_line(&mut self.buffer)?;
        if n > 0 {
            self.lines_read += 1;
        }
        Ok(n > 0)
    }
}

impl<R: BufRead> Iterator for GtfReader<R> {
    type Item = Result<GtfEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.read_line() {
                Ok(true) => {},
                Ok(false) => return None,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    return Some(Err(GeneCountError::InvalidText {
                        path: self.path.clone(),
                        line: self.lines_read + 1,
                    }))
                },
                Err(e) => return Some(Err(GeneCountError::io(&self.path, e))),
            }

            let line = self.buffer.trim_end_matches(['\n', '\r']);
            if line.starts_with('#') || line.trim().is_empty() {
                trace!("Skipping line {}", self.lines_read);
                continue;
            }
            return Some(GtfEntry::parse_line(self.lines_read, line));
        }
    }
}

/// Writes [`GeneIdRecord`]s as headerless `gene_id,gene_name` rows.
pub struct GeneIdWriter<W: Write> {
    writer:  CsvWriter<W>,
    written: usize,
}

impl<W: Write> GeneIdWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer, written: 0 }
    }

    pub fn write_record(
        &mut self,
        record: &GeneIdRecord,
    ) -> Result<()> {
        self.writer.serialize(record)?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes buffered rows and returns the underlying sink.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| GeneCountError::Csv(e.into_error().into()))
    }
}
