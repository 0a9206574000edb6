use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

///
/// A window profile: the sample's header followed by one binary value per
/// window, in window order.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputProfile {
    pub header: Vec<Vec<u8>>,
    pub values: Vec<u8>,
}

impl OutputProfile {
    ///
    /// Write the profile to disk, replacing any existing file.
    ///
    /// The header is written byte for byte. If the last header line has no
    /// terminator a `\n` is added so the first value lands on its own line.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    pub fn write_to_file<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for line in self.header.iter() {
            writer.write_all(line)?;
        }
        if let Some(last) = self.header.last() {
            if !last.ends_with(b"\n") {
                writer.write_all(b"\n")?;
            }
        }

        for value in self.values.iter() {
            writeln!(writer, "{}", value)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
