use std::path::{Path, PathBuf};

use glob::{glob, Pattern};

use bin200_core::utils::sample_file_suffix;

use crate::errors::ProfileError;

///
/// The sample files of one chromosome inside a cohort directory, i.e. every
/// regular file named `*_chr{chrom}_binary.txt`, sorted by path.
///
pub struct SampleFileGlob {
    curr: usize,
    files: Vec<PathBuf>,
}

impl SampleFileGlob {
    pub fn new(dir: &Path, chrom: &str) -> Result<Self, ProfileError> {
        if let Err(source) = std::fs::read_dir(dir) {
            return Err(ProfileError::InputDirectory {
                path: dir.to_owned(),
                source,
            });
        }

        let pattern = format!(
            "{}/*{}",
            Pattern::escape(&dir.to_string_lossy()),
            Pattern::escape(&sample_file_suffix(chrom))
        );

        let mut files = glob(&pattern)?
            .map(|f| f.map_err(ProfileError::from))
            .collect::<Result<Vec<_>, _>>()?;
        files.retain(|path| path.is_file());
        files.sort();

        Ok(SampleFileGlob { curr: 0, files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// File names, for logging.
    pub fn names(&self) -> Vec<String> {
        self.files
            .iter()
            .filter_map(|f| f.file_name())
            .map(|f| f.to_string_lossy().into_owned())
            .collect()
    }
}

impl Iterator for SampleFileGlob {
    type Item = PathBuf;
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.files.get(self.curr).cloned();
        self.curr += 1;
        result
    }
}
