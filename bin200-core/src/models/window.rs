use std::fmt::{self, Display};

use fxhash::FxHashMap;

use crate::consts::WINDOW_SIZE;
use crate::errors::PeakSetError;
use crate::models::PeakSet;

///
/// One fixed-width tile of a chromosome.
///
/// Unlike [crate::models::Peak], `end` is the last base *inside* the window,
/// so the window `(0, 199)` covers 200 bases.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Window {
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl Window {
    /// Number of bases covered by the window.
    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Half-open span `[start, end + 1)` used for overlap queries.
    pub fn span(&self) -> (u32, u32) {
        (self.start, self.end.saturating_add(1))
    }
}

impl Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.chr, self.start, self.end)
    }
}

///
/// Ordered tiling of `[0, max_end]` into consecutive windows, with a
/// lookup from window to its position in the tiling.
///
#[derive(Clone, Debug)]
pub struct WindowSet {
    chrom: String,
    windows: Vec<Window>,
    index: FxHashMap<Window, usize>,
    width: u32,
}

impl WindowSet {
    ///
    /// Tile a chromosome into [WINDOW_SIZE] windows.
    ///
    /// # Arguments:
    /// - chrom: chromosome name given to every window
    /// - max_end: last coordinate that must be covered
    pub fn tile(chrom: &str, max_end: u32) -> Self {
        Self::build(chrom, max_end, WINDOW_SIZE)
    }

    /// Tile a chromosome with a custom window width.
    pub fn with_width(chrom: &str, max_end: u32, width: u32) -> Result<Self, PeakSetError> {
        if width == 0 {
            return Err(PeakSetError::InvalidWindowWidth);
        }
        Ok(Self::build(chrom, max_end, width))
    }

    /// Tile the chromosome of a peak set up to its largest peak end.
    pub fn from_peaks(peaks: &PeakSet) -> Self {
        Self::tile(peaks.chrom(), peaks.max_end())
    }

    fn build(chrom: &str, max_end: u32, width: u32) -> Self {
        let mut windows: Vec<Window> = Vec::with_capacity((max_end / width) as usize + 1);

        let mut start: u32 = 0;
        while start <= max_end {
            let end = std::cmp::min(start.saturating_add(width - 1), max_end);
            windows.push(Window {
                chr: chrom.to_string(),
                start,
                end,
            });

            start = match start.checked_add(width) {
                Some(next) => next,
                None => break,
            };
        }

        let index: FxHashMap<Window, usize> = windows
            .iter()
            .enumerate()
            .map(|(i, window)| (window.clone(), i))
            .collect();

        WindowSet {
            chrom: chrom.to_string(),
            windows,
            index,
            width,
        }
    }

    /// Position of a window in the tiling, if it belongs to it.
    pub fn index_of(&self, window: &Window) -> Option<usize> {
        self.index.get(window).copied()
    }

    /// Chromosome every window was tiled on.
    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn get(&self, idx: usize) -> Option<&Window> {
        self.windows.get(idx)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Window> {
        self.windows.iter()
    }
}

impl<'a> IntoIterator for &'a WindowSet {
    type Item = &'a Window;
    type IntoIter = std::slice::Iter<'a, Window>;

    fn into_iter(self) -> Self::IntoIter {
        self.windows.iter()
    }
}
