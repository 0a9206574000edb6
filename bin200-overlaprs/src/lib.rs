//! Interval intersection between the windows of a chromosome and the peaks
//! file.
//!
//! All overlap logic of the workspace lives here: the [`Bits`] index and the
//! [`OverlapMapper`], which performs a left outer join of windows against
//! peaks and emits one [`OverlapRecord`] per (window, overlapping peak) pair,
//! or a sentinel record for windows no peak touches.
//!
//! ```rust
//! use bin200_core::models::{Peak, PeakSet, WindowSet};
//! use bin200_overlaprs::OverlapMapper;
//!
//! let peaks = PeakSet::try_from(vec![
//!     Peak { chr: "1".to_string(), start: 0, end: 50 },
//!     Peak { chr: "1".to_string(), start: 100, end: 150 },
//! ]).unwrap();
//! let windows = WindowSet::from_peaks(&peaks);
//!
//! let mapper = OverlapMapper::new(&windows, &peaks);
//! let records = mapper.intersect(&[0, 1]).unwrap();
//! assert_eq!(records.len(), 2);
//! ```

/// Binary Interval Search implementation.
///
/// See [`Bits`] for details.
pub mod bits;

pub mod errors;

/// Window/peak left outer join.
pub mod mapper;

/// Core traits for overlap operations.
///
/// See [`Overlapper`] for the main trait.
pub mod traits;

// re-exports
pub use self::bits::Bits;
pub use self::errors::OverlapError;
pub use self::mapper::{OverlapMapper, OverlapRecord};
pub use self::traits::{Interval, Overlapper};
