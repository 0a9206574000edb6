//! # Core models for bin200
//!
//! This crate holds the data types shared by the rest of the workspace:
//!
//! - [models::Peak] and [models::PeakSet]: the validated, ordered peaks file.
//! - [models::Window] and [models::WindowSet]: a chromosome tiled into fixed
//!   200bp windows, with a lookup from window to its index.
//! - [models::Interval]: the generic half-open span used by the overlap index.
//!
//! ```rust
//! use bin200_core::models::{Peak, PeakSet, WindowSet};
//!
//! let peaks = PeakSet::try_from(vec![
//!     Peak { chr: "1".to_string(), start: 0, end: 50 },
//!     Peak { chr: "1".to_string(), start: 300, end: 450 },
//! ]).unwrap();
//!
//! let windows = WindowSet::from_peaks(&peaks);
//! assert_eq!(windows.len(), 3);
//! ```
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

pub use consts::*;
pub use errors::*;
