//! # Window profiles from per-peak binary calls
//!
//! Sample files carry one 0/1 value per peak of a shared peaks file. This
//! crate maps those values onto fixed 200bp windows of the peaks'
//! chromosome: a window is 1 when any peak overlapping it is 1, and 0
//! otherwise (including windows no peak touches).
//!
//! The entry point for a full run is [generate_profiles], which processes a
//! female and a male cohort directory with the same [process_cohort]
//! procedure.
pub mod cohort;
pub mod config;
pub mod consts;
pub mod errors;
pub mod files;
pub mod profile;
pub mod reducer;
pub mod sample;

// re-exports
pub use cohort::*;
pub use config::*;
pub use errors::*;
pub use files::*;
pub use profile::*;
pub use reducer::*;
pub use sample::*;
