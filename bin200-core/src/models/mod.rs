pub mod interval;
pub mod peak;
pub mod peak_set;
pub mod window;

// re-export for cleaner imports
pub use self::interval::Interval;
pub use self::peak::Peak;
pub use self::peak_set::PeakSet;
pub use self::window::{Window, WindowSet};
