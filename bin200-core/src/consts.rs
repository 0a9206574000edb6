/// Width of every window in a profile, in bases.
pub const WINDOW_SIZE: u32 = 200;

/// Number of raw lines at the top of a sample file that are passed through untouched.
pub const SAMPLE_HEADER_LINES: usize = 2;
