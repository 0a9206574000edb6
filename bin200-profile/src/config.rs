use std::path::PathBuf;

use bin200_core::WINDOW_SIZE;

/// The two sample groups of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cohort {
    Female,
    Male,
}

impl Cohort {
    pub fn label(&self) -> &'static str {
        match self {
            Cohort::Female => "F",
            Cohort::Male => "M",
        }
    }
}

/// Where a cohort's sample files come from and where its profiles go.
#[derive(Debug, Clone)]
pub struct CohortDirs {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

///
/// Everything a profile run needs, already resolved to real paths.
///
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub peaks: PathBuf,
    pub female: CohortDirs,
    pub male: CohortDirs,
    pub window_size: u32,
    pub show_progress: bool,
}

impl ProfileConfig {
    pub fn new(peaks: PathBuf, female: CohortDirs, male: CohortDirs) -> Self {
        ProfileConfig {
            peaks,
            female,
            male,
            window_size: WINDOW_SIZE,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Cohorts in processing order.
    pub fn cohorts(&self) -> [(Cohort, &CohortDirs); 2] {
        [(Cohort::Female, &self.female), (Cohort::Male, &self.male)]
    }
}
