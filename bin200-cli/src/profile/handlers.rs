use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use bin200_core::utils::expand_path;
use bin200_profile::{CohortDirs, ProfileConfig, generate_profiles};

use super::cli::{INPUT_DIR_F, INPUT_DIR_M, OUTPUT_DIR_F, OUTPUT_DIR_M};

fn path_arg(matches: &ArgMatches, id: &str) -> Result<PathBuf> {
    let raw = matches
        .get_one::<String>(id)
        .with_context(|| format!("--{} is required.", id))?;
    expand_path(raw)
}

pub fn run_profile(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let peaks = matches
        .get_one::<String>("peaks")
        .context("A path to a peaks file is required.")?;
    let peaks = PathBuf::from(peaks);

    let female = CohortDirs {
        input_dir: path_arg(matches, INPUT_DIR_F)?,
        output_dir: path_arg(matches, OUTPUT_DIR_F)?,
    };
    let male = CohortDirs {
        input_dir: path_arg(matches, INPUT_DIR_M)?,
        output_dir: path_arg(matches, OUTPUT_DIR_M)?,
    };

    let show_progress = !matches.get_flag("no-progress");

    let config = ProfileConfig::new(peaks, female, male).with_progress(show_progress);

    let summary = generate_profiles(&config)
        .with_context(|| format!("Failed to generate profiles from {:?}", config.peaks))?;

    for (cohort, report) in summary.cohorts.iter() {
        info!(
            "[{}] {} profiles written, {} files skipped",
            cohort.label(),
            report.written.len(),
            report.skipped.len()
        );
    }
    info!(
        "Done! chr{}: {} peaks -> {} windows",
        summary.chrom, summary.n_peaks, summary.n_windows
    );

    Ok(())
}
