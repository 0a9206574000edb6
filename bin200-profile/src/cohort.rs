use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use bin200_core::models::{PeakSet, WindowSet};

use crate::config::{Cohort, ProfileConfig};
use crate::consts::{PROGRESS_CHARS, PROGRESS_TEMPLATE};
use crate::errors::{ProfileError, SampleError};
use crate::files::SampleFileGlob;
use crate::reducer::WindowProfiler;
use crate::sample::SampleBinaryFile;

/// A sample file that produced no profile, and why.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SampleError,
}

/// Outcome of processing one cohort directory.
#[derive(Debug, Default)]
pub struct ProcessingReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

/// Outcome of a full run over both cohorts.
#[derive(Debug)]
pub struct RunSummary {
    pub chrom: String,
    pub n_peaks: usize,
    pub n_windows: usize,
    pub cohorts: Vec<(Cohort, ProcessingReport)>,
}

fn cohort_progress_bar(
    total: usize,
    input_dir: &Path,
    show_progress: bool,
) -> Result<ProgressBar, ProfileError> {
    if !show_progress {
        return Ok(ProgressBar::hidden());
    }

    let prefix = input_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_dir.display().to_string());

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)?
            .progress_chars(PROGRESS_CHARS),
    );
    pb.set_prefix(format!("Processing {}", prefix));

    Ok(pb)
}

///
/// Profile every sample file of one cohort.
///
/// Each `*_chr{chrom}_binary.txt` file in `input_dir` is read, mapped onto
/// the windows and written under the same name to `output_dir`. Files that
/// can't be read or don't match the peaks are skipped with a warning;
/// they never stop the batch.
///
/// # Arguments:
/// - input_dir: directory holding the cohort's sample files
/// - output_dir: directory for the profiles, created if missing
/// - profiler: the run's shared peaks/windows mapping
/// - chrom: chromosome used to select sample files
/// - show_progress: draw a progress bar while processing
pub fn process_cohort(
    input_dir: &Path,
    output_dir: &Path,
    profiler: &WindowProfiler,
    chrom: &str,
    show_progress: bool,
) -> Result<ProcessingReport, ProfileError> {
    fs::create_dir_all(output_dir).map_err(|source| ProfileError::OutputDirectory {
        path: output_dir.to_owned(),
        source,
    })?;

    let files = SampleFileGlob::new(input_dir, chrom)?;
    info!("Files found in {}: {:?}", input_dir.display(), files.names());

    let pb = cohort_progress_bar(files.len(), input_dir, show_progress)?;
    let mut report = ProcessingReport::default();

    for input_path in files {
        let file_name = match input_path.file_name() {
            Some(name) => name.to_owned(),
            None => continue,
        };

        let profile = SampleBinaryFile::from_path(&input_path)
            .and_then(|sample| profiler.profile(sample));

        match profile {
            Ok(profile) => {
                let output_path = output_dir.join(&file_name);
                profile
                    .write_to_file(&output_path)
                    .map_err(|source| ProfileError::WriteProfile {
                        path: output_path.clone(),
                        source,
                    })?;
                report.written.push(output_path);
            }
            Err(reason) => {
                pb.suspend(|| {
                    warn!("Skipping {} ({})", file_name.to_string_lossy(), reason);
                });
                report.skipped.push(SkippedFile {
                    path: input_path,
                    reason,
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    Ok(report)
}

///
/// Build 200bp window profiles for both cohorts.
///
/// The peaks file is loaded and validated first; any problem with it
/// aborts the run before a single sample file is read. The windows and
/// overlap index are then built once and shared by both cohorts.
///
pub fn generate_profiles(config: &ProfileConfig) -> Result<RunSummary, ProfileError> {
    let peaks = PeakSet::try_from(config.peaks.as_path())?;

    let chrom = peaks.chrom().to_string();
    let others = peaks.other_chroms();
    if !others.is_empty() {
        warn!(
            "Peaks file lists chromosomes other than {}: {:?}. Their rows keep their sample values but never mark a {} window.",
            chrom, others, chrom
        );
    }

    let windows = WindowSet::with_width(&chrom, peaks.max_end(), config.window_size)?;
    info!(
        "Loaded {} peaks on chromosome {}; {} windows of {}bp up to {}",
        peaks.len(),
        chrom,
        windows.len(),
        windows.width(),
        peaks.max_end()
    );

    let profiler = WindowProfiler::new(&windows, &peaks);

    let mut cohorts: Vec<(Cohort, ProcessingReport)> = Vec::with_capacity(2);
    for (cohort, dirs) in config.cohorts() {
        let report = process_cohort(
            &dirs.input_dir,
            &dirs.output_dir,
            &profiler,
            &chrom,
            config.show_progress,
        )?;
        info!(
            "Cohort {}: wrote {} profiles to {}, skipped {}",
            cohort.label(),
            report.written.len(),
            dirs.output_dir.display(),
            report.skipped.len()
        );
        cohorts.push((cohort, report));
    }

    Ok(RunSummary {
        chrom,
        n_peaks: peaks.len(),
        n_windows: windows.len(),
        cohorts,
    })
}
