use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::TempDir;

use bin200_core::PeakSetError;
use bin200_profile::{
    CohortDirs, Cohort, ProfileConfig, ProfileError, SampleError, generate_profiles,
};

#[fixture]
fn path_to_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/data")
}

#[fixture]
fn tempdir() -> TempDir {
    tempfile::tempdir().unwrap()
}

fn config(data: &Path, peaks: &str, out: &Path) -> ProfileConfig {
    ProfileConfig::new(
        data.join("peaks").join(peaks),
        CohortDirs {
            input_dir: data.join("samples_F"),
            output_dir: out.join("F"),
        },
        CohortDirs {
            input_dir: data.join("samples_M"),
            output_dir: out.join("M"),
        },
    )
    .with_progress(false)
}

fn read(path: PathBuf) -> String {
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("can't read {:?}: {}", path, e))
}

#[rstest]
fn test_generate_profiles_for_both_cohorts(path_to_data: PathBuf, tempdir: TempDir) {
    let out = tempdir.path();
    let summary = generate_profiles(&config(&path_to_data, "peaks_chr1.tsv", out)).unwrap();

    assert_eq!(summary.chrom, "1");
    assert_eq!(summary.n_peaks, 5);
    assert_eq!(summary.n_windows, 5);

    // windows: (0,199) (200,399) (400,599) (600,799) (800,905)
    assert_eq!(
        read(out.join("F/s01_chr1_binary.txt")),
        "s01\tF\nchr1\n1\n0\n0\n0\n1\n"
    );
    assert_eq!(
        read(out.join("F/s02_chr1_binary.txt")),
        "s02\tF\nchr1\n0\n1\n1\n0\n0\n"
    );
    assert_eq!(
        read(out.join("M/m01_chr1_binary.txt")),
        "m01\tM\nchr1\n0\n0\n1\n1\n0\n"
    );
    assert_eq!(
        read(out.join("M/m02_chr1_binary.txt")),
        "m02\tM\nchr1\n0\n0\n0\n0\n0\n"
    );

    // count mismatch is skipped, other chromosomes and stray files are ignored
    assert!(!out.join("F/s03_chr1_binary.txt").exists());
    assert!(!out.join("F/s01_chr2_binary.txt").exists());
    assert!(!out.join("F/notes.txt").exists());

    let (cohort, female) = &summary.cohorts[0];
    assert_eq!(*cohort, Cohort::Female);
    assert_eq!(female.written.len(), 2);
    assert_eq!(female.skipped.len(), 1);
    assert!(matches!(
        female.skipped[0].reason,
        SampleError::CountMismatch {
            values: 4,
            peaks: 5
        }
    ));

    let (cohort, male) = &summary.cohorts[1];
    assert_eq!(*cohort, Cohort::Male);
    assert_eq!(male.written.len(), 2);
    assert!(male.skipped.is_empty());
}

#[rstest]
fn test_other_chromosome_rows_keep_pairing_but_mark_nothing(
    path_to_data: PathBuf,
    tempdir: TempDir,
) {
    // rows 2 and 4 sit on chromosome 2 at coordinates that would hit
    // windows 0, 2 and 3 of chromosome 1
    let out = tempdir.path();
    let summary = generate_profiles(&config(&path_to_data, "peaks_mixed.tsv", out)).unwrap();

    assert_eq!(summary.chrom, "1");
    assert_eq!(summary.n_peaks, 5);
    assert_eq!(summary.n_windows, 5);

    // s01's value for row 2 is 1 but only its row 5 value reaches a window
    assert_eq!(
        read(out.join("F/s01_chr1_binary.txt")),
        "s01\tF\nchr1\n0\n0\n0\n0\n1\n"
    );
    // row 3 is still paired with the third value
    assert_eq!(
        read(out.join("F/s02_chr1_binary.txt")),
        "s02\tF\nchr1\n0\n1\n1\n0\n0\n"
    );
    // m01 only calls row 4, which is on chromosome 2
    assert_eq!(
        read(out.join("M/m01_chr1_binary.txt")),
        "m01\tM\nchr1\n0\n0\n0\n0\n0\n"
    );
    assert!(!out.join("F/s03_chr1_binary.txt").exists());
}

#[rstest]
fn test_output_has_one_value_per_window(path_to_data: PathBuf, tempdir: TempDir) {
    let out = tempdir.path();
    let summary = generate_profiles(&config(&path_to_data, "peaks_chr1.tsv", out)).unwrap();

    for (_, report) in summary.cohorts.iter() {
        for written in report.written.iter() {
            let lines = read(written.clone()).lines().count();
            assert_eq!(lines, summary.n_windows + 2);
        }
    }
}

#[rstest]
fn test_rerun_is_byte_identical(path_to_data: PathBuf, tempdir: TempDir) {
    let out = tempdir.path();
    let cfg = config(&path_to_data, "peaks_chr1.tsv", out);

    generate_profiles(&cfg).unwrap();
    let first = fs::read(out.join("F/s01_chr1_binary.txt")).unwrap();

    generate_profiles(&cfg).unwrap();
    let second = fs::read(out.join("F/s01_chr1_binary.txt")).unwrap();

    assert_eq!(first, second);
}

#[rstest]
#[case("peaks_invalid.tsv")]
#[case("peaks_empty.tsv")]
#[case("peaks_missing.tsv")]
fn test_bad_peaks_abort_before_any_output(
    path_to_data: PathBuf,
    tempdir: TempDir,
    #[case] peaks: &str,
) {
    let out = tempdir.path();
    let result = generate_profiles(&config(&path_to_data, peaks, out));

    assert!(matches!(
        result,
        Err(ProfileError::Peaks(
            PeakSetError::InvalidPeak { .. }
                | PeakSetError::EmptyPeakSet(_)
                | PeakSetError::FileReadError(_)
        ))
    ));
    assert!(!out.join("F").exists());
    assert!(!out.join("M").exists());
}
