use clap::{Arg, ArgAction, Command};

pub const PROFILE_CMD: &str = "profile";

pub const INPUT_DIR_F: &str = "input_dir_F";
pub const INPUT_DIR_M: &str = "input_dir_M";
pub const OUTPUT_DIR_F: &str = "output_dir_F";
pub const OUTPUT_DIR_M: &str = "output_dir_M";

fn dir_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("DIR")
        .required(true)
        .help(help)
}

pub fn create_profile_cli() -> Command {
    Command::new(PROFILE_CMD)
        .about("Generate 200 bp binary genomic window profiles for female and male samples.")
        .arg(
            Arg::new("peaks")
                .required(true)
                .help("Tab-separated peaks file (header line, then chr, start, end)"),
        )
        .arg(dir_arg(
            INPUT_DIR_F,
            "Directory with female binary input files",
        ))
        .arg(dir_arg(INPUT_DIR_M, "Directory with male binary input files"))
        .arg(dir_arg(
            OUTPUT_DIR_F,
            "Output directory for female 200 bp profiles",
        ))
        .arg(dir_arg(
            OUTPUT_DIR_M,
            "Output directory for male 200 bp profiles",
        ))
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .action(ArgAction::SetTrue)
                .help("Don't draw progress bars"),
        )
}
