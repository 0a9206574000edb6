pub const PROGRESS_TEMPLATE: &str =
    "{prefix} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files ({eta})";
pub const PROGRESS_CHARS: &str = "##-";
