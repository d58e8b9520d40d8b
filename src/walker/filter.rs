use std::path::Path;

/// Return true if the file name ends with `suffix` (exact, case-sensitive)
pub fn matches_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
}
