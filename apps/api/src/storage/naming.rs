//! File-name convention for rendered documents.
//!
//! Names are derived from the client name and must stay a single flat path
//! component, so both directions are checked here: names built from client
//! input are sanitized, names arriving on the download route are validated.

pub const FILE_SUFFIX: &str = "_LevelSetProfile.docx";

/// Longest single path component common filesystems accept, in bytes.
pub const MAX_FILE_NAME_BYTES: usize = 255;

/// Returns `<client name>_LevelSetProfile.docx` for a client name.
///
/// Whitespace becomes `_`. Unicode alphanumerics and `-`, `_`, `.` are kept;
/// everything else (path separators, `%`, `#`, `?`, quotes, control
/// characters) is dropped, as are leading dots. Long stems are cut at a
/// character boundary so the whole name fits in [`MAX_FILE_NAME_BYTES`].
pub fn document_file_name(client_name: &str) -> String {
    let stem: String = client_name
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                Some(c)
            } else {
                None
            }
        })
        .collect();
    let stem = stem.trim_start_matches('.');

    let max_stem = MAX_FILE_NAME_BYTES - FILE_SUFFIX.len();
    let cut = stem
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= max_stem)
        .last()
        .unwrap_or(0);
    format!("{}{FILE_SUFFIX}", &stem[..cut])
}

/// True when `name` is a single, plain path component that is safe to join
/// onto the storage directory. Dot-prefixed names (`.`, `..`, in-flight
/// temp files) are never served.
pub fn is_valid_file_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_FILE_NAME_BYTES
        && !name.starts_with('.')
        && !name
            .chars()
            .any(|c| matches!(c, '/' | '\\' | ':') || c.is_control())
}
