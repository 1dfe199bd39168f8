use std::path::Path;

/// Derive the top-level type name from a document path.
///
/// Strips the directory and the final extension only. Separators are the
/// platform's own, so `\` splits directories on Windows but is part of the
/// file name elsewhere. A name made only of an extension (`.cs`) yields an
/// empty string.
pub fn top_level_type_name(path: &Path) -> String {
    let path = path.to_string_lossy();
    let file_name = path.rsplit(std::path::is_separator).next().unwrap_or_default();

    match file_name.rfind('.') {
        Some(dot) => file_name[..dot].to_string(),
        None => file_name.to_string(),
    }
}
