use crate::error::FetchError;

const DOWNLOAD_BASE: &str = "https://drive.google.com/uc?id=";

/// Position of the file id in `https://drive.google.com/file/d/<id>/view`.
const FILE_ID_SEGMENT: usize = 5;

/// Extracts the file id from a Drive shared link.
///
/// # Args
/// * `link` - A link of the form `https://drive.google.com/file/d/<id>/view?usp=sharing`.
///
/// # Returns
/// The 6th slash-delimited segment of the link.
///
/// # Errors
/// `FetchError::InvalidLink` if the link is too short or the segment is empty.
pub fn drive_file_id(link: &str) -> Result<&str, FetchError> {
    match link.split('/').nth(FILE_ID_SEGMENT) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(FetchError::InvalidLink(link.to_string())),
    }
}

/// Builds the direct-download URL for a Drive file id.
pub fn drive_download_url(file_id: &str) -> String {
    format!("{DOWNLOAD_BASE}{file_id}")
}

/// Turns either a full shared link or a bare file id into a download URL.
///
/// # Errors
/// `FetchError::InvalidLink` if `source` looks like a link but carries no id,
/// or is empty.
pub fn resolve_remote(source: &str) -> Result<String, FetchError> {
    let source = source.trim();
    if source.contains('/') {
        return drive_file_id(source).map(drive_download_url);
    }

    if source.is_empty() {
        return Err(FetchError::InvalidLink(source.to_string()));
    }

    Ok(drive_download_url(source))
}
