use crate::error::{ImgmashError, Result};
use std::fs;
use std::path::Path;

/// Lists the catalog: file names in `dir` carrying one of the configured
/// extensions, sorted for a stable iteration order. Not recursive.
pub fn list_images(dir: &Path, extensions: &[String]) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(ImgmashError::ImageDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file()
            && let Some(ext) = path.extension().and_then(|e| e.to_str())
            && extensions.iter().any(|want| want.eq_ignore_ascii_case(ext))
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            images.push(name.to_string());
        }
    }

    images.sort();
    Ok(images)
}

/// Display name for a catalog key: the file name without its extension.
pub fn display_name(key: &str) -> &str {
    key.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(key)
}
