//! Local output tree for the pinning-service hand-off.
//!
//! ```text
//! <root>/<stem>/                      single item: image + metadata file
//! <root>/collection_<timestamp>/
//!     images/                         copy of the uploaded image folder
//!     metadata/                       one metadata file per token
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::params::StagingParams;
use crate::error::{Error, Result};

pub fn single_output_dir(root: &Path, stem: &str) -> PathBuf {
    root.join(stem)
}

/// `collection_YYYYmmdd_HHMMSS`
pub fn collection_dir_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("collection_{}", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Directory layout of one batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionLayout {
    pub collection_dir: PathBuf,
    pub images_dir: PathBuf,
    pub metadata_dir: PathBuf,
}

impl CollectionLayout {
    pub fn new<Tz: TimeZone>(root: &Path, timestamp: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let collection_dir = root.join(collection_dir_name(timestamp));
        Self {
            images_dir: collection_dir.join("images"),
            metadata_dir: collection_dir.join("metadata"),
            collection_dir,
        }
    }
}

/// Split a path into its UTF-8 file name and stem.
pub fn file_name_parts(path: &Path) -> Result<(&str, &str)> {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidFileName(path.to_path_buf()))?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidFileName(path.to_path_buf()))?;
    Ok((name, stem))
}

/// Copy `src` into `dir` under its own file name, creating `dir` if needed.
pub fn copy_file_into(src: &Path, dir: &Path) -> Result<PathBuf> {
    let (name, _) = file_name_parts(src)?;
    fs::create_dir_all(dir)?;
    let dest = dir.join(name);
    fs::copy(src, &dest)?;
    debug!("Copied {:?} -> {:?}", src, dest);
    Ok(dest)
}

/// Recursively copy `src` to `dst`. `dst` must not exist yet.
pub fn copy_directory(src: &Path, dst: &Path) -> Result<usize> {
    if dst.exists() {
        return Err(Error::OutputExists(dst.to_path_buf()));
    }
    if !src.is_dir() {
        return Err(Error::PathNotFound(src.to_path_buf()));
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| Error::InvalidFileName(entry.path().to_path_buf()))?;
        let dest = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
            copied += 1;
        }
    }
    debug!("Copied {} files {:?} -> {:?}", copied, src, dst);
    Ok(copied)
}

/// Create `dir` and remove stale regular files left in it.
pub fn prepare_metadata_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            fs::remove_file(&path)?;
            debug!("Removed stale metadata file {:?}", path);
        }
    }
    Ok(())
}

/// Image files directly inside `dir`, sorted by path.
pub fn list_image_files(dir: &Path, params: &StagingParams) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && params.is_image(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn collection_name_uses_compact_timestamp() {
        let ts = Utc.with_ymd_and_hms(2025, 7, 26, 15, 26, 34).unwrap();
        assert_eq!(collection_dir_name(&ts), "collection_20250726_152634");

        let layout = CollectionLayout::new(Path::new("output"), &ts);
        assert_eq!(
            layout.images_dir,
            PathBuf::from("output/collection_20250726_152634/images")
        );
        assert_eq!(
            layout.metadata_dir,
            PathBuf::from("output/collection_20250726_152634/metadata")
        );
    }

    #[test]
    fn copy_directory_keeps_nested_files() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("1.png"), b"one").unwrap();
        fs::write(src.join("nested/readme.txt"), b"text").unwrap();

        let dst = tmp.path().join("dst");
        assert_eq!(copy_directory(&src, &dst).unwrap(), 2);
        assert_eq!(fs::read(dst.join("1.png")).unwrap(), b"one");
        assert_eq!(fs::read(dst.join("nested/readme.txt")).unwrap(), b"text");

        assert!(matches!(
            copy_directory(&src, &dst),
            Err(Error::OutputExists(_))
        ));
    }

    #[test]
    fn prepare_metadata_dir_clears_files_only() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("metadata");
        fs::create_dir_all(dir.join("keep")).unwrap();
        fs::write(dir.join("old"), b"{}").unwrap();

        prepare_metadata_dir(&dir).unwrap();
        assert!(!dir.join("old").exists());
        assert!(dir.join("keep").is_dir());
    }

    #[test]
    fn lists_images_sorted_and_filtered() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["3.png", "1.JPG", "2.gif", "notes.txt", ".DS_Store"] {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }
        fs::create_dir(tmp.path().join("4.png")).unwrap();

        let images = list_image_files(tmp.path(), &StagingParams::default()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["1.JPG", "2.gif", "3.png"]);
    }

    #[test]
    fn copy_file_into_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("art.jpg");
        fs::write(&src, b"pixels").unwrap();

        let dest = copy_file_into(&src, &tmp.path().join("out/art")).unwrap();
        assert_eq!(dest, tmp.path().join("out/art/art.jpg"));
        assert_eq!(fs::read(dest).unwrap(), b"pixels");
    }
}
