use crate::catalog::ResizeTarget;
use crate::error::{Error, Result};
use image::{imageops::FilterType, DynamicImage, ImageFormat, ImageOutputFormat};
use std::{
    fs::OpenOptions,
    io::{BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

/// What happened to one destination file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Written(PathBuf),
    /// The destination was present before the write; it was left untouched.
    AlreadyExists(PathBuf),
    Failed { path: PathBuf, reason: String },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Written(path) | FileOutcome::AlreadyExists(path) => path,
            FileOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, FileOutcome::Written(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }

    pub(crate) fn failed(path: &Path, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::error!("file was not generated: {} ({reason})", path.display());
        FileOutcome::Failed {
            path: path.to_path_buf(),
            reason,
        }
    }

    pub(crate) fn already_exists(path: &Path) -> Self {
        log::warn!("file already exists: {}", path.display());
        FileOutcome::AlreadyExists(path.to_path_buf())
    }
}

/// Decode the image at `path` into memory.
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(Error::MissingSource(path.to_path_buf()));
    }
    image::open(path).map_err(|source| Error::UnreadableSource {
        path: path.to_path_buf(),
        source,
    })
}

/// Resize `source` to the target dimensions and write it to the target path.
///
/// Existing files are never overwritten. The destination is created with
/// `create_new`, so a file that shows up after the existence check is still
/// left alone. Errors are logged and folded into the returned outcome.
pub fn resize_to_file(source: &DynamicImage, target: &ResizeTarget) -> FileOutcome {
    let path = target.path.as_path();
    if path.exists() {
        return FileOutcome::already_exists(path);
    }
    if target.width == 0 || target.height == 0 {
        return FileOutcome::failed(
            path,
            format!("invalid size {}x{}", target.width, target.height),
        );
    }

    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return FileOutcome::already_exists(path);
        }
        Err(e) => return FileOutcome::failed(path, e.to_string()),
    };

    let resized = source.resize_exact(target.width, target.height, FilterType::Lanczos3);
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let mut writer = BufWriter::new(file);
    let written = resized
        .write_to(&mut writer, ImageOutputFormat::from(format))
        .map_err(|e| e.to_string())
        .and_then(|()| writer.flush().map_err(|e| e.to_string()));

    if let Err(reason) = written {
        // Only ever removes the file this call just created.
        drop(writer);
        let _ = std::fs::remove_file(path);
        return FileOutcome::failed(path, reason);
    }

    if path.exists() {
        log::info!(
            "file generated, check the sharpness and framing of the new image: {}",
            path.display()
        );
        FileOutcome::Written(path.to_path_buf())
    } else {
        FileOutcome::failed(path, "file missing after write")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let image = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        });
        DynamicImage::ImageRgba8(image)
    }

    #[test]
    fn test_resize_writes_exact_dimensions() {
        let temp_dir = TempDir::new().unwrap();
        let target = ResizeTarget::new(temp_dir.path().join("wide.png"), 120, 45);

        let outcome = resize_to_file(&gradient(256, 256), &target);
        assert_eq!(outcome, FileOutcome::Written(target.path.clone()));

        let written = image::open(&target.path).unwrap();
        assert_eq!((written.width(), written.height()), (120, 45));
    }

    #[test]
    fn test_resize_never_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("40.png");
        std::fs::write(&path, b"not an image").unwrap();

        let outcome = resize_to_file(&gradient(64, 64), &ResizeTarget::new(&path, 40, 40));
        assert_eq!(outcome, FileOutcome::AlreadyExists(path.clone()));
        assert_eq!(std::fs::read(&path).unwrap(), b"not an image");
    }

    #[test]
    fn test_resize_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope").join("40.png");

        let outcome = resize_to_file(&gradient(64, 64), &ResizeTarget::new(&path, 40, 40));
        assert!(outcome.is_failed());
        assert_eq!(outcome.path(), path);
    }

    #[test]
    fn test_resize_zero_size_fails_without_creating_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("zero.png");

        let outcome = resize_to_file(&gradient(64, 64), &ResizeTarget::new(&path, 0, 10));
        assert!(outcome.is_failed());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_source_errors() {
        let temp_dir = TempDir::new().unwrap();

        let missing = temp_dir.path().join("missing.png");
        assert!(matches!(load_source(&missing), Err(Error::MissingSource(_))));

        let garbage = temp_dir.path().join("garbage.png");
        std::fs::write(&garbage, b"definitely not a png").unwrap();
        assert!(matches!(
            load_source(&garbage),
            Err(Error::UnreadableSource { .. })
        ));
    }
}
