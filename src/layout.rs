use crate::catalog::Density;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

pub const IOS_DIR: &str = "ios_pics";
pub const ANDROID_DIR: &str = "android_pics";

/// Returns the text after the last `.` of `name`, or all of `name` when it
/// has no `.`.
pub fn file_suffix(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) => &name[index + 1..],
        None => name,
    }
}

/// Appends a `/` to `root` unless it is empty or already ends with `/` or
/// `\`.
pub fn normalize_root(root: &str) -> String {
    if root.is_empty() || root.ends_with('/') || root.ends_with('\\') {
        root.to_string()
    } else {
        format!("{root}/")
    }
}

/// Directory tree produced under a user supplied output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl AsRef<str>) -> Self {
        Self {
            root: PathBuf::from(normalize_root(root.as_ref())),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ios_dir(&self) -> PathBuf {
        self.root.join(IOS_DIR)
    }

    pub fn android_dir(&self) -> PathBuf {
        self.root.join(ANDROID_DIR)
    }

    pub fn density_dir(&self, density: Density) -> PathBuf {
        self.android_dir().join(density.folder())
    }

    /// Every directory the packaging plan writes into, parents first.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.root.clone(), self.ios_dir(), self.android_dir()];
        dirs.extend(Density::ALL.iter().map(|&density| self.density_dir(density)));
        dirs
    }

    /// Creates each missing directory in order without recursing into
    /// parents, logging every directory visited.
    pub fn provision(&self) -> Result<Vec<PathBuf>> {
        let dirs = self.directories();
        for dir in &dirs {
            if !dir.is_dir() {
                match std::fs::create_dir(dir) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && dir.is_dir() => {}
                    Err(source) => {
                        log::error!("failed to create directory {}: {source}", dir.display());
                        return Err(Error::CreateDir {
                            path: dir.clone(),
                            source,
                        });
                    }
                }
            }
            log::info!("{}", dir.display());
        }
        Ok(dirs)
    }
}
