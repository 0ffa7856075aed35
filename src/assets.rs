use crate::resize::FileOutcome;
use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write},
    path::Path,
};

/// Placeholder 500x150 splash logo shipped with the tool.
pub const SPLASH_LOGO: &[u8] = include_bytes!("../assets/splash_logo.png");

pub const SPLASH_LOGO_FILE: &str = "splash_logo.png";

/// Copy the bundled splash logo to `dest` byte for byte.
///
/// An existing `dest` is kept. Write failures are logged and reported in the
/// outcome instead of being returned as errors.
pub fn copy_splash_logo(dest: &Path) -> FileOutcome {
    copy_bytes(SPLASH_LOGO, dest)
}

fn copy_bytes(bytes: &[u8], dest: &Path) -> FileOutcome {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(dest) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return FileOutcome::already_exists(dest);
        }
        Err(e) => return FileOutcome::failed(dest, format!("write failed: {e}")),
    };

    if let Err(e) = file.write_all(bytes).and_then(|()| file.sync_all()) {
        drop(file);
        let _ = std::fs::remove_file(dest);
        return FileOutcome::failed(dest, format!("write failed: {e}"));
    }

    log::info!("copied {}", dest.display());
    FileOutcome::Written(dest.to_path_buf())
}
