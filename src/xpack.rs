use crate::assets::{copy_splash_logo, SPLASH_LOGO_FILE};
use crate::catalog::{Catalog, Density, ResizeTarget};
use crate::error::{Error, Result};
use crate::layout::{file_suffix, OutputLayout};
use crate::resize::{load_source, resize_to_file, FileOutcome};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

const PNG: &str = "png";

/// Builds the full iOS/Android packaging set from a logo and a launch image.
#[derive(Debug, Clone)]
pub struct Xpack {
    pub logo: PathBuf,
    pub launch: PathBuf,
    pub out_dir: String,
}

/// Result of one source image's phase.
#[derive(Debug)]
pub enum PhaseReport {
    Completed(Vec<FileOutcome>),
    /// The source could not be used; nothing was attempted for it.
    Skipped(Error),
}

impl PhaseReport {
    pub fn outcomes(&self) -> &[FileOutcome] {
        match self {
            PhaseReport::Completed(outcomes) => outcomes,
            PhaseReport::Skipped(_) => &[],
        }
    }
}

#[derive(Debug)]
pub struct XpackReport {
    pub directories: Vec<PathBuf>,
    pub logo: PhaseReport,
    pub splash: Option<FileOutcome>,
    pub launch: PhaseReport,
}

impl XpackReport {
    /// Every per-file outcome of the run, splash copy included.
    pub fn outcomes(&self) -> impl Iterator<Item = &FileOutcome> {
        self.logo
            .outcomes()
            .iter()
            .chain(self.splash.iter())
            .chain(self.launch.outcomes())
    }

    pub fn written(&self) -> usize {
        self.outcomes().filter(|o| o.is_written()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes().filter(|o| o.is_failed()).count()
    }
}

impl Xpack {
    pub fn new(logo: impl Into<PathBuf>, launch: impl Into<PathBuf>, out_dir: impl Into<String>) -> Self {
        Self {
            logo: logo.into(),
            launch: launch.into(),
            out_dir: out_dir.into(),
        }
    }

    /// Run the plan with `catalog`.
    ///
    /// Returns an error, before touching the filesystem, when either input is
    /// not a `.png` or the output directory is blank, and when the directory
    /// tree cannot be created. Anything that goes wrong with an individual
    /// file only shows up in the report.
    pub fn run(&self, catalog: &Catalog) -> Result<XpackReport> {
        for source in [&self.logo, &self.launch] {
            if !is_png(source) {
                log::error!("only PNG images are supported: {}", source.display());
                return Err(Error::UnsupportedFormat(source.clone()));
            }
        }

        if self.out_dir.trim().is_empty() {
            log::error!("output directory must not be empty");
            return Err(Error::EmptyOutputDir);
        }

        let layout = OutputLayout::new(&self.out_dir);
        let directories = layout.provision()?;

        let ((logo, splash), launch) = rayon::join(
            || self.logo_phase(catalog, &layout),
            || run_phase(&self.launch, &catalog.launch_targets(&layout)),
        );

        Ok(XpackReport {
            directories,
            logo,
            splash,
            launch,
        })
    }

    fn logo_phase(
        &self,
        catalog: &Catalog,
        layout: &OutputLayout,
    ) -> (PhaseReport, Option<FileOutcome>) {
        let report = run_phase(&self.logo, &catalog.logo_targets(layout));
        if let PhaseReport::Skipped(_) = report {
            return (report, None);
        }

        // The placeholder is copied rather than resized from the logo; it
        // has to be replaced by a properly designed asset.
        let dest = layout.density_dir(Density::Xxhdpi).join(SPLASH_LOGO_FILE);
        let splash = copy_splash_logo(&dest);
        log::warn!(
            "splash logo is a placeholder, re-crop and replace it: {}",
            dest.display()
        );
        (report, Some(splash))
    }
}

/// Decode `source` once and resize it to every target independently.
fn run_phase(source: &Path, targets: &[ResizeTarget]) -> PhaseReport {
    let image = match load_source(source) {
        Ok(image) => image,
        Err(e) => {
            log::error!("{e}");
            return PhaseReport::Skipped(e);
        }
    };

    let outcomes = targets
        .par_iter()
        .map(|target| resize_to_file(&image, target))
        .collect();
    PhaseReport::Completed(outcomes)
}

fn is_png(path: &Path) -> bool {
    let name = path.to_string_lossy();
    name.contains('.') && file_suffix(&name) == PNG
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([20, 40, 200, 255]))
            .save(path)
            .unwrap();
    }

    fn small_catalog() -> Catalog {
        Catalog {
            ios_icons: vec![16, 32],
            android_icons: vec![crate::catalog::AndroidIcon::new(Density::Mdpi, 24)],
            launch_images: vec![crate::catalog::LaunchImage::new(20, 30)],
        }
    }

    #[test]
    fn test_is_png() {
        assert!(is_png(Path::new("d:/logo.png")));
        assert!(!is_png(Path::new("logo.jpg")));
        assert!(!is_png(Path::new("logo.PNG")));
        assert!(!is_png(Path::new("png")));
    }

    #[test]
    fn test_rejects_non_png_without_side_effects() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out");

        let xpack = Xpack::new("logo.jpg", "launch.png", out.to_string_lossy());
        let err = xpack.run(&Catalog::builtin()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_rejects_blank_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let logo = temp_dir.path().join("logo.png");
        write_png(&logo, 64, 64);

        for out_dir in ["", "   "] {
            let err = Xpack::new(&logo, &logo, out_dir)
                .run(&small_catalog())
                .unwrap_err();
            assert!(matches!(err, Error::EmptyOutputDir), "{out_dir:?} accepted");
        }
        assert!(!Path::new("/ios_pics").exists());
        assert!(!Path::new("ios_pics").exists());
    }

    #[test]
    fn test_missing_logo_skips_only_logo_phase() {
        let temp_dir = TempDir::new().unwrap();
        let launch = temp_dir.path().join("launch.png");
        write_png(&launch, 40, 60);
        let out = temp_dir.path().join("out");

        let xpack = Xpack::new(temp_dir.path().join("logo.png"), &launch, out.to_string_lossy());
        let report = xpack.run(&small_catalog()).unwrap();

        assert!(matches!(report.logo, PhaseReport::Skipped(Error::MissingSource(_))));
        assert!(report.splash.is_none());
        assert_eq!(report.launch.outcomes().len(), 1);
        assert_eq!(report.written(), 1);
        assert!(out.join("ios_pics").join("LaunchImage20-30.png").exists());
        assert!(out.join("android_pics").join("mipmap-xxxhdpi").is_dir());
    }

    #[test]
    fn test_rerun_writes_nothing_new() {
        let temp_dir = TempDir::new().unwrap();
        let logo = temp_dir.path().join("logo.png");
        let launch = temp_dir.path().join("launch.png");
        write_png(&logo, 64, 64);
        write_png(&launch, 40, 60);
        let out = temp_dir.path().join("out");

        let xpack = Xpack::new(&logo, &launch, out.to_string_lossy());
        let first = xpack.run(&small_catalog()).unwrap();
        assert_eq!(first.written(), 5);
        assert_eq!(first.failed(), 0);

        let second = xpack.run(&small_catalog()).unwrap();
        assert_eq!(second.written(), 0);
        assert!(second
            .outcomes()
            .all(|o| matches!(o, FileOutcome::AlreadyExists(_))));
    }
}
