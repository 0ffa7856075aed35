//! Size catalogs for the packaging plan
//!
//! The built-in tables mirror the assets a typical iOS/Android app bundle
//! expects. A [`Catalog`] is handed to the batch executor, so tests and
//! callers can swap in their own tables (including ones loaded from JSON).

use crate::error::{Error, Result};
use crate::layout::OutputLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Square iOS icon sizes, written as `ios_pics/{size}.png`.
pub const IOS_ICON_SIZES: [u32; 10] = [40, 57, 58, 60, 80, 87, 120, 180, 512, 1024];

/// Android launcher icon sizes per density bucket.
pub const ANDROID_ICON_SIZES: [AndroidIcon; 5] = [
    AndroidIcon::new(Density::Mdpi, 48),
    AndroidIcon::new(Density::Hdpi, 72),
    AndroidIcon::new(Density::Xhdpi, 96),
    AndroidIcon::new(Density::Xxhdpi, 144),
    AndroidIcon::new(Density::Xxxhdpi, 192),
];

/// iOS launch image dimensions, written as `ios_pics/LaunchImage{w}-{h}.png`.
pub const LAUNCH_IMAGE_SIZES: [LaunchImage; 7] = [
    LaunchImage::new(640, 960),
    LaunchImage::new(640, 1136),
    LaunchImage::new(750, 1334),
    LaunchImage::new(828, 1792),
    LaunchImage::new(1125, 2436),
    LaunchImage::new(1242, 2208),
    LaunchImage::new(1242, 2688),
];

pub const ANDROID_ICON_FILE: &str = "icon_logo.png";

/// Android resolution bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Name of the `res/` folder for this bucket, e.g. `mipmap-xhdpi`.
    pub fn folder(self) -> String {
        format!("mipmap-{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidIcon {
    pub density: Density,
    pub size: u32,
}

impl AndroidIcon {
    pub const fn new(density: Density, size: u32) -> Self {
        Self { density, size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchImage {
    pub width: u32,
    pub height: u32,
}

impl LaunchImage {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// One file the resizer should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeTarget {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ResizeTarget {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub ios_icons: Vec<u32>,
    pub android_icons: Vec<AndroidIcon>,
    pub launch_images: Vec<LaunchImage>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            ios_icons: IOS_ICON_SIZES.to_vec(),
            android_icons: ANDROID_ICON_SIZES.to_vec(),
            launch_images: LAUNCH_IMAGE_SIZES.to_vec(),
        }
    }

    /// Load a catalog from a JSON file shaped like the serialized [`Catalog`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let catalog_error = |reason: String| Error::Catalog {
            path: path.to_path_buf(),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|e| catalog_error(e.to_string()))?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(|e| catalog_error(e.to_string()))?;
        catalog.validate().map_err(catalog_error)?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), String> {
        if self.ios_icons.contains(&0) {
            return Err("iOS icon sizes must be positive".to_string());
        }
        if self.android_icons.iter().any(|icon| icon.size == 0) {
            return Err("Android icon sizes must be positive".to_string());
        }
        if self
            .launch_images
            .iter()
            .any(|launch| launch.width == 0 || launch.height == 0)
        {
            return Err("launch image dimensions must be positive".to_string());
        }
        Ok(())
    }

    /// Targets derived from the logo image: iOS icons then Android icons.
    pub fn logo_targets(&self, layout: &OutputLayout) -> Vec<ResizeTarget> {
        let ios = self.ios_icons.iter().map(|&size| {
            ResizeTarget::new(layout.ios_dir().join(format!("{size}.png")), size, size)
        });
        let android = self.android_icons.iter().map(|icon| {
            ResizeTarget::new(
                layout.density_dir(icon.density).join(ANDROID_ICON_FILE),
                icon.size,
                icon.size,
            )
        });
        ios.chain(android).collect()
    }

    /// Targets derived from the launch image.
    pub fn launch_targets(&self, layout: &OutputLayout) -> Vec<ResizeTarget> {
        self.launch_images
            .iter()
            .map(|launch| {
                let filename = format!("LaunchImage{}-{}.png", launch.width, launch.height);
                ResizeTarget::new(layout.ios_dir().join(filename), launch.width, launch.height)
            })
            .collect()
    }
}
