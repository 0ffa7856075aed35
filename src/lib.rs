//! Resize images into the icon and launch image sets used when packaging
//! iOS and Android apps.

pub mod assets;
pub mod catalog;
pub mod error;
pub mod layout;
pub mod params;
pub mod resize;
pub mod xpack;

pub use catalog::{Catalog, ResizeTarget};
pub use error::{Error, Result};
pub use resize::FileOutcome;
pub use xpack::{Xpack, XpackReport};
