// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: photo records, the bundled catalog, and the navigation
//! view model that owns the current index.
//!
//! Nothing in this module depends on rendering except [`assets`], which turns
//! opaque [`ImageRef`] keys into Iced image handles.

pub mod assets;
pub mod catalog;
pub mod navigator;

pub use assets::{AssetProvider, EmbeddedAssets, ResolvedImages};
pub use navigator::{GalleryViewModel, ListenerId, NavigationEvent};

use std::fmt;

/// Opaque key identifying a bundled image asset (its file name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single photo of the gallery. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub image: ImageRef,
    pub title: String,
    pub caption: String,
}

impl PhotoRecord {
    #[must_use]
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            image: ImageRef::new(image),
            title: title.into(),
            caption: caption.into(),
        }
    }
}
