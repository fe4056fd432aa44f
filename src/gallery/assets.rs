// SPDX-License-Identifier: MPL-2.0
//! Image asset resolution for gallery photos.
//!
//! The gallery only needs a stable mapping from [`ImageRef`] keys to image
//! handles. Handles are resolved once at startup and cached in
//! [`ResolvedImages`] so the renderer sees the same image identity on every
//! frame instead of re-uploading the bytes.

use super::{ImageRef, PhotoRecord};
use iced::widget::image::Handle;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/gallery/"]
struct GalleryAssets;

/// Source of image handles for photo records.
pub trait AssetProvider {
    /// Returns a handle for `image`, or `None` if the asset does not exist.
    fn resolve(&self, image: &ImageRef) -> Option<Handle>;
}

/// Images compiled into the binary from `assets/gallery/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    /// Lists the embedded asset keys.
    #[must_use]
    pub fn keys() -> Vec<String> {
        GalleryAssets::iter()
            .map(|name| name.into_owned())
            .collect()
    }
}

impl AssetProvider for EmbeddedAssets {
    fn resolve(&self, image: &ImageRef) -> Option<Handle> {
        GalleryAssets::get(image.as_str()).map(|file| Handle::from_bytes(file.data.into_owned()))
    }
}

/// Handles for every photo, index-aligned with the photo list.
#[derive(Debug, Clone, Default)]
pub struct ResolvedImages {
    handles: Vec<Option<Handle>>,
}

impl ResolvedImages {
    /// Resolves all photos through `provider`. Missing assets are kept as
    /// `None` and reported with a warning; the view draws a placeholder.
    pub fn resolve<P: AssetProvider + ?Sized>(provider: &P, photos: &[PhotoRecord]) -> Self {
        let handles = photos
            .iter()
            .map(|photo| {
                let handle = provider.resolve(&photo.image);
                if handle.is_none() {
                    tracing::warn!(image = %photo.image, "gallery image could not be resolved");
                }
                handle
            })
            .collect();
        Self { handles }
    }

    /// Handle for the photo at `index`, if it resolved.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Handle> {
        self.handles.get(index).and_then(Option::as_ref)
    }

    /// Number of photos whose asset could not be resolved.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.handles
            .iter()
            .filter(|handle| handle.is_none())
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::catalog::ued_photos;

    struct OnlyFirst;

    impl AssetProvider for OnlyFirst {
        fn resolve(&self, image: &ImageRef) -> Option<Handle> {
            (image.as_str() == "ued1.png").then(|| Handle::from_bytes(vec![0u8; 4]))
        }
    }

    #[test]
    fn embedded_assets_cover_catalog() {
        for photo in ued_photos() {
            assert!(
                EmbeddedAssets.resolve(&photo.image).is_some(),
                "missing bundled asset {}",
                photo.image
            );
        }
    }

    #[test]
    fn embedded_assets_reject_unknown_key() {
        assert!(EmbeddedAssets.resolve(&ImageRef::new("nope.png")).is_none());
    }

    #[test]
    fn embedded_keys_include_catalog_files() {
        let keys = EmbeddedAssets::keys();
        assert!(keys.iter().any(|key| key == "ued3.png"));
    }

    #[test]
    fn resolved_images_stay_aligned_with_photos() {
        let photos = ued_photos();
        let resolved = ResolvedImages::resolve(&OnlyFirst, &photos);

        assert_eq!(resolved.len(), photos.len());
        assert!(resolved.get(0).is_some());
        assert!(resolved.get(1).is_none());
        assert_eq!(resolved.missing_count(), photos.len() - 1);
    }

    #[test]
    fn out_of_range_index_has_no_handle() {
        let resolved = ResolvedImages::resolve(&EmbeddedAssets, &ued_photos());
        assert!(resolved.get(99).is_none());
    }
}
