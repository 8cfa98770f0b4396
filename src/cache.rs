//! Per-item prescaled bitmap cache.
//!
//! While the pointer sweeps across the dock, every repaint asks an item for a
//! bitmap at a slightly different size. Rescaling the icon on that path would
//! dominate the frame cost, so each item keeps a ladder of prescaled bitmaps,
//! one slot per integer size in its `[min_size, max_size]` range, and the
//! draw path becomes a plain indexed lookup.
//!
//! The cache owns the base image its ladder derives from. Swapping the base
//! (after a recolor or an icon change) drops every pixmap and recomputes the
//! per-slot dimensions, so a populated slot is never stale.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::debug;

use crate::geometry::{scaled_dimensions, Orientation};

/// Size-indexed table of prescaled bitmaps, derived from one base image.
///
/// Slots are indexed by `size - min_size`. Dimensions for every slot are
/// computed arithmetically up front; the pixmaps themselves fill in lazily
/// via [`ensure_built`](Self::ensure_built) or eagerly via
/// [`rebuild_all`](Self::rebuild_all). Every accessor clamps its size
/// argument into `[min_size, max_size]`.
pub struct MipmapCache {
    orientation: Orientation,
    min_size: i32,
    max_size: i32,
    base: RgbaImage,
    dims: Vec<(u32, u32)>,
    pixmaps: Vec<Option<RgbaImage>>,
}

impl MipmapCache {
    /// Creates a cache over `[min_size, max_size]` deriving from `base`.
    pub fn new(orientation: Orientation, min_size: i32, max_size: i32, base: RgbaImage) -> Self {
        debug_assert!(min_size <= max_size);
        let slots = (max_size - min_size + 1) as usize;
        let mut cache = Self {
            orientation,
            min_size,
            max_size,
            base: RgbaImage::new(0, 0),
            dims: vec![(0, 0); slots],
            pixmaps: vec![None; slots],
        };
        cache.set_base_image(base);
        cache
    }

    /// The image the ladder currently derives from.
    pub fn base_image(&self) -> &RgbaImage {
        &self.base
    }

    pub fn min_size(&self) -> i32 {
        self.min_size
    }

    pub fn max_size(&self) -> i32 {
        self.max_size
    }

    /// Replaces the base image, invalidating the whole ladder.
    ///
    /// Per-slot dimensions are recomputed immediately (cheap arithmetic);
    /// pixmaps are dropped and rebuilt on demand or by
    /// [`rebuild_all`](Self::rebuild_all).
    pub fn set_base_image(&mut self, base: RgbaImage) {
        self.base = base;
        for size in self.min_size..=self.max_size {
            let slot = (size - self.min_size) as usize;
            self.dims[slot] = scaled_dimensions(
                self.base.width(),
                self.base.height(),
                size as u32,
                self.orientation,
            );
            self.pixmaps[slot] = None;
        }
    }

    /// Builds the pixmap for `size` (clamped) if it is missing.
    pub fn ensure_built(&mut self, size: i32) {
        let size = self.clamp(size);
        let slot = (size - self.min_size) as usize;
        if self.pixmaps[slot].is_none() {
            self.pixmaps[slot] = Some(self.scale_to(size));
        }
    }

    /// Eagerly rebuilds every slot against the current base image.
    pub fn rebuild_all(&mut self) {
        debug!(
            "rebuilding icon ladder for sizes {}..={}",
            self.min_size, self.max_size
        );
        for size in self.min_size..=self.max_size {
            let slot = (size - self.min_size) as usize;
            self.pixmaps[slot] = Some(self.scale_to(size));
        }
    }

    /// The prescaled bitmap for `size` (clamped), building it if needed.
    pub fn bitmap(&mut self, size: i32) -> &RgbaImage {
        let size = self.clamp(size);
        self.ensure_built(size);
        let slot = (size - self.min_size) as usize;
        self.pixmaps[slot].as_ref().unwrap()
    }

    /// Width of the bitmap at `size` (clamped), without building it.
    pub fn width(&self, size: i32) -> i32 {
        self.dims[(self.clamp(size) - self.min_size) as usize].0 as i32
    }

    /// Height of the bitmap at `size` (clamped), without building it.
    pub fn height(&self, size: i32) -> i32 {
        self.dims[(self.clamp(size) - self.min_size) as usize].1 as i32
    }

    fn clamp(&self, size: i32) -> i32 {
        size.clamp(self.min_size, self.max_size)
    }

    fn scale_to(&self, size: i32) -> RgbaImage {
        let (width, height) = scaled_dimensions(
            self.base.width(),
            self.base.height(),
            size as u32,
            self.orientation,
        );
        if width == 0 || height == 0 {
            return RgbaImage::new(width, height);
        }
        imageops::resize(&self.base, width, height, FilterType::Triangle)
    }
}
