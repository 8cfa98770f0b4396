//! Icon-based dock items: launchers, program icons, pager tiles.
//!
//! An [`IconDockItem`] owns an authoritative source bitmap, the recolored
//! image derived from it for the item's current dock position, and a
//! [`MipmapCache`] of prescaled bitmaps built from the recolored image. The
//! recolor pass runs only when the item's position ratio changes; the cache
//! ladder is rebuilt right after, so the per-frame draw path is a lookup and
//! a blit.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::{debug, warn};

use crate::cache::MipmapCache;
use crate::error::IconError;
use crate::geometry::Orientation;
use crate::item::{DockItem, ItemCore};
use crate::recolor::{position_ratio, recolor_image};

/// A dock item rendered from a single icon bitmap.
pub struct IconDockItem {
    core: ItemCore,
    source: RgbaImage,
    cache: MipmapCache,
    last_ratio: Option<f64>,
}

impl IconDockItem {
    /// Creates an item from a raw RGBA bitmap.
    ///
    /// The cache ladder initially derives from the unrecolored source; the
    /// first [`draw`](DockItem::draw) applies the position tint and rebuilds.
    pub fn new(
        label: impl Into<String>,
        orientation: Orientation,
        icon: RgbaImage,
        min_size: i32,
        max_size: i32,
    ) -> Self {
        let core = ItemCore::new(label, orientation, min_size, max_size);
        let cache = MipmapCache::new(orientation, min_size, max_size, icon.clone());
        Self {
            core,
            source: icon,
            cache,
            last_ratio: None,
        }
    }

    /// Creates an item by decoding an encoded icon (PNG et al.).
    pub fn from_encoded_bytes(
        label: impl Into<String>,
        orientation: Orientation,
        bytes: &[u8],
        min_size: i32,
        max_size: i32,
    ) -> Result<Self, IconError> {
        let label = label.into();
        let icon = image::load_from_memory(bytes)
            .inspect_err(|err| warn!("could not decode icon for '{label}': {err}"))?
            .to_rgba8();
        if icon.width() == 0 || icon.height() == 0 {
            return Err(IconError::EmptyImage);
        }
        Ok(Self::new(label, orientation, icon, min_size, max_size))
    }

    /// Replaces the icon bitmap, keeping the item's recolor state.
    ///
    /// The previously applied position tint (if any) is reapplied to the new
    /// source and the whole cache ladder is rebuilt.
    pub fn set_icon(&mut self, icon: RgbaImage) {
        debug!(
            "setting icon for '{}': {}x{}",
            self.core.label(),
            icon.width(),
            icon.height()
        );
        self.source = icon;
        let base = match self.last_ratio {
            Some(ratio) => recolor_image(&self.source, ratio),
            None => self.source.clone(),
        };
        self.cache.set_base_image(base);
        self.cache.rebuild_all();
    }

    /// Replaces the icon bitmap, prescaled to a target aspect.
    ///
    /// Pager tiles use this to match the screen's width/height ratio instead
    /// of the source art's.
    pub fn set_icon_scaled(&mut self, icon: RgbaImage, width: u32, height: u32) {
        if width == 0 || height == 0 || icon.width() == 0 || icon.height() == 0 {
            self.set_icon(RgbaImage::new(0, 0));
            return;
        }
        let scaled = imageops::resize(&icon, width, height, FilterType::Triangle);
        self.set_icon(scaled);
    }

    /// The authoritative, untinted icon bitmap.
    pub fn source_image(&self) -> &RgbaImage {
        &self.source
    }

    /// The tinted image the cache ladder currently derives from.
    pub fn recolored_image(&self) -> &RgbaImage {
        self.cache.base_image()
    }

    /// The position ratio the current recolor state was built for, if a draw
    /// has happened yet.
    pub fn last_position_ratio(&self) -> Option<f64> {
        self.last_ratio
    }

    /// The prescaled icon bitmap for `size` (clamped), building it if needed.
    pub fn icon(&mut self, size: i32) -> &RgbaImage {
        self.cache.bitmap(size)
    }

    /// Icon width at `size` (clamped).
    pub fn icon_width(&self, size: i32) -> i32 {
        self.cache.width(size)
    }

    /// Icon height at `size` (clamped).
    pub fn icon_height(&self, size: i32) -> i32 {
        self.cache.height(size)
    }

    fn apply_position(&mut self, position: usize, max_position: usize) {
        let ratio = position_ratio(position, max_position);
        if self.last_ratio == Some(ratio) {
            return;
        }
        debug!(
            "recoloring '{}' for position {position}/{max_position}",
            self.core.label()
        );
        self.last_ratio = Some(ratio);
        self.cache.set_base_image(recolor_image(&self.source, ratio));
        self.cache.rebuild_all();
    }
}

impl DockItem for IconDockItem {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn width_for_size(&self, size: i32) -> i32 {
        self.icon_width(size)
    }

    fn height_for_size(&self, size: i32) -> i32 {
        self.icon_height(size)
    }

    fn draw(&mut self, canvas: &mut RgbaImage, position: usize, max_position: usize) {
        self.apply_position(position, max_position);
        let (left, top, size) = (self.core.left(), self.core.top(), self.core.size());
        let bitmap = self.cache.bitmap(size);
        imageops::overlay(canvas, bitmap, left as i64, top as i64);
    }
}
