//! paradock-renderer: dock item geometry, animation, and icon caching
//!
//! This crate is the rendering core of a parabolic-zoom dock: the per-item
//! geometry/animation state machine, the position-based icon recolor pass,
//! and the size-indexed bitmap cache that keeps the draw path free of
//! rescaling work.
//!
//! Everything runs synchronously on the panel's render loop. On each pointer
//! move the panel assigns target geometries, snapshots them into the items'
//! animation engines, and then advances one step per frame; each item's draw
//! is a cache lookup plus a blit.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use paradock_renderer::{DockItem, Geometry, IconDockItem, Orientation};
//!
//! let glyph = RgbaImage::from_pixel(128, 128, Rgba([250, 250, 250, 255]));
//! let mut item = IconDockItem::new("files", Orientation::Horizontal, glyph, 16, 64);
//!
//! // Zoom in: snapshot the current placement, assign the target, animate.
//! item.core_mut().snapshot_start();
//! item.core_mut().set_geometry(Geometry::new(10, 0, 64));
//! item.core_mut().snapshot_end();
//! item.core_mut().start_animation(4);
//!
//! let mut canvas = RgbaImage::new(256, 96);
//! while item.core().is_animating() {
//!     item.core_mut().advance();
//!     item.draw(&mut canvas, 0, 9);
//! }
//! assert_eq!(item.core().size(), 64);
//! ```
//!
//! # Appearance settings
//!
//! Items take their size bounds from a serializable [`AppearanceProfile`],
//! the data carrier between the embedder's config store and item
//! construction:
//!
//! ```
//! use paradock_renderer::AppearanceProfile;
//!
//! let profile = AppearanceProfile::from_json(r#"{"minimumIconSize": 48}"#).unwrap();
//! let (min_size, max_size) = profile.icon_size_range();
//! assert_eq!((min_size, max_size), (48, 512));
//! ```

mod cache;
mod error;
mod geometry;
mod icon_item;
mod item;
mod profile;
mod recolor;
mod task;

pub use cache::MipmapCache;
pub use error::IconError;
pub use geometry::{scaled_dimensions, Geometry, Orientation};
pub use icon_item::IconDockItem;
pub use item::{DockItem, ItemCore, PressButton, PressEvent};
pub use profile::AppearanceProfile;
pub use recolor::{position_ratio, recolor_image, tint_for_ratio, WHITENESS_THRESHOLD};
pub use task::{TaskInfo, WindowId};
