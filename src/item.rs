//! The dock item abstraction and its animation engine.
//!
//! A dock item is one interactive slot in the panel: a launcher, a
//! running-program icon, a pager tile. Items are not widgets; the panel owns
//! a flat list of them and drives layout, animation, and drawing itself,
//! which is what keeps the parabolic zoom smooth.
//!
//! [`ItemCore`] holds the state every item shares: label, orientation, size
//! bounds, current geometry, and the two-phase snapshot animation machine.
//! [`DockItem`] is the capability interface the panel talks to.

use image::RgbaImage;

use crate::geometry::{Geometry, Orientation};
use crate::task::{TaskInfo, WindowId};

// ============================================================================
// Press events
// ============================================================================

/// Mouse button of a press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressButton {
    Left,
    Middle,
    Right,
}

/// A pointer press forwarded by the panel, in panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressEvent {
    pub x: i32,
    pub y: i32,
    pub button: PressButton,
}

// ============================================================================
// ItemCore
// ============================================================================

/// Shared state of a dock item: identity, size bounds, geometry, and the
/// animation state machine.
///
/// Animation runs in two phases. The panel captures the item's current
/// geometry as the start snapshot, assigns the target geometry and captures
/// it as the end snapshot, then calls [`start_animation`](Self::start_animation).
/// Each subsequent [`advance`](Self::advance) moves the current geometry one
/// step along the integer-interpolated path; after `total_steps` advances the
/// geometry equals the end snapshot exactly.
#[derive(Debug, Clone)]
pub struct ItemCore {
    label: String,
    orientation: Orientation,
    min_size: i32,
    max_size: i32,
    geometry: Geometry,
    start: Geometry,
    end: Geometry,
    current_step: i32,
    total_steps: i32,
}

impl ItemCore {
    /// Creates an item at its minimum size with zeroed position.
    ///
    /// `min_size <= max_size` is a construction contract; both bounds are
    /// fixed for the item's lifetime.
    pub fn new(
        label: impl Into<String>,
        orientation: Orientation,
        min_size: i32,
        max_size: i32,
    ) -> Self {
        debug_assert!(min_size <= max_size);
        let geometry = Geometry::new(0, 0, min_size);
        Self {
            label: label.into(),
            orientation,
            min_size,
            max_size,
            geometry,
            start: geometry,
            end: geometry,
            current_step: 0,
            total_steps: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation.is_horizontal()
    }

    pub fn min_size(&self) -> i32 {
        self.min_size
    }

    pub fn max_size(&self) -> i32 {
        self.max_size
    }

    /// The geometry the item renders at this frame.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn left(&self) -> i32 {
        self.geometry.left
    }

    pub fn top(&self) -> i32 {
        self.geometry.top
    }

    pub fn size(&self) -> i32 {
        self.geometry.size
    }

    /// Assigns the geometry directly. The panel uses this to place the item
    /// before capturing a snapshot; sizes are the panel's responsibility to
    /// keep within `[min_size, max_size]`.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    pub fn set_size(&mut self, size: i32) {
        self.geometry.size = size;
    }

    /// Captures the current geometry as the animation start.
    pub fn snapshot_start(&mut self) {
        self.start = self.geometry;
    }

    /// Captures the current geometry as the animation end.
    pub fn snapshot_end(&mut self) {
        self.end = self.geometry;
    }

    /// Resets the geometry to the start snapshot and arms the animation.
    ///
    /// A step count below 1 skips straight to the end snapshot, which keeps
    /// the item robust against off-by-one step math upstream.
    pub fn start_animation(&mut self, total_steps: i32) {
        if total_steps < 1 {
            self.geometry = self.end;
            self.current_step = 0;
            self.total_steps = 0;
            return;
        }
        self.geometry = self.start;
        self.current_step = 0;
        self.total_steps = total_steps;
    }

    /// Advances the animation one step.
    ///
    /// Interpolation is integer-weighted (`start + (end - start) * step /
    /// total`, truncating), so geometry stays pixel-aligned every frame and
    /// the final step lands on the end snapshot exactly. Calls past the last
    /// step are no-ops.
    pub fn advance(&mut self) {
        if self.current_step >= self.total_steps {
            return;
        }
        self.current_step += 1;
        let step = self.current_step;
        let total = self.total_steps;
        self.geometry = Geometry::new(
            self.start.left + (self.end.left - self.start.left) * step / total,
            self.start.top + (self.end.top - self.start.top) * step / total,
            self.start.size + (self.end.size - self.start.size) * step / total,
        );
    }

    /// Whether steps remain before the end snapshot is reached.
    pub fn is_animating(&self) -> bool {
        self.current_step < self.total_steps
    }
}

// ============================================================================
// DockItem
// ============================================================================

/// Capability interface for dock slots.
///
/// The required surface is small: size-to-extent mapping and drawing. Press
/// handling and the task hooks default to no-ops so that items without
/// windows (pager tiles, clocks) implement only what they use.
pub trait DockItem {
    /// Shared item state.
    fn core(&self) -> &ItemCore;

    /// Shared item state, mutably. The panel drives animation through this.
    fn core_mut(&mut self) -> &mut ItemCore;

    /// The item's rendered width at a given zoom size.
    fn width_for_size(&self, size: i32) -> i32;

    /// The item's rendered height at a given zoom size.
    fn height_for_size(&self, size: i32) -> i32;

    /// Draws the item onto the panel canvas at its current geometry.
    ///
    /// `position` is the item's ordinal slot in the dock and `max_position`
    /// the highest slot; together they determine the item's tint.
    fn draw(&mut self, canvas: &mut RgbaImage, position: usize, max_position: usize);

    /// Pointer press handler.
    fn on_press(&mut self, _event: &PressEvent) {}

    /// Offers a new task to this item. Returns true if claimed.
    fn add_task(&mut self, _task: &TaskInfo) -> bool {
        false
    }

    /// Updates a task previously claimed by this item.
    fn update_task(&mut self, _task: &TaskInfo) -> bool {
        false
    }

    /// Detaches the task for a closed window. Returns true if it was held.
    fn remove_task(&mut self, _window: WindowId) -> bool {
        false
    }

    fn has_task(&self, _window: WindowId) -> bool {
        false
    }

    /// Whether this item orders before the program item for `command`.
    fn before_task(&self, _command: &str) -> bool {
        true
    }

    /// Whether the panel should drop this slot on the next rebuild.
    fn should_be_removed(&self) -> bool {
        false
    }

    /// Display label. Owned so implementations can synthesize dynamic labels
    /// (e.g. a window count suffix).
    fn label(&self) -> String {
        self.core().label().to_owned()
    }

    fn width(&self) -> i32 {
        self.width_for_size(self.core().size())
    }

    fn height(&self) -> i32 {
        self.height_for_size(self.core().size())
    }

    /// Width when fully zoomed in.
    fn max_width(&self) -> i32 {
        self.width_for_size(self.core().max_size())
    }

    /// Height when fully zoomed in.
    fn max_height(&self) -> i32 {
        self.height_for_size(self.core().max_size())
    }

    /// Width when not zoomed.
    fn min_width(&self) -> i32 {
        self.width_for_size(self.core().min_size())
    }

    /// Height when not zoomed.
    fn min_height(&self) -> i32 {
        self.height_for_size(self.core().min_size())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct SquareItem {
        core: ItemCore,
    }

    impl SquareItem {
        fn new(min: i32, max: i32) -> Self {
            Self {
                core: ItemCore::new("square", Orientation::Horizontal, min, max),
            }
        }
    }

    impl DockItem for SquareItem {
        fn core(&self) -> &ItemCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut ItemCore {
            &mut self.core
        }

        fn width_for_size(&self, size: i32) -> i32 {
            size
        }

        fn height_for_size(&self, size: i32) -> i32 {
            size
        }

        fn draw(&mut self, _canvas: &mut RgbaImage, _position: usize, _max_position: usize) {}
    }

    fn animate(core: &mut ItemCore, end: Geometry, steps: i32) {
        core.snapshot_start();
        core.set_geometry(end);
        core.snapshot_end();
        core.start_animation(steps);
    }

    #[test]
    fn animation_lands_exactly_on_end_geometry() {
        let mut core = ItemCore::new("item", Orientation::Horizontal, 16, 64);
        core.set_geometry(Geometry::new(3, 7, 16));
        let end = Geometry::new(30, 12, 64);
        animate(&mut core, end, 7);

        assert_eq!(core.geometry(), Geometry::new(3, 7, 16));
        for _ in 0..7 {
            core.advance();
        }
        assert_eq!(core.geometry(), end);
        assert!(!core.is_animating());
    }

    #[test]
    fn intermediate_steps_stay_on_the_integer_path() {
        let mut core = ItemCore::new("item", Orientation::Horizontal, 16, 64);
        core.set_geometry(Geometry::new(0, 100, 16));
        // Top decreases while left and size increase.
        let end = Geometry::new(45, 40, 64);
        animate(&mut core, end, 9);

        let mut previous = core.geometry();
        for _ in 0..9 {
            core.advance();
            let current = core.geometry();
            assert!(current.left >= previous.left && current.left <= end.left);
            assert!(current.top <= previous.top && current.top >= end.top);
            assert!(current.size >= previous.size && current.size <= end.size);
            previous = current;
        }
    }

    #[test]
    fn advancing_past_the_last_step_is_a_no_op() {
        let mut core = ItemCore::new("item", Orientation::Horizontal, 16, 64);
        core.set_geometry(Geometry::new(0, 0, 16));
        let end = Geometry::new(10, 0, 64);
        animate(&mut core, end, 3);

        for _ in 0..10 {
            core.advance();
        }
        assert_eq!(core.geometry(), end);
    }

    #[test]
    fn zero_steps_jumps_to_end_geometry() {
        let mut core = ItemCore::new("item", Orientation::Horizontal, 16, 64);
        core.set_geometry(Geometry::new(0, 0, 16));
        let end = Geometry::new(25, 5, 64);
        animate(&mut core, end, 0);

        assert_eq!(core.geometry(), end);
        assert!(!core.is_animating());
        core.advance();
        assert_eq!(core.geometry(), end);
    }

    #[test]
    fn a_new_snapshot_sequence_abandons_the_old_animation() {
        let mut core = ItemCore::new("item", Orientation::Horizontal, 16, 64);
        core.set_geometry(Geometry::new(0, 0, 16));
        animate(&mut core, Geometry::new(40, 0, 64), 8);
        core.advance();
        core.advance();

        // Retarget mid-flight from wherever the item is now.
        let retarget = Geometry::new(-10, 2, 20);
        animate(&mut core, retarget, 4);
        for _ in 0..4 {
            core.advance();
        }
        assert_eq!(core.geometry(), retarget);
    }

    #[test]
    fn snapshots_are_idempotent() {
        let mut core = ItemCore::new("item", Orientation::Horizontal, 16, 64);
        core.set_geometry(Geometry::new(8, 9, 32));
        core.snapshot_start();
        core.snapshot_start();
        core.snapshot_end();
        core.start_animation(2);
        core.advance();
        core.advance();
        assert_eq!(core.geometry(), Geometry::new(8, 9, 32));
    }

    #[test]
    fn labels_are_mutable() {
        let mut core = ItemCore::new("files", Orientation::Vertical, 16, 64);
        assert_eq!(core.label(), "files");
        core.set_label("files (2)");
        assert_eq!(core.label(), "files (2)");
    }

    #[test]
    fn trait_defaults_decline_tasks() {
        use crate::task::{TaskInfo, WindowId};

        let mut item = SquareItem::new(16, 64);
        let task = TaskInfo::new(WindowId(7), "editor", false);
        assert!(!item.add_task(&task));
        assert!(!item.update_task(&task));
        assert!(!item.remove_task(WindowId(7)));
        assert!(!item.has_task(WindowId(7)));
        assert!(item.before_task("editor"));
        assert!(!item.should_be_removed());
        assert_eq!(item.label(), "square");
    }

    #[test]
    fn extent_helpers_follow_the_bounds() {
        let item = SquareItem::new(16, 64);
        assert_eq!(item.min_width(), 16);
        assert_eq!(item.max_width(), 64);
        assert_eq!(item.min_height(), 16);
        assert_eq!(item.max_height(), 64);
        // Fresh items sit at their minimum size.
        assert_eq!(item.width(), 16);
        assert_eq!(item.height(), 16);
    }
}
