//! Task bookkeeping types consumed by the dock item task hooks.
//!
//! The window system itself is an external collaborator; these types carry
//! only what items need to decide whether a task belongs to them.

/// Opaque identifier of a top-level window, as reported by the window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// A running task that may be attached to a dock item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    pub window: WindowId,
    /// Window title, e.g. "home -- Dolphin".
    pub name: String,
    /// Whether the window has set the demands-attention hint.
    pub demands_attention: bool,
}

impl TaskInfo {
    pub fn new(window: WindowId, name: impl Into<String>, demands_attention: bool) -> Self {
        Self {
            window,
            name: name.into(),
            demands_attention,
        }
    }
}
