use serde::{Serialize, Deserialize};

mod binding;
mod engine;
mod position;

pub use binding::RenderBinding;
pub use engine::Viewer;

/// Policy for index movement at the ends of the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Wrap around modulo the item count
    Circular,
    /// Stop at the first and last item
    Clamped,
}

/// Whether an index change is currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    Transitioning,
}

/// Direction of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Point-in-time view of a viewer's state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSnapshot {
    pub len: usize,
    pub current_index: usize,
    pub transition: TransitionState,
    /// Index the in-flight transition will land on
    pub pending_target: Option<usize>,
}
