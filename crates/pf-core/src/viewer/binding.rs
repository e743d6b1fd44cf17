//! Render binding trait

use super::Direction;

/// Translates viewer state into visible output
///
/// Bindings only read state. `render` must be idempotent: calling it twice with
/// the same arguments leaves the output unchanged.
pub trait RenderBinding<T>: Send + Sync {
    /// Called after every committed index change and on item replacement
    fn render(&self, items: &[T], current: usize, previous: usize);

    /// Called when a transition begins, before the index changes
    fn transition_started(&self, _items: &[T], _from: usize, _to: usize, _direction: Direction) {}
}
