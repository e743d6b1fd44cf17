//! Paper stack binding for the portraits page

use parking_lot::RwLock;
use pf_core::{Direction, RenderBinding};

use crate::style::{ControlStyle, ElementStyle, StageFrame};

/// One sheet in the stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Handwritten note shown under the figure
    pub note: String,
}

impl Sheet {
    pub fn new(note: impl Into<String>) -> Self {
        Self { note: note.into() }
    }
}

/// Stacks sheets by their circular distance from the current one
///
/// The current sheet sits on top, the following sheet peeks out underneath
/// and everything else is hidden.
#[derive(Debug, Default)]
pub struct PaperStackBinding {
    frame: RwLock<StageFrame>,
}

impl PaperStackBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> StageFrame {
        self.frame.read().clone()
    }
}

impl RenderBinding<Sheet> for PaperStackBinding {
    fn render(&self, items: &[Sheet], current: usize, _previous: usize) {
        let total = items.len();
        let mut caption = None;

        let elements = (0..total)
            .map(|index| {
                let position = (index + total - current) % total;
                let mut style = ElementStyle::default();
                match position {
                    0 => {
                        style.z_index = Some(10);
                        style.opacity = Some(1.0);
                        style.add_class("active");
                        caption = Some(format!(
                            "FIG 0{}. // {}",
                            index + 1,
                            items[index].note.to_uppercase()
                        ));
                    }
                    1 => {
                        style.z_index = Some(9);
                        style.opacity = Some(1.0);
                        style.add_class("next");
                    }
                    _ => {
                        style.z_index = Some(10 - position as i32);
                        style.opacity = Some(0.0);
                    }
                }
                style
            })
            .collect();

        *self.frame.write() = StageFrame {
            elements,
            controls: ControlStyle::default(),
            caption,
        };
    }

    fn transition_started(&self, items: &[Sheet], from: usize, to: usize, direction: Direction) {
        let mut frame = self.frame.write();
        frame.fit(items.len());

        match direction {
            Direction::Forward => frame.elements[from].add_class("fly-out-right"),
            Direction::Backward => {
                let incoming = &mut frame.elements[to];
                incoming.add_class("fly-out-left");
                incoming.opacity = Some(1.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheets() -> Vec<Sheet> {
        ["charcoal study", "ink", "graphite", "pastel"]
            .into_iter()
            .map(Sheet::new)
            .collect()
    }

    #[test]
    fn test_stack_order() {
        let binding = PaperStackBinding::new();
        binding.render(&sheets(), 3, 2);
        let frame = binding.frame();

        assert!(frame.elements[3].has_class("active"));
        assert_eq!(frame.elements[3].z_index, Some(10));
        assert!(frame.elements[0].has_class("next"));
        assert_eq!(frame.elements[0].z_index, Some(9));
        assert_eq!(frame.elements[1].z_index, Some(8));
        assert_eq!(frame.elements[1].opacity, Some(0.0));
        assert_eq!(frame.caption.as_deref(), Some("FIG 04. // PASTEL"));
    }

    #[test]
    fn test_render_is_idempotent_and_clears_exit_classes() {
        let binding = PaperStackBinding::new();
        let items = sheets();
        binding.render(&items, 0, 0);
        binding.transition_started(&items, 0, 1, Direction::Forward);
        assert!(binding.frame().elements[0].has_class("fly-out-right"));

        binding.render(&items, 1, 0);
        let first = binding.frame();
        binding.render(&items, 1, 0);

        assert_eq!(first, binding.frame());
        assert!(!first.elements[0].has_class("fly-out-right"));
    }

    #[test]
    fn test_backward_start_reveals_incoming_sheet() {
        let binding = PaperStackBinding::new();
        let items = sheets();
        binding.transition_started(&items, 0, 3, Direction::Backward);

        let frame = binding.frame();
        assert!(frame.elements[3].has_class("fly-out-left"));
        assert_eq!(frame.elements[3].opacity, Some(1.0));
    }
}
