//! Filmstrip binding for the photography carousel

use parking_lot::RwLock;
use pf_core::RenderBinding;

use crate::style::{ControlStyle, ElementStyle, StageFrame};

/// Slides further than this from the current one are hidden
pub const VISIBLE_RADIUS: i32 = 2;

/// Positions nearby slides by signed distance from the current one
#[derive(Debug, Default)]
pub struct FilmstripBinding {
    frame: RwLock<StageFrame>,
}

impl FilmstripBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> StageFrame {
        self.frame.read().clone()
    }
}

impl<T: Send + Sync> RenderBinding<T> for FilmstripBinding {
    fn render(&self, items: &[T], current: usize, _previous: usize) {
        let total = items.len();

        let elements = (0..total)
            .map(|index| {
                let distance = index as i32 - current as i32;
                if distance.abs() <= VISIBLE_RADIUS {
                    ElementStyle {
                        position: Some(distance),
                        pointer_events: Some(true),
                        ..ElementStyle::default()
                    }
                } else {
                    ElementStyle {
                        opacity: Some(0.0),
                        pointer_events: Some(false),
                        ..ElementStyle::default()
                    }
                }
            })
            .collect();

        *self.frame.write() = StageFrame {
            elements,
            controls: ControlStyle::dimmed(current == 0, current + 1 >= total),
            caption: None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::DIMMED_CONTROL_OPACITY;

    #[test]
    fn test_window_around_current() {
        let binding = FilmstripBinding::new();
        binding.render([(); 8].as_slice(), 3, 2);
        let frame = binding.frame();

        let positions: Vec<_> = frame.elements.iter().map(|e| e.position).collect();
        assert_eq!(
            positions,
            vec![None, Some(-2), Some(-1), Some(0), Some(1), Some(2), None, None]
        );
        assert_eq!(frame.elements[0].opacity, Some(0.0));
        assert_eq!(frame.elements[0].pointer_events, Some(false));
        assert_eq!(frame.elements[3].opacity, None);
        assert_eq!(frame.controls, ControlStyle::default());
    }

    #[test]
    fn test_controls_dim_at_ends() {
        let binding = FilmstripBinding::new();
        binding.render([(); 3].as_slice(), 0, 0);
        assert_eq!(binding.frame().controls.prev_opacity, DIMMED_CONTROL_OPACITY);

        binding.render([(); 3].as_slice(), 2, 1);
        assert_eq!(binding.frame().controls.next_opacity, DIMMED_CONTROL_OPACITY);
        assert_eq!(binding.frame().controls.prev_opacity, 1.0);
    }
}
