//! Page-flip binding for the sketchbook page

use parking_lot::RwLock;
use pf_core::{Direction, RenderBinding};

use crate::style::{ControlStyle, StageFrame};

/// Pages before the current one are flipped onto the left stack
///
/// Each stack keeps its own z-order so the page nearest the spine is on top.
#[derive(Debug)]
pub struct PageFlipBinding {
    min_index: usize,
    frame: RwLock<StageFrame>,
}

impl PageFlipBinding {
    /// `min_index` is the first page that can be shown on the right
    pub fn new(min_index: usize) -> Self {
        Self {
            min_index,
            frame: RwLock::new(StageFrame::default()),
        }
    }

    pub fn frame(&self) -> StageFrame {
        self.frame.read().clone()
    }
}

impl<T: Send + Sync> RenderBinding<T> for PageFlipBinding {
    fn render(&self, items: &[T], current: usize, _previous: usize) {
        let total = items.len();
        let mut frame = self.frame.write();
        frame.fit(total);

        for (index, page) in frame.elements.iter_mut().enumerate() {
            page.classes.clear();
            if index < current {
                page.add_class("flipped");
                page.z_index = Some(index as i32 + 1);
            } else {
                page.z_index = Some((total - index) as i32);
            }
        }

        frame.controls = ControlStyle::dimmed(
            current <= self.min_index,
            current + 1 >= total,
        );
    }

    fn transition_started(&self, items: &[T], from: usize, to: usize, direction: Direction) {
        let mut frame = self.frame.write();
        frame.fit(items.len());

        // The turning page is the right page going forward, the left one going back
        let turning = match direction {
            Direction::Forward => from,
            Direction::Backward => to,
        };
        frame.elements[turning].add_class("turning");
    }
}
