//! Input handling: raw pointer, touch and keyboard events to viewer commands

mod adapter;

pub use adapter::InputAdapter;

use crate::viewer::Viewer;

/// Keys the adapter cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Raw input delivered by the host event loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    TouchStart { screen_x: f32 },
    TouchEnd { screen_x: f32 },
    Key(NavKey),
    ItemClick { index: usize },
}

/// Command the adapter dispatched and the viewer accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(usize),
}

/// Anything the adapter can drive
pub trait Navigable {
    fn next(&self) -> bool;
    fn previous(&self) -> bool;
    fn go_to(&self, index: usize) -> bool;
    fn current_index(&self) -> usize;
}

impl<T: Send + Sync + 'static> Navigable for Viewer<T> {
    fn next(&self) -> bool {
        Viewer::next(self)
    }

    fn previous(&self) -> bool {
        Viewer::previous(self)
    }

    fn go_to(&self, index: usize) -> bool {
        Viewer::go_to(self, index)
    }

    fn current_index(&self) -> usize {
        Viewer::current_index(self)
    }
}
