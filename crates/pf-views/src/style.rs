//! Headless style model written by the render bindings

use std::collections::BTreeSet;

/// Opacity applied to a navigation control that cannot be used
pub const DIMMED_CONTROL_OPACITY: f32 = 0.3;

/// Style and class state of one item element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStyle {
    pub z_index: Option<i32>,
    pub opacity: Option<f32>,
    pub classes: BTreeSet<&'static str>,
    /// Signed offset from the current item (`data-pos`)
    pub position: Option<i32>,
    pub pointer_events: Option<bool>,
}

impl ElementStyle {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &'static str) {
        self.classes.insert(class);
    }

    pub fn is_visible(&self) -> bool {
        self.opacity.map_or(true, |opacity| opacity > 0.0)
    }
}

/// Opacity of the previous/next controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlStyle {
    pub prev_opacity: f32,
    pub next_opacity: f32,
}

impl Default for ControlStyle {
    fn default() -> Self {
        Self {
            prev_opacity: 1.0,
            next_opacity: 1.0,
        }
    }
}

impl ControlStyle {
    pub fn dimmed(prev_disabled: bool, next_disabled: bool) -> Self {
        let opacity = |disabled: bool| if disabled { DIMMED_CONTROL_OPACITY } else { 1.0 };
        Self {
            prev_opacity: opacity(prev_disabled),
            next_opacity: opacity(next_disabled),
        }
    }
}

/// Everything a binding has written for one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageFrame {
    pub elements: Vec<ElementStyle>,
    pub controls: ControlStyle,
    pub caption: Option<String>,
}

impl StageFrame {
    /// Make sure there is one element per item
    pub(crate) fn fit(&mut self, len: usize) {
        self.elements.resize_with(len, ElementStyle::default);
    }
}
