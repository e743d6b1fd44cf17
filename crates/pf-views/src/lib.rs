//! Render bindings for the portfolio pages
//!
//! Each binding turns viewer state into a [`StageFrame`]: per-item z-order,
//! opacity, classes and positions, plus control dimming and captions. Hosts
//! apply the frame to whatever they draw with.

mod book;
mod carousel;
mod gallery;
mod stack;
pub mod style;

pub use book::PageFlipBinding;
pub use carousel::{FilmstripBinding, VISIBLE_RADIUS};
pub use gallery::{GalleryMode, ImageSet, PhotoGallery, Slide, MODE_SWITCH_DELAY};
pub use stack::{PaperStackBinding, Sheet};
pub use style::{ControlStyle, ElementStyle, StageFrame};
