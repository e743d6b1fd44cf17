//! Core functionality for the portfolio viewers
//!
//! This crate provides the paginated viewer state machine, the input adapter
//! feeding it, and the small site-level collaborators (route table, contact
//! payload) shared by every page.

pub mod clock;
pub mod config;
pub mod contact;
pub mod error;
pub mod input;
pub mod routes;
pub mod scheduler;
pub mod viewer;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ClickMode, InputConfig, PageConfig, ViewerConfig};
pub use contact::{ContactEndpoint, ContactForm, ContactSubmission};
pub use error::{ContactError, ViewerError};
pub use input::{InputAdapter, InputEvent, NavCommand, NavKey, Navigable};
pub use routes::{DialTarget, RouteAction, RouteTable};
pub use scheduler::{TaskId, TaskQueue};
pub use viewer::{
    BoundaryMode, Direction, RenderBinding, TransitionState, Viewer, ViewerSnapshot,
};
