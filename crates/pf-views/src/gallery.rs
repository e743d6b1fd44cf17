//! Photography gallery with switchable landscape and portrait sets

use std::sync::Arc;
use std::time::{Duration, Instant};
use parking_lot::Mutex;
use pf_core::{Clock, TaskId, TaskQueue, Viewer, ViewerConfig};
use tracing::debug;

/// Delay between choosing a mode and swapping the slides, so the stage
/// rotation can start first
pub const MODE_SWITCH_DELAY: Duration = Duration::from_millis(50);

/// Which image set is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryMode {
    #[default]
    Landscape,
    Portrait,
}

/// Location and size of an image set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSet {
    pub folder: &'static str,
    pub count: usize,
    pub extension: &'static str,
}

impl GalleryMode {
    pub fn image_set(&self) -> ImageSet {
        match self {
            Self::Landscape => ImageSet {
                folder: "project pics/photography/horizontal/",
                count: 8,
                extension: ".JPG",
            },
            Self::Portrait => ImageSet {
                folder: "project pics/photography/vertical/",
                count: 29,
                extension: ".JPG",
            },
        }
    }

    /// Slides for this mode, numbered from 1
    pub fn slides(&self) -> Vec<Slide> {
        let set = self.image_set();
        (1..=set.count)
            .map(|n| Slide {
                src: format!("{}{}{}", set.folder, n, set.extension),
            })
            .collect()
    }

    /// Stage class applied while this mode is active
    pub fn stage_class(&self) -> Option<&'static str> {
        match self {
            Self::Landscape => None,
            Self::Portrait => Some("mode-portrait"),
        }
    }
}

/// One photograph in the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub src: String,
}

struct GalleryState {
    mode: GalleryMode,
    pending: Option<TaskId>,
    timers: TaskQueue<GalleryMode>,
}

/// Owns the carousel viewer and swaps its slides on mode changes
pub struct PhotoGallery {
    viewer: Arc<Viewer<Slide>>,
    clock: Arc<dyn Clock>,
    state: Mutex<GalleryState>,
}

impl PhotoGallery {
    /// Create a gallery showing the landscape set
    pub fn new(config: ViewerConfig, clock: Arc<dyn Clock>) -> Self {
        let mode = GalleryMode::default();
        let viewer = Arc::new(Viewer::with_clock(mode.slides(), config, clock.clone()));

        Self {
            viewer,
            clock,
            state: Mutex::new(GalleryState {
                mode,
                pending: None,
                timers: TaskQueue::new(),
            }),
        }
    }

    pub fn viewer(&self) -> &Arc<Viewer<Slide>> {
        &self.viewer
    }

    /// Most recently requested mode
    pub fn mode(&self) -> GalleryMode {
        self.state.lock().mode
    }

    /// Request a different image set. Returns false if it is already selected.
    pub fn switch_mode(&self, mode: GalleryMode) -> bool {
        let mut state = self.state.lock();
        if state.mode == mode {
            return false;
        }

        if let Some(superseded) = state.pending.take() {
            state.timers.cancel(superseded);
        }

        let due = self.clock.now() + MODE_SWITCH_DELAY;
        let task = state.timers.schedule(due, mode);
        state.pending = Some(task);
        state.mode = mode;
        debug!(?mode, "Gallery mode switch scheduled");
        true
    }

    /// Apply a due mode switch. A switch blocked by a carousel transition
    /// stays pending and is retried once the transition settles.
    pub fn poll(&self) -> bool {
        let now = self.clock.now();
        let mut state = self.state.lock();
        let Some((_, mode)) = state.timers.drain_due(now).pop() else {
            return false;
        };
        state.pending = None;
        drop(state);

        match self.viewer.replace_items(mode.slides()) {
            Ok(()) => {
                debug!(?mode, "Gallery slides replaced");
                true
            }
            Err(err) => {
                debug!(?mode, "Gallery mode switch deferred: {}", err);
                let mut state = self.state.lock();
                // A newer switch scheduled meanwhile wins
                if state.pending.is_none() && state.mode == mode {
                    let retry_at = self.viewer.next_deadline().unwrap_or(now).max(now);
                    let task = state.timers.schedule(retry_at, mode);
                    state.pending = Some(task);
                }
                false
            }
        }
    }

    /// When the pending mode switch becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.lock().timers.next_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::{ManualClock, PageConfig};

    fn gallery() -> (PhotoGallery, ManualClock) {
        let clock = ManualClock::new();
        let gallery = PhotoGallery::new(PageConfig::photography().viewer, Arc::new(clock.clone()));
        (gallery, clock)
    }

    #[test]
    fn test_slide_sources() {
        let slides = GalleryMode::Portrait.slides();
        assert_eq!(slides.len(), 29);
        assert_eq!(slides[0].src, "project pics/photography/vertical/1.JPG");
        assert_eq!(GalleryMode::Landscape.slides().len(), 8);
    }

    #[test]
    fn test_mode_switch_applies_after_delay() {
        let (gallery, clock) = gallery();
        assert!(!gallery.switch_mode(GalleryMode::Landscape));
        assert!(gallery.switch_mode(GalleryMode::Portrait));
        assert_eq!(gallery.mode(), GalleryMode::Portrait);

        assert!(!gallery.poll());
        assert_eq!(gallery.viewer().len(), 8);

        clock.advance(MODE_SWITCH_DELAY);
        assert!(gallery.poll());
        assert_eq!(gallery.viewer().len(), 29);
        assert_eq!(gallery.viewer().current_index(), 0);
        assert_eq!(gallery.next_deadline(), None);
    }

    #[test]
    fn test_newer_switch_supersedes_pending_one() {
        let (gallery, clock) = gallery();
        gallery.switch_mode(GalleryMode::Portrait);
        gallery.switch_mode(GalleryMode::Landscape);

        clock.advance(MODE_SWITCH_DELAY);
        assert!(gallery.poll());
        assert_eq!(gallery.viewer().len(), 8);
        assert!(!gallery.poll());
    }

    #[test]
    fn test_switch_waits_for_transition() {
        let (gallery, clock) = gallery();
        assert!(gallery.viewer().next());
        let settles_at = gallery.viewer().next_deadline();
        gallery.switch_mode(GalleryMode::Portrait);

        clock.advance(MODE_SWITCH_DELAY);
        assert!(!gallery.poll());
        assert_eq!(gallery.viewer().len(), 8);

        // Blocked switch is kept and retried when the carousel settles
        assert_eq!(gallery.mode(), GalleryMode::Portrait);
        assert_eq!(gallery.next_deadline(), settles_at);
        assert!(!gallery.switch_mode(GalleryMode::Portrait));

        clock.advance(Duration::from_millis(300));
        gallery.viewer().poll();
        assert_eq!(gallery.viewer().current_index(), 1);
        assert!(gallery.poll());
        assert_eq!(gallery.viewer().len(), 29);
        assert_eq!(gallery.viewer().current_index(), 0);
        assert_eq!(gallery.next_deadline(), None);
    }

    #[test]
    fn test_switch_back_while_blocked_keeps_latest_mode() {
        let (gallery, clock) = gallery();
        gallery.viewer().next();
        gallery.switch_mode(GalleryMode::Portrait);
        clock.advance(MODE_SWITCH_DELAY);
        assert!(!gallery.poll());

        assert!(gallery.switch_mode(GalleryMode::Landscape));
        clock.advance(Duration::from_millis(300));
        gallery.viewer().poll();

        assert!(gallery.poll());
        assert_eq!(gallery.viewer().len(), 8);
        assert_eq!(gallery.viewer().current_index(), 0);
        assert!(!gallery.poll());
    }
}
