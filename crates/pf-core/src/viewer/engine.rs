//! Paginated viewer implementation

use super::{position, Direction, RenderBinding, TransitionState, ViewerSnapshot};
use crate::clock::{Clock, SystemClock};
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::scheduler::{TaskId, TaskQueue};
use std::sync::{Arc, Weak};
use std::time::Instant;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

/// Transition waiting for its timer to expire
#[derive(Debug, Clone, Copy)]
struct Settle {
    from: usize,
    to: usize,
}

/// Viewer state stored internally
struct ViewerState<T> {
    items: Arc<[T]>,
    current: usize,
    transition: TransitionState,
    pending: Option<(TaskId, Settle)>,
    timers: TaskQueue<Settle>,
}

/// Ordered list of items with a current index and single-flight transitions
///
/// At most one transition is in flight. While it is, `next`, `previous` and
/// `go_to` are dropped rather than queued. The transition commits when the host
/// calls [`Viewer::poll`] after the configured duration has elapsed.
pub struct Viewer<T> {
    config: ViewerConfig,
    clock: Arc<dyn Clock>,
    state: Mutex<ViewerState<T>>,
    bindings: RwLock<Vec<Weak<dyn RenderBinding<T>>>>,
}

impl<T: Send + Sync + 'static> Viewer<T> {
    /// Create a viewer driven by the system clock
    pub fn new(items: Vec<T>, config: ViewerConfig) -> Self {
        Self::with_clock(items, config, Arc::new(SystemClock))
    }

    /// Create a viewer driven by the given clock
    pub fn with_clock(items: Vec<T>, config: ViewerConfig, clock: Arc<dyn Clock>) -> Self {
        let current = position::initial_index(
            config.initial_index,
            items.len(),
            config.boundary,
            config.min_index,
        );

        let state = ViewerState {
            items: Arc::from(items),
            current,
            transition: TransitionState::Idle,
            pending: None,
            timers: TaskQueue::new(),
        };

        Self {
            config,
            clock,
            state: Mutex::new(state),
            bindings: RwLock::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Step forward one item
    pub fn next(&self) -> bool {
        self.begin(|state, config| {
            position::step(
                state.current,
                state.items.len(),
                Direction::Forward,
                config.boundary,
                config.min_index,
            )
            .map(|to| (to, Direction::Forward))
        })
    }

    /// Step back one item
    pub fn previous(&self) -> bool {
        self.begin(|state, config| {
            position::step(
                state.current,
                state.items.len(),
                Direction::Backward,
                config.boundary,
                config.min_index,
            )
            .map(|to| (to, Direction::Backward))
        })
    }

    /// Move to `index` if it is exactly one step away
    pub fn go_to(&self, index: usize) -> bool {
        self.begin(|state, config| {
            position::adjacent_direction(
                state.current,
                index,
                state.items.len(),
                config.boundary,
                config.min_index,
            )
            .map(|direction| (index, direction))
        })
    }

    fn begin<F>(&self, resolve: F) -> bool
    where
        F: FnOnce(&ViewerState<T>, &ViewerConfig) -> Option<(usize, Direction)>,
    {
        let mut state = self.state.lock();

        if state.transition == TransitionState::Transitioning {
            trace!("Input dropped: transition in flight");
            return false;
        }

        let Some((to, direction)) = resolve(&*state, &self.config) else {
            trace!(current = state.current, "Input dropped: no valid target");
            return false;
        };

        let from = state.current;
        let due = self.clock.now() + self.config.transition_duration;
        let settle = Settle { from, to };
        let task = state.timers.schedule(due, settle);
        state.pending = Some((task, settle));
        state.transition = TransitionState::Transitioning;
        let items = state.items.clone();

        drop(state);
        debug!(from, to, ?direction, "Transition started");

        for binding in self.live_bindings() {
            binding.transition_started(&items, from, to, direction);
        }
        true
    }

    /// Fire expired timers. Returns true if a transition settled.
    pub fn poll(&self) -> bool {
        let mut state = self.state.lock();
        let now = self.clock.now();
        let mut settled = None;

        for (task, settle) in state.timers.drain_due(now) {
            if state.pending.map(|(pending, _)| pending) != Some(task) {
                continue;
            }
            state.current = settle.to;
            state.transition = TransitionState::Idle;
            state.pending = None;
            settled = Some(settle);
        }

        let Some(settle) = settled else {
            return false;
        };
        let items = state.items.clone();

        drop(state);
        debug!(from = settle.from, to = settle.to, "Transition settled");

        self.notify_render(&items, settle.to, settle.from);
        true
    }

    /// Abandon the in-flight transition without changing the index
    pub fn cancel_transition(&self) -> bool {
        let mut state = self.state.lock();
        let Some((task, settle)) = state.pending.take() else {
            return false;
        };
        state.timers.cancel(task);
        state.transition = TransitionState::Idle;
        debug!(from = settle.from, to = settle.to, "Transition cancelled");
        true
    }

    /// Swap in a new item list and reset to the first item
    ///
    /// Clamped viewers reset to their lower stop instead.
    pub fn replace_items(&self, items: Vec<T>) -> Result<(), ViewerError> {
        let mut state = self.state.lock();

        if state.transition == TransitionState::Transitioning {
            debug!("Item replacement rejected: transition in flight");
            return Err(ViewerError::TransitionInFlight);
        }

        let previous = state.current;
        let current = position::initial_index(0, items.len(), self.config.boundary, self.config.min_index);
        state.items = Arc::from(items);
        state.current = current;
        let items = state.items.clone();

        drop(state);
        debug!(len = items.len(), current, "Items replaced");

        self.notify_render(&items, current, previous);
        Ok(())
    }

    /// Render the current state to every binding
    pub fn render_now(&self) {
        let state = self.state.lock();
        let items = state.items.clone();
        let current = state.current;
        drop(state);

        self.notify_render(&items, current, current);
    }

    pub fn current_index(&self) -> usize {
        self.state.lock().current
    }

    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn items(&self) -> Arc<[T]> {
        self.state.lock().items.clone()
    }

    pub fn transition_state(&self) -> TransitionState {
        self.state.lock().transition
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition_state() == TransitionState::Transitioning
    }

    /// When the pending transition will settle
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.lock().timers.next_due()
    }

    pub fn snapshot(&self) -> ViewerSnapshot {
        let state = self.state.lock();
        ViewerSnapshot {
            len: state.items.len(),
            current_index: state.current,
            transition: state.transition,
            pending_target: state.pending.map(|(_, settle)| settle.to),
        }
    }

    /// Add a render binding
    pub fn add_binding(&self, binding: Arc<dyn RenderBinding<T>>) {
        let mut bindings = self.bindings.write();
        bindings.push(Arc::downgrade(&binding));
    }

    fn live_bindings(&self) -> Vec<Arc<dyn RenderBinding<T>>> {
        let mut bindings = self.bindings.write();

        // Remove any dead weak references
        bindings.retain(|weak| weak.strong_count() > 0);
        bindings.iter().filter_map(Weak::upgrade).collect()
    }

    fn notify_render(&self, items: &[T], current: usize, previous: usize) {
        for binding in self.live_bindings() {
            binding.render(items, current, previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::viewer::BoundaryMode;
    use std::time::Duration;

    const STEP: Duration = Duration::from_millis(300);

    #[derive(Default)]
    struct RecordingBinding {
        renders: Mutex<Vec<(usize, usize)>>,
        starts: Mutex<Vec<(usize, usize, Direction)>>,
    }

    impl RenderBinding<u32> for RecordingBinding {
        fn render(&self, _items: &[u32], current: usize, previous: usize) {
            self.renders.lock().push((current, previous));
        }

        fn transition_started(&self, _items: &[u32], from: usize, to: usize, direction: Direction) {
            self.starts.lock().push((from, to, direction));
        }
    }

    fn make_viewer(len: u32, config: ViewerConfig) -> (Viewer<u32>, ManualClock, Arc<RecordingBinding>) {
        let clock = ManualClock::new();
        let viewer = Viewer::with_clock((0..len).collect(), config, Arc::new(clock.clone()));
        let binding = Arc::new(RecordingBinding::default());
        viewer.add_binding(binding.clone());
        (viewer, clock, binding)
    }

    fn settle(viewer: &Viewer<u32>, clock: &ManualClock) {
        clock.advance(STEP + Duration::from_millis(1));
        viewer.poll();
    }

    #[test]
    fn test_index_commits_only_after_duration() {
        let (viewer, clock, binding) = make_viewer(5, ViewerConfig::circular());

        assert!(viewer.next());
        assert_eq!(viewer.current_index(), 0);
        assert!(viewer.is_transitioning());
        assert_eq!(viewer.snapshot().pending_target, Some(1));

        clock.advance(Duration::from_millis(299));
        assert!(!viewer.poll());
        assert_eq!(viewer.current_index(), 0);

        clock.advance(Duration::from_millis(1));
        assert!(viewer.poll());
        assert_eq!(viewer.current_index(), 1);
        assert_eq!(viewer.transition_state(), TransitionState::Idle);
        assert_eq!(*binding.renders.lock(), vec![(1, 0)]);
        assert_eq!(*binding.starts.lock(), vec![(0, 1, Direction::Forward)]);
    }

    #[test]
    fn test_single_flight_drops_rapid_input() {
        let (viewer, clock, binding) = make_viewer(5, ViewerConfig::circular());

        assert!(viewer.next());
        assert!(!viewer.next());
        assert!(!viewer.previous());
        assert!(!viewer.go_to(1));

        settle(&viewer, &clock);
        assert_eq!(viewer.current_index(), 1);
        assert_eq!(binding.renders.lock().len(), 1);
        assert_eq!(binding.starts.lock().len(), 1);
    }

    #[test]
    fn test_end_to_end_circular_scenario() {
        let (viewer, clock, _binding) = make_viewer(5, ViewerConfig::circular());

        for _ in 0..3 {
            assert!(viewer.next());
            settle(&viewer, &clock);
        }
        assert_eq!(viewer.current_index(), 3);

        let (viewer, clock, _binding) = make_viewer(5, ViewerConfig::circular());
        assert!(viewer.next());
        assert!(!viewer.next());
        settle(&viewer, &clock);
        settle(&viewer, &clock);
        assert_eq!(viewer.current_index(), 1);
    }

    #[test]
    fn test_circular_full_loop_returns_to_start() {
        let (viewer, clock, _binding) = make_viewer(4, ViewerConfig::circular());

        for _ in 0..4 {
            viewer.next();
            settle(&viewer, &clock);
        }
        assert_eq!(viewer.current_index(), 0);

        viewer.previous();
        settle(&viewer, &clock);
        assert_eq!(viewer.current_index(), 3);
    }

    #[test]
    fn test_clamped_never_leaves_range() {
        let (viewer, clock, binding) = make_viewer(3, ViewerConfig::clamped());

        for _ in 0..6 {
            viewer.next();
            settle(&viewer, &clock);
        }
        assert_eq!(viewer.current_index(), 2);
        assert!(!viewer.next());

        for _ in 0..6 {
            viewer.previous();
            settle(&viewer, &clock);
        }
        assert_eq!(viewer.current_index(), 0);
        assert!(!viewer.previous());
        assert_eq!(binding.renders.lock().len(), 4);
    }

    #[test]
    fn test_min_index_stops_backward_movement() {
        let config = ViewerConfig::clamped().with_initial_index(1).with_min_index(1);
        let (viewer, clock, _binding) = make_viewer(6, config);

        assert_eq!(viewer.current_index(), 1);
        assert!(!viewer.previous());

        viewer.next();
        settle(&viewer, &clock);
        assert!(viewer.previous());
        settle(&viewer, &clock);
        assert_eq!(viewer.current_index(), 1);
    }

    #[test]
    fn test_go_to_requires_adjacency() {
        let (viewer, clock, binding) = make_viewer(5, ViewerConfig::circular());

        assert!(!viewer.go_to(2));
        assert!(!viewer.go_to(0));
        assert!(!viewer.go_to(17));
        assert_eq!(viewer.snapshot().transition, TransitionState::Idle);
        assert!(binding.starts.lock().is_empty());

        assert!(viewer.go_to(4));
        settle(&viewer, &clock);
        assert_eq!(viewer.current_index(), 4);
        assert_eq!(binding.starts.lock()[0].2, Direction::Backward);
    }

    #[test]
    fn test_replace_items_when_idle() {
        let (viewer, clock, binding) = make_viewer(5, ViewerConfig::clamped());
        viewer.next();
        settle(&viewer, &clock);
        binding.renders.lock().clear();

        viewer.replace_items(vec![10, 11, 12]).unwrap();

        assert_eq!(viewer.current_index(), 0);
        assert_eq!(viewer.len(), 3);
        assert_eq!(*binding.renders.lock(), vec![(0, 1)]);
    }

    #[test]
    fn test_replace_items_respects_min_index() {
        let config = ViewerConfig::clamped().with_initial_index(1).with_min_index(1);
        let (viewer, clock, binding) = make_viewer(6, config);
        viewer.next();
        settle(&viewer, &clock);
        binding.renders.lock().clear();

        viewer.replace_items(vec![20, 21, 22, 23]).unwrap();

        assert_eq!(viewer.current_index(), 1);
        assert_eq!(*binding.renders.lock(), vec![(1, 2)]);
        assert!(!viewer.previous());
    }

    #[test]
    fn test_replace_items_rejected_while_transitioning() {
        let (viewer, _clock, binding) = make_viewer(5, ViewerConfig::clamped());
        viewer.next();

        let result = viewer.replace_items(vec![7]);

        assert!(matches!(result, Err(ViewerError::TransitionInFlight)));
        assert_eq!(viewer.len(), 5);
        assert_eq!(viewer.current_index(), 0);
        assert!(binding.renders.lock().is_empty());
    }

    #[test]
    fn test_cancel_transition_keeps_index() {
        let (viewer, clock, binding) = make_viewer(5, ViewerConfig::circular());
        viewer.next();

        assert!(viewer.cancel_transition());
        assert!(!viewer.cancel_transition());
        assert_eq!(viewer.next_deadline(), None);

        clock.advance(STEP * 2);
        assert!(!viewer.poll());
        assert_eq!(viewer.current_index(), 0);
        assert!(binding.renders.lock().is_empty());
        assert!(viewer.next());
    }

    #[test]
    fn test_empty_and_single_item_viewers_ignore_navigation() {
        let (empty, _clock, _binding) = make_viewer(0, ViewerConfig::circular());
        assert!(empty.is_empty());
        assert!(!empty.next());
        assert!(!empty.previous());

        let (single, _clock, _binding) = make_viewer(1, ViewerConfig::circular());
        assert!(!single.next());
        assert_eq!(single.current_index(), 0);
    }

    #[test]
    fn test_dropped_binding_is_pruned() {
        let (viewer, clock, binding) = make_viewer(3, ViewerConfig::circular());
        let extra = Arc::new(RecordingBinding::default());
        viewer.add_binding(extra.clone());
        drop(extra);

        viewer.render_now();
        viewer.next();
        settle(&viewer, &clock);

        assert_eq!(*binding.renders.lock(), vec![(0, 0), (1, 0)]);
        assert_eq!(viewer.bindings.read().len(), 1);
    }

    #[test]
    fn test_boundary_mode_reported_in_config() {
        let (viewer, _clock, _binding) = make_viewer(3, ViewerConfig::clamped());
        assert_eq!(viewer.config().boundary, BoundaryMode::Clamped);
    }
}
