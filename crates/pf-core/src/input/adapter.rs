use super::{InputEvent, NavCommand, NavKey, Navigable};
use crate::config::{ClickMode, InputConfig};
use tracing::trace;

/// Translates input events into viewer navigation
///
/// The adapter holds only the swipe start position. Debouncing is left to the
/// viewer's transition guard.
#[derive(Debug, Clone)]
pub struct InputAdapter {
    config: InputConfig,
    touch_start_x: Option<f32>,
}

impl InputAdapter {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            touch_start_x: None,
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Dispatch one event. Returns the command the target accepted, if any.
    pub fn handle<N: Navigable + ?Sized>(&mut self, event: InputEvent, target: &N) -> Option<NavCommand> {
        let command = match event {
            InputEvent::TouchStart { screen_x } => {
                self.touch_start_x = Some(screen_x);
                return None;
            }
            InputEvent::TouchEnd { screen_x } => self.swipe(screen_x)?,
            InputEvent::Key(key) => self.key(key)?,
            InputEvent::ItemClick { index } => self.click(index, target.current_index())?,
        };

        let accepted = match command {
            NavCommand::Next => target.next(),
            NavCommand::Previous => target.previous(),
            NavCommand::GoTo(index) => target.go_to(index),
        };
        accepted.then_some(command)
    }

    fn swipe(&mut self, end_x: f32) -> Option<NavCommand> {
        let Some(start_x) = self.touch_start_x.take() else {
            trace!("Touch end without touch start");
            return None;
        };

        let distance = end_x - start_x;
        if distance.abs() <= self.config.min_swipe_distance {
            trace!(distance, "Swipe below threshold");
            return None;
        }

        // Leftward swipe pulls the next item in
        if distance < 0.0 {
            Some(NavCommand::Next)
        } else {
            Some(NavCommand::Previous)
        }
    }

    fn key(&self, key: NavKey) -> Option<NavCommand> {
        if !self.config.keyboard {
            return None;
        }
        match key {
            NavKey::ArrowRight => Some(NavCommand::Next),
            NavKey::ArrowLeft => Some(NavCommand::Previous),
            NavKey::Other => None,
        }
    }

    fn click(&self, index: usize, current: usize) -> Option<NavCommand> {
        match self.config.click_mode {
            ClickMode::Adjacent => Some(NavCommand::GoTo(index)),
            ClickMode::Spread if index == current => Some(NavCommand::Next),
            ClickMode::Spread if index + 1 == current => Some(NavCommand::Previous),
            ClickMode::Spread => {
                trace!(index, current, "Click outside the open spread");
                None
            }
        }
    }
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}
