//! Viewer and input configuration
//!
//! Each page hosting a viewer is described by a [`PageConfig`]. The presets
//! reproduce the three pages of the site; custom pages can be loaded from JSON.

use std::path::Path;
use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::error::ViewerError;
use crate::viewer::BoundaryMode;

/// Default delay before a transition settles
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Default horizontal distance a touch must travel to count as a swipe
pub const DEFAULT_MIN_SWIPE_DISTANCE: f32 = 50.0;

/// Configuration for a single viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// What happens at the ends of the list
    pub boundary: BoundaryMode,

    /// Index shown when the viewer is created
    pub initial_index: usize,

    /// Lowest index reachable in clamped mode
    pub min_index: usize,

    /// Time between a transition starting and the index committing
    #[serde(rename = "transition_duration_ms", with = "duration_ms")]
    pub transition_duration: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryMode::Circular,
            initial_index: 0,
            min_index: 0,
            transition_duration: Duration::from_millis(DEFAULT_TRANSITION_MS),
        }
    }
}

impl ViewerConfig {
    pub fn circular() -> Self {
        Self::default()
    }

    pub fn clamped() -> Self {
        Self {
            boundary: BoundaryMode::Clamped,
            ..Self::default()
        }
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    pub fn with_min_index(mut self, index: usize) -> Self {
        self.min_index = index;
        self
    }

    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Check the configuration is self-consistent
    pub fn validate(&self) -> Result<(), ViewerError> {
        if self.boundary == BoundaryMode::Clamped && self.initial_index < self.min_index {
            return Err(ViewerError::InvalidConfig(format!(
                "initial_index {} is below min_index {}",
                self.initial_index, self.min_index
            )));
        }
        Ok(())
    }
}

/// How clicks on items map to navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickMode {
    /// Clicking the item one step away moves to it
    #[default]
    Adjacent,
    /// Two-page spread: clicking the current (right) page goes forward,
    /// clicking the page before it (left) goes back
    Spread,
}

/// Configuration for the input adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum horizontal travel, in logical pixels, for a swipe
    pub min_swipe_distance: f32,

    /// Whether arrow keys navigate
    pub keyboard: bool,

    /// Item click behaviour
    pub click_mode: ClickMode,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
            keyboard: true,
            click_mode: ClickMode::Adjacent,
        }
    }
}

/// Everything needed to host a viewer on a page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub viewer: ViewerConfig,
    pub input: InputConfig,
}

impl PageConfig {
    /// Stacked paper sheets, wrapping around
    pub fn portraits() -> Self {
        Self {
            viewer: ViewerConfig::circular(),
            input: InputConfig::default(),
        }
    }

    /// Page-flip book opened on its first spread
    ///
    /// Page 0 is the front cover base and stays flipped.
    pub fn sketchbook() -> Self {
        Self {
            viewer: ViewerConfig::clamped().with_initial_index(1).with_min_index(1),
            input: InputConfig {
                click_mode: ClickMode::Spread,
                ..InputConfig::default()
            },
        }
    }

    /// Filmstrip carousel
    pub fn photography() -> Self {
        Self {
            viewer: ViewerConfig::clamped(),
            input: InputConfig::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ViewerError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.viewer.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ViewerError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json(&self) -> Result<String, ViewerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

mod duration_ms {
    use std::time::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
