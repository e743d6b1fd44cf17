//! Navigation route table for the site menus and the rotary dial

use std::time::Duration;
use ahash::AHashMap;
use tracing::debug;

/// Delay between a dial window click and leaving the page
pub const DIAL_NAVIGATION_DELAY: Duration = Duration::from_millis(450);

/// What the host should do for a resolved route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Open in a new browsing context
    OpenExternal(String),
    /// Smooth-scroll to an element on the current page
    ScrollTo(String),
    /// Replace the current location
    Navigate(String),
}

/// Symbolic key to destination mapping
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: AHashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: AHashMap::new(),
        }
    }

    /// Add or replace a route
    pub fn with_route(mut self, key: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(key, target);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, target: impl Into<String>) {
        self.routes.insert(key.into(), target.into());
    }

    pub fn target(&self, key: &str) -> Option<&str> {
        self.routes.get(key).map(String::as_str)
    }

    /// Work out what following `key` from `current_path` means
    pub fn resolve(&self, key: &str, current_path: &str) -> Option<RouteAction> {
        let target = self.target(key)?;

        let action = if target.starts_with("http") {
            RouteAction::OpenExternal(target.to_string())
        } else if let Some((page, anchor)) = target.split_once('#') {
            if page.is_empty() || current_path.ends_with(page) {
                RouteAction::ScrollTo(anchor.to_string())
            } else {
                RouteAction::Navigate(target.to_string())
            }
        } else {
            RouteAction::Navigate(target.to_string())
        };

        debug!(key, ?action, "Route resolved");
        Some(action)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
            .with_route("home", "index.html")
            .with_route("about", "index.html#hero")
            .with_route("art-design", "art-lobby.html")
            .with_route("engineering", "projects.html")
            .with_route("photography", "photography.html")
            .with_route(
                "resume",
                "https://drive.google.com/file/d/1H5tKhDrfGviwmIypsKUIibejHXK6Hu-X/view?usp=sharing",
            )
            .with_route("contact", "index.html#contact")
    }
}

/// Windows on the landing page dial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialTarget {
    Engineering,
    Art,
    Photo,
}

impl DialTarget {
    /// Parse the `data-target` value of a dial window
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "engineering" => Some(Self::Engineering),
            "art" => Some(Self::Art),
            "photo" => Some(Self::Photo),
            _ => None,
        }
    }

    pub fn page(&self) -> &'static str {
        match self {
            Self::Engineering => "projects.html",
            Self::Art => "art-lobby.html",
            Self::Photo => "photography.html",
        }
    }

    /// Navigation to perform once the dial has rotated into place
    pub fn action(&self) -> (Duration, RouteAction) {
        (DIAL_NAVIGATION_DELAY, RouteAction::Navigate(self.page().to_string()))
    }
}
