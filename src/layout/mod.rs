//! Display preferences for the assessment page: candidate orientation and
//! container width.
//!
//! Both are remembered per evaluator through a [`PreferenceStore`]. Unknown or
//! unavailable stored values fall back to the first available option, and the
//! resolved value is written back on every change.

pub mod store;

#[cfg(test)]
mod tests;

pub use store::{MemoryPreferenceStore, PreferenceStore};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{ORIENTATION_STORE_KEY, WIDTH_STORE_KEY};

/// How the two candidate texts are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Stacked,
    /// Side by side; only offered on wide viewports.
    Horizontal,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Vertical,
        Orientation::Stacked,
        Orientation::Horizontal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Stacked => "stacked",
            Orientation::Horizontal => "horizontal",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|o| o.as_str() == normalized)
    }
}

/// Main container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthMode {
    Narrow,
    Wide,
}

impl WidthMode {
    pub const ALL: [WidthMode; 2] = [WidthMode::Narrow, WidthMode::Wide];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidthMode::Narrow => "narrow",
            WidthMode::Wide => "wide",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|w| w.as_str() == normalized)
    }

    /// Extra container class applied in this mode.
    pub fn container_class(&self) -> Option<&'static str> {
        match self {
            WidthMode::Narrow => None,
            WidthMode::Wide => Some("container-wide"),
        }
    }
}

/// One toggle button: its value and whether it is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleState<T> {
    pub value: T,
    pub active: bool,
}

/// Orientation and width state for one page, backed by a [`PreferenceStore`].
pub struct LayoutPreferences {
    store: Arc<dyn PreferenceStore>,
    horizontal_min_width: u32,
    viewport_width: u32,
    orientation: Orientation,
    width: WidthMode,
}

impl std::fmt::Debug for LayoutPreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutPreferences")
            .field("horizontal_min_width", &self.horizontal_min_width)
            .field("viewport_width", &self.viewport_width)
            .field("orientation", &self.orientation)
            .field("width", &self.width)
            .finish()
    }
}

impl LayoutPreferences {
    /// Loads stored choices, resolves them against the viewport, and writes
    /// the resolved values back.
    pub fn load(
        store: Arc<dyn PreferenceStore>,
        horizontal_min_width: u32,
        viewport_width: u32,
    ) -> Self {
        let mut prefs = Self {
            store,
            horizontal_min_width,
            viewport_width,
            orientation: Orientation::Vertical,
            width: WidthMode::Narrow,
        };
        let stored_orientation = prefs.store.get(ORIENTATION_STORE_KEY);
        let stored_width = prefs.store.get(WIDTH_STORE_KEY);
        prefs.set_orientation(stored_orientation.as_deref().unwrap_or_default());
        prefs.set_width(stored_width.as_deref().unwrap_or_default());
        prefs
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn width(&self) -> WidthMode {
        self.width
    }

    /// Orientations offered at the current viewport width.
    pub fn available_orientations(&self) -> Vec<Orientation> {
        Orientation::ALL
            .into_iter()
            .filter(|o| {
                *o != Orientation::Horizontal || self.viewport_width >= self.horizontal_min_width
            })
            .collect()
    }

    /// Applies a requested orientation; unknown or unavailable values fall
    /// back to the first available one.
    pub fn set_orientation(&mut self, requested: &str) -> Orientation {
        let available = self.available_orientations();
        let resolved = Orientation::parse(requested)
            .filter(|o| available.contains(o))
            .or_else(|| available.first().copied())
            .unwrap_or(Orientation::Vertical);

        if resolved.as_str() != requested {
            debug!(requested, resolved = resolved.as_str(), "Orientation resolved");
        }
        self.orientation = resolved;
        self.store.set(ORIENTATION_STORE_KEY, resolved.as_str());
        resolved
    }

    /// Applies a requested width; unknown values fall back to narrow.
    pub fn set_width(&mut self, requested: &str) -> WidthMode {
        let resolved = WidthMode::parse(requested).unwrap_or(WidthMode::Narrow);
        self.width = resolved;
        self.store.set(WIDTH_STORE_KEY, resolved.as_str());
        resolved
    }

    /// Re-evaluates the orientation after a viewport resize.
    pub fn set_viewport_width(&mut self, viewport_width: u32) -> Orientation {
        self.viewport_width = viewport_width;
        let current = self.orientation.as_str();
        self.set_orientation(current)
    }

    /// Toggle states for the orientation buttons.
    pub fn orientation_toggles(&self) -> Vec<ToggleState<Orientation>> {
        self.available_orientations()
            .into_iter()
            .map(|value| ToggleState {
                value,
                active: value == self.orientation,
            })
            .collect()
    }

    /// Toggle states for the width buttons.
    pub fn width_toggles(&self) -> Vec<ToggleState<WidthMode>> {
        WidthMode::ALL
            .into_iter()
            .map(|value| ToggleState {
                value,
                active: value == self.width,
            })
            .collect()
    }
}
