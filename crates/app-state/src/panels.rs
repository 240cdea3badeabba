//! Overlay panel coordination
//!
//! Two sliding panels sit over the feed: the details panel (from the right
//! edge) and the settings sheet (from the bottom). Each is a plain open/closed
//! flag paired with an animated position owned by the animation context. The
//! panels are independent; both may be open at once.

use serde::{Deserialize, Serialize};

use crate::config::FeedConfig;

/// Overlay panel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    /// Event details, slides in from the right
    Details,
    /// Item list sheet, slides up from the bottom
    Settings,
}

/// Open and closed coordinates of a panel along its slide axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// Coordinate when fully open
    pub open: f32,
    /// Coordinate when fully closed
    pub closed: f32,
}

impl PanelGeometry {
    /// Coordinate for the given open flag
    pub fn position_for(&self, open: bool) -> f32 {
        if open {
            self.open
        } else {
            self.closed
        }
    }
}

/// Render-facing state of one panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelState {
    /// Open flag
    pub open: bool,
    /// Current animated position
    pub position: f32,
}

/// Open/closed flags for both panels
#[derive(Debug, Clone)]
pub struct PanelCoordinator {
    details_open: bool,
    settings_open: bool,
    details: PanelGeometry,
    settings: PanelGeometry,
}

impl PanelCoordinator {
    /// Create a coordinator with both panels closed
    pub fn new(details: PanelGeometry, settings: PanelGeometry) -> Self {
        Self {
            details_open: false,
            settings_open: false,
            details,
            settings,
        }
    }

    /// Build the geometry from the feed configuration
    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(
            PanelGeometry {
                open: config.details_open_position(),
                closed: config.details_closed_position(),
            },
            PanelGeometry {
                open: config.settings_open_position(),
                closed: config.settings_closed_position(),
            },
        )
    }

    /// Whether a panel is open
    pub fn is_open(&self, id: PanelId) -> bool {
        match id {
            PanelId::Details => self.details_open,
            PanelId::Settings => self.settings_open,
        }
    }

    /// Slide geometry of a panel
    pub fn geometry(&self, id: PanelId) -> PanelGeometry {
        match id {
            PanelId::Details => self.details,
            PanelId::Settings => self.settings,
        }
    }

    /// Coordinate the panel should be heading toward
    pub fn target_position(&self, id: PanelId) -> f32 {
        self.geometry(id).position_for(self.is_open(id))
    }

    /// Flip a panel and return the coordinate to animate toward
    pub fn toggle(&mut self, id: PanelId) -> f32 {
        let open = !self.is_open(id);
        self.set_open(id, open);
        tracing::info!(panel = ?id, open, "Panel toggled");
        self.target_position(id)
    }

    /// Close a panel; returns the closed coordinate if it was open
    pub fn close(&mut self, id: PanelId) -> Option<f32> {
        if self.is_open(id) {
            Some(self.toggle(id))
        } else {
            None
        }
    }

    /// Record a close that the animation context already started
    pub fn mark_closed(&mut self, id: PanelId) {
        self.set_open(id, false);
    }

    /// Record an open that the animation context already started
    pub fn mark_open(&mut self, id: PanelId) {
        self.set_open(id, true);
    }

    /// Back-navigation: closes the details panel if open
    ///
    /// Returns whether the signal was consumed.
    pub fn handle_back(&mut self) -> bool {
        self.close(PanelId::Details).is_some()
    }

    fn set_open(&mut self, id: PanelId, open: bool) {
        match id {
            PanelId::Details => self.details_open = open,
            PanelId::Settings => self.settings_open = open,
        }
    }
}
