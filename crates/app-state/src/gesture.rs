//! Pan gesture interpretation
//!
//! Two interpreters share the same start/active/end lifecycle:
//! - [`CardGesture`] turns horizontal drags on the feed card into a provisional
//!   offset and rotation, and classifies the release as a commit or a cancel.
//! - [`SheetDrag`] turns vertical drags on the settings sheet handle into a
//!   clamped position, and classifies the release as dismiss or restore.
//!
//! Both are pure: they never touch animated values or feed state directly.

use serde::{Deserialize, Serialize};

/// Horizontal side of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Left edge
    Left,
    /// Right edge
    Right,
}

impl Side {
    /// The other side
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of the x axis pointing toward this side
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Lifecycle phase of a pan sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanPhase {
    /// Pointer went down
    Began,
    /// Pointer moved
    Changed,
    /// Pointer lifted
    Ended,
}

/// A pan sample with cumulative translation along the tracked axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanEvent {
    /// Lifecycle phase
    pub phase: PanPhase,
    /// Translation since the gesture began
    pub translation: f32,
}

impl PanEvent {
    /// Gesture start
    pub fn began() -> Self {
        Self {
            phase: PanPhase::Began,
            translation: 0.0,
        }
    }

    /// Gesture movement
    pub fn changed(translation: f32) -> Self {
        Self {
            phase: PanPhase::Changed,
            translation,
        }
    }

    /// Gesture release
    pub fn ended(translation: f32) -> Self {
        Self {
            phase: PanPhase::Ended,
            translation,
        }
    }
}

/// How a released card drag resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Navigate forward, exiting toward this side
    Commit(Side),
    /// Snap back to center
    Cancel,
}

/// Classify a released drag; the threshold itself does not commit
pub fn classify_swipe(translation: f32, threshold: f32) -> SwipeOutcome {
    if translation > threshold {
        SwipeOutcome::Commit(Side::Right)
    } else if translation < -threshold {
        SwipeOutcome::Commit(Side::Left)
    } else {
        SwipeOutcome::Cancel
    }
}

/// Provisional card transform during a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    /// Horizontal offset
    pub offset: f32,
    /// Rotation factor (translation / threshold, unclamped)
    pub rotation: f32,
}

/// Interpreter for drags on the feed card
#[derive(Debug, Clone)]
pub struct CardGesture {
    threshold: f32,
    baseline: Option<f32>,
}

impl CardGesture {
    /// Create an interpreter with the given commit threshold
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            baseline: None,
        }
    }

    /// Commit threshold
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a gesture is being tracked
    pub fn is_tracking(&self) -> bool {
        self.baseline.is_some()
    }

    /// Capture the current offset as the gesture baseline
    pub fn begin(&mut self, current_offset: f32) {
        self.baseline = Some(current_offset);
    }

    /// Pose for a movement sample, or `None` if no gesture is tracked
    pub fn update(&self, translation: f32) -> Option<CardPose> {
        let baseline = self.baseline?;
        Some(CardPose {
            offset: baseline + translation,
            rotation: translation / self.threshold,
        })
    }

    /// Finish the gesture and classify it
    pub fn end(&mut self, translation: f32) -> Option<SwipeOutcome> {
        self.baseline.take()?;
        Some(classify_swipe(translation, self.threshold))
    }
}

/// How a released sheet drag resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Slide the sheet closed
    Dismiss,
    /// Slide the sheet back open
    Restore,
}

/// Interpreter for drag-to-dismiss on the settings sheet
#[derive(Debug, Clone)]
pub struct SheetDrag {
    open_position: f32,
    threshold: f32,
    baseline: Option<f32>,
}

impl SheetDrag {
    /// Create an interpreter for a sheet whose open position is `open_position`
    pub fn new(open_position: f32, threshold: f32) -> Self {
        Self {
            open_position,
            threshold,
            baseline: None,
        }
    }

    /// Whether a drag is being tracked
    pub fn is_tracking(&self) -> bool {
        self.baseline.is_some()
    }

    /// Capture the current sheet position as the drag baseline
    pub fn begin(&mut self, current_position: f32) {
        self.baseline = Some(current_position);
    }

    /// Sheet position for a movement sample; never above the open position
    pub fn update(&self, translation: f32) -> Option<f32> {
        let baseline = self.baseline?;
        Some((baseline + translation).max(self.open_position))
    }

    /// Finish the drag and classify it
    pub fn end(&mut self, translation: f32) -> Option<DragOutcome> {
        self.baseline.take()?;
        if translation > self.threshold {
            Some(DragOutcome::Dismiss)
        } else {
            Some(DragOutcome::Restore)
        }
    }
}
