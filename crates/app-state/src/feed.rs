//! Card feed navigation state
//!
//! [`FeedController`] owns the current card index and the in-flight
//! transition. A transition runs in two animated phases (the current card
//! exits, then the next card enters) and only one transition may be in flight
//! at a time. Navigation requested while a transition is running is dropped.

use serde::{Deserialize, Serialize};

use crate::gesture::Side;

/// Feed navigation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    /// The feed has no items to navigate
    #[error("Feed has no items")]
    Empty,

    /// An index outside the catalog was requested
    #[error("Index {index} out of range for feed of {len} items")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of items
        len: usize,
    },
}

/// Result type for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;

/// Navigation direction through the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Next item, wrapping to the first
    Forward,
    /// Previous item, wrapping to the last
    Backward,
}

/// A planned card transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Index shown once the exit animation completes
    pub target_index: usize,
    /// Direction through the catalog
    pub direction: Direction,
    /// Side the current card slides out toward
    pub exit: Side,
    /// Side the next card slides in from
    pub enter_from: Side,
    /// Whether the card keeps its swipe rotation on exit and springs it back on enter
    pub with_rotation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Exiting(Transition),
    Entering(Transition),
}

/// Observable feed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedState {
    /// Index of the visible card
    pub current_index: usize,
    /// True while a transition is in flight
    pub animating: bool,
}

/// Feed navigation state machine
#[derive(Debug, Clone)]
pub struct FeedController {
    len: usize,
    current_index: usize,
    phase: Phase,
}

impl FeedController {
    /// Create a controller over `len` items, starting at the first
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(FeedError::Empty);
        }
        Ok(Self {
            len,
            current_index: 0,
            phase: Phase::Idle,
        })
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: construction rejects empty feeds
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the visible card
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether a transition is in flight
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Snapshot of the observable state
    pub fn state(&self) -> FeedState {
        FeedState {
            current_index: self.current_index,
            animating: self.is_animating(),
        }
    }

    /// The in-flight transition, if any
    pub fn transition(&self) -> Option<Transition> {
        match self.phase {
            Phase::Idle => None,
            Phase::Exiting(t) | Phase::Entering(t) => Some(t),
        }
    }

    /// Index reached by one step in `direction`
    pub fn step_index(&self, direction: Direction) -> usize {
        match direction {
            Direction::Forward => (self.current_index + 1) % self.len,
            Direction::Backward => (self.current_index + self.len - 1) % self.len,
        }
    }

    /// Start a transition, or return `None` if one is already in flight
    pub fn advance(
        &mut self,
        direction: Direction,
        exit: Side,
        with_rotation: bool,
    ) -> Option<Transition> {
        if self.is_animating() {
            tracing::debug!(?direction, "Transition in flight, ignoring navigation");
            return None;
        }

        let transition = Transition {
            target_index: self.step_index(direction),
            direction,
            exit,
            enter_from: exit.opposite(),
            with_rotation,
        };
        self.phase = Phase::Exiting(transition);
        tracing::debug!(
            from = self.current_index,
            to = transition.target_index,
            ?exit,
            "Starting card transition"
        );
        Some(transition)
    }

    /// Swipe-driven navigation: forward, exiting toward the swiped side
    pub fn swipe(&mut self, side: Side) -> Option<Transition> {
        self.advance(Direction::Forward, side, true)
    }

    /// Undo control: backward, exiting right without rotation
    pub fn undo(&mut self) -> Option<Transition> {
        self.advance(Direction::Backward, Side::Right, false)
    }

    /// Exit animation done: swap in the target card and begin entering
    pub fn finish_exit(&mut self) -> Option<Transition> {
        match self.phase {
            Phase::Exiting(transition) => {
                self.current_index = transition.target_index;
                self.phase = Phase::Entering(transition);
                Some(transition)
            }
            _ => None,
        }
    }

    /// Enter animation done: release the transition guard
    pub fn finish_enter(&mut self) -> bool {
        match self.phase {
            Phase::Entering(_) => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Jump straight to `index` without animating
    ///
    /// If a transition is still exiting it is retargeted, so the card that
    /// enters is the one jumped to.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(FeedError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        self.current_index = index;
        if let Phase::Exiting(ref mut transition) = self.phase {
            transition.target_index = index;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(feed: &mut FeedController) {
        assert!(feed.finish_exit().is_some());
        assert!(feed.finish_enter());
    }

    #[test]
    fn test_empty_feed_rejected() {
        assert_eq!(FeedController::new(0).unwrap_err(), FeedError::Empty);
    }

    #[test]
    fn test_forward_cycle_returns_to_start() {
        let mut feed = FeedController::new(4).unwrap();
        let start = feed.current_index();
        for _ in 0..feed.len() {
            feed.swipe(Side::Left).unwrap();
            complete(&mut feed);
        }
        assert_eq!(feed.current_index(), start);
    }

    #[test]
    fn test_backward_wraps() {
        let mut feed = FeedController::new(4).unwrap();
        let transition = feed.undo().unwrap();
        assert_eq!(transition.target_index, 3);
        assert_eq!(transition.exit, Side::Right);
        assert_eq!(transition.enter_from, Side::Left);
        assert!(!transition.with_rotation);
        complete(&mut feed);
        assert_eq!(feed.current_index(), 3);
    }

    #[test]
    fn test_advance_while_animating_is_noop() {
        let mut feed = FeedController::new(4).unwrap();
        feed.swipe(Side::Right).unwrap();
        let before = feed.state();

        assert!(feed.swipe(Side::Left).is_none());
        assert!(feed.undo().is_none());
        assert_eq!(feed.state(), before);

        // Still guarded while entering
        feed.finish_exit().unwrap();
        let entering = feed.state();
        assert!(feed.swipe(Side::Right).is_none());
        assert_eq!(feed.state(), entering);
    }

    #[test]
    fn test_completed_forward_transition() {
        let mut feed = FeedController::new(4).unwrap();
        let previous = feed.current_index();

        let transition = feed.swipe(Side::Right).unwrap();
        assert_eq!(transition.exit, Side::Right);
        assert_eq!(transition.enter_from, Side::Left);
        assert!(transition.with_rotation);
        assert!(feed.is_animating());
        assert_eq!(feed.current_index(), previous);

        feed.finish_exit().unwrap();
        assert_eq!(feed.current_index(), (previous + 1) % 4);
        assert!(feed.is_animating());

        assert!(feed.finish_enter());
        assert_eq!(
            feed.state(),
            FeedState {
                current_index: 1,
                animating: false
            }
        );
    }

    #[test]
    fn test_out_of_order_completions_ignored() {
        let mut feed = FeedController::new(3).unwrap();
        assert!(feed.finish_exit().is_none());
        assert!(!feed.finish_enter());

        feed.swipe(Side::Left).unwrap();
        assert!(!feed.finish_enter());
        assert!(feed.is_animating());
    }

    #[test]
    fn test_jump_to() {
        let mut feed = FeedController::new(4).unwrap();
        feed.jump_to(2).unwrap();
        assert_eq!(
            feed.state(),
            FeedState {
                current_index: 2,
                animating: false
            }
        );
        assert_eq!(
            feed.jump_to(4).unwrap_err(),
            FeedError::IndexOutOfRange { index: 4, len: 4 }
        );
    }

    #[test]
    fn test_jump_retargets_exiting_transition() {
        let mut feed = FeedController::new(4).unwrap();
        feed.swipe(Side::Left).unwrap();
        feed.jump_to(3).unwrap();
        assert_eq!(feed.current_index(), 3);

        let transition = feed.finish_exit().unwrap();
        assert_eq!(transition.target_index, 3);
        assert_eq!(feed.current_index(), 3);
    }

    #[test]
    fn test_single_item_feed() {
        let mut feed = FeedController::new(1).unwrap();
        assert_eq!(feed.step_index(Direction::Forward), 0);
        assert_eq!(feed.step_index(Direction::Backward), 0);
        feed.undo().unwrap();
        complete(&mut feed);
        assert_eq!(feed.current_index(), 0);
    }
}
